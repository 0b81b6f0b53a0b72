//! 学科-教师-班级关联的读取模型
//!
//! 数据库中资质与授课安排共用一张表，读取时转换为带标签的 `Atribuicao`，
//! 调用方无需再根据空字段推断含义。

use serde::{Deserialize, Serialize};

use crate::models::disciplinas::entities::DisciplinaRef;
use crate::models::professores::entities::ProfessorRef;
use crate::models::turmas::entities::TurmaRef;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "tipo", rename_all = "snake_case")]
pub enum Atribuicao {
    /// 教师具备讲授该学科的资质，不绑定班级
    Capacitacao {
        id: i64,
        disciplina: DisciplinaRef,
        professor: ProfessorRef,
        ano: i32,
    },
    /// 该学科在某班级某年度开设，`professor` 为空表示尚未分配
    Vinculo {
        id: i64,
        disciplina: DisciplinaRef,
        turma: TurmaRef,
        professor: Option<ProfessorRef>,
        ano: i32,
    },
}

impl Atribuicao {
    /// 根据关联行构造；既无班级也无教师的行没有意义，返回 None
    pub fn from_parts(
        id: i64,
        ano: i32,
        disciplina: DisciplinaRef,
        professor: Option<ProfessorRef>,
        turma: Option<TurmaRef>,
    ) -> Option<Self> {
        match (turma, professor) {
            (Some(turma), professor) => Some(Atribuicao::Vinculo {
                id,
                disciplina,
                turma,
                professor,
                ano,
            }),
            (None, Some(professor)) => Some(Atribuicao::Capacitacao {
                id,
                disciplina,
                professor,
                ano,
            }),
            (None, None) => None,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Atribuicao::Capacitacao { id, .. } | Atribuicao::Vinculo { id, .. } => *id,
        }
    }

    pub fn disciplina(&self) -> &DisciplinaRef {
        match self {
            Atribuicao::Capacitacao { disciplina, .. } | Atribuicao::Vinculo { disciplina, .. } => {
                disciplina
            }
        }
    }

    pub fn professor(&self) -> Option<&ProfessorRef> {
        match self {
            Atribuicao::Capacitacao { professor, .. } => Some(professor),
            Atribuicao::Vinculo { professor, .. } => professor.as_ref(),
        }
    }

    pub fn is_capacitacao(&self) -> bool {
        matches!(self, Atribuicao::Capacitacao { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat() -> DisciplinaRef {
        DisciplinaRef {
            id: 1,
            nome: "Matemática".into(),
            codigo: "MAT".into(),
        }
    }

    fn ana() -> ProfessorRef {
        ProfessorRef {
            id: 7,
            name: "Ana".into(),
        }
    }

    fn turma() -> TurmaRef {
        TurmaRef {
            id: 3,
            nome: "1ºA".into(),
        }
    }

    #[test]
    fn test_row_without_turma_is_capacitacao() {
        let a = Atribuicao::from_parts(10, 2024, mat(), Some(ana()), None).unwrap();
        assert!(a.is_capacitacao());
        assert_eq!(a.professor(), Some(&ana()));
        assert_eq!(a.id(), 10);
    }

    #[test]
    fn test_row_with_turma_is_vinculo_even_when_unassigned() {
        let a = Atribuicao::from_parts(11, 2024, mat(), None, Some(turma())).unwrap();
        assert!(!a.is_capacitacao());
        assert_eq!(a.professor(), None);
        assert_eq!(a.disciplina().codigo, "MAT");
    }

    #[test]
    fn test_row_without_turma_and_professor_is_rejected() {
        assert!(Atribuicao::from_parts(12, 2024, mat(), None, None).is_none());
    }

    #[test]
    fn test_serialized_with_kind_tag() {
        let a = Atribuicao::from_parts(11, 2024, mat(), Some(ana()), Some(turma())).unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["tipo"], "vinculo");
        assert_eq!(json["turma"]["nome"], "1ºA");
        assert_eq!(json["professor"]["name"], "Ana");
    }
}
