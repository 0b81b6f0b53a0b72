use serde::{Deserialize, Serialize};

use crate::models::disciplinas::entities::{Disciplina, DisciplinaRef};
use crate::models::turmas::entities::TurmaRef;

// 教师（档案 + 用户信息）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Professor {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub registration: String,
    pub specialty: Option<String>,
    pub active: bool,
}

// 教师摘要
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProfessorRef {
    pub id: i64,
    pub name: String,
}

impl From<&Professor> for ProfessorRef {
    fn from(p: &Professor) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
        }
    }
}

// 教师在某班级某年度的授课安排
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VinculoResumo {
    pub id: i64,
    pub turma: TurmaRef,
    pub disciplina: DisciplinaRef,
    pub ano: i32,
}

// 教师视图：资质与授课安排分别查询
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfessorView {
    #[serde(flatten)]
    pub professor: Professor,
    pub capacitacoes: Vec<Disciplina>,
    pub vinculos: Vec<VinculoResumo>,
}
