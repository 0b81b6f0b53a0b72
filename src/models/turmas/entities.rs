use serde::{Deserialize, Serialize};

use crate::models::disciplinas::entities::DisciplinaRef;
use crate::models::professores::entities::ProfessorRef;

// 班级
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turma {
    pub id: i64,
    pub nome: String,
    pub serie: String,
    pub ano: i32,
    pub ativa: bool,
}

// 班级摘要
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurmaRef {
    pub id: i64,
    pub nome: String,
}

// 班级中的一门学科及其授课教师（未分配时为空）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurmaDisciplina {
    pub id: i64,
    pub disciplina: DisciplinaRef,
    pub professor: Option<ProfessorRef>,
}

// 班级视图：班级信息 + 按学科名排序的授课安排
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurmaView {
    #[serde(flatten)]
    pub turma: Turma,
    pub disciplinas: Vec<TurmaDisciplina>,
}
