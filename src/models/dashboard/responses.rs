use serde::{Deserialize, Serialize};

use crate::models::alunos::entities::Aluno;
use crate::models::turmas::entities::TurmaView;

// 管理端统计
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountsResponse {
    pub usuarios_ativos: u64,
    pub professores: u64,
    pub alunos: u64,
    pub disciplinas: u64,
    pub turmas: u64,
}

// 学生端首页：本人档案 + 所在班级
#[derive(Debug, Clone, Serialize)]
pub struct AlunoDashboardResponse {
    pub aluno: Aluno,
    pub turma: Option<TurmaView>,
}
