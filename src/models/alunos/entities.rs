use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::turmas::entities::TurmaRef;

// 学生状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlunoStatus {
    #[default]
    Cursando,
    Aprovado,
    Reprovado,
    Transferido,
}

impl std::fmt::Display for AlunoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlunoStatus::Cursando => write!(f, "CURSANDO"),
            AlunoStatus::Aprovado => write!(f, "APROVADO"),
            AlunoStatus::Reprovado => write!(f, "REPROVADO"),
            AlunoStatus::Transferido => write!(f, "TRANSFERIDO"),
        }
    }
}

impl std::str::FromStr for AlunoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CURSANDO" => Ok(AlunoStatus::Cursando),
            "APROVADO" => Ok(AlunoStatus::Aprovado),
            "REPROVADO" => Ok(AlunoStatus::Reprovado),
            "TRANSFERIDO" => Ok(AlunoStatus::Transferido),
            _ => Err(format!("Invalid aluno status: {s}")),
        }
    }
}

// 学生（档案 + 用户信息 + 所在班级）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Aluno {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub matricula: String,
    pub data_nascimento: Option<NaiveDate>,
    pub responsavel: Option<String>,
    pub status: AlunoStatus,
    pub active: bool,
    pub turma: Option<TurmaRef>,
}
