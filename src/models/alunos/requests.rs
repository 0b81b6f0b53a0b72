use chrono::NaiveDate;
use serde::Deserialize;

use super::entities::AlunoStatus;
use crate::errors::{GestaoError, Result};
use crate::utils::validate::validate_email;

// 学生创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlunoRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub matricula: String,
    #[serde(default)]
    pub data_nascimento: Option<NaiveDate>,
    #[serde(default)]
    pub responsavel: Option<String>,
    #[serde(default)]
    pub turma_id: Option<i64>,
}

impl CreateAlunoRequest {
    pub fn validate(&self) -> Result<()> {
        validate_profile(&self.name, &self.email, &self.matricula)
    }
}

// 学生更新请求（turma_id 缺省或为 null 时取消入班）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAlunoRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub matricula: String,
    #[serde(default)]
    pub data_nascimento: Option<NaiveDate>,
    #[serde(default)]
    pub responsavel: Option<String>,
    #[serde(default)]
    pub turma_id: Option<i64>,
    #[serde(default)]
    pub status: Option<AlunoStatus>,
}

impl UpdateAlunoRequest {
    pub fn validate(&self) -> Result<()> {
        validate_profile(&self.name, &self.email, &self.matricula)
    }
}

fn validate_profile(name: &str, email: &str, matricula: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GestaoError::validation("Nome é obrigatório"));
    }
    validate_email(email.trim()).map_err(GestaoError::validation)?;
    if matricula.trim().is_empty() {
        return Err(GestaoError::validation("Matrícula é obrigatória"));
    }
    Ok(())
}
