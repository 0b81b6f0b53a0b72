use serde::Deserialize;

use crate::errors::{GestaoError, Result};
use crate::utils::validate::validate_email;

// 教师创建请求
//
// `password` 在进入存储层之前会被替换为哈希值。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfessorRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub registration: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub disciplinas: Vec<i64>,
}

impl CreateProfessorRequest {
    pub fn validate(&self) -> Result<()> {
        validate_profile(&self.name, &self.email, &self.registration)
    }
}

// 教师更新请求
//
// `disciplinas` 为空（未提供）时不改动资质；提供时整体替换。
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfessorRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub registration: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub disciplinas: Option<Vec<i64>>,
}

impl UpdateProfessorRequest {
    pub fn validate(&self) -> Result<()> {
        validate_profile(&self.name, &self.email, &self.registration)
    }
}

fn validate_profile(name: &str, email: &str, registration: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GestaoError::validation("Nome é obrigatório"));
    }
    validate_email(email.trim()).map_err(GestaoError::validation)?;
    if registration.trim().is_empty() {
        return Err(GestaoError::validation("Matrícula é obrigatória"));
    }
    Ok(())
}
