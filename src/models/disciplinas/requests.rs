use serde::Deserialize;

use crate::errors::{GestaoError, Result};

// 学科创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDisciplinaRequest {
    pub nome: String,
    pub codigo: String,
    pub carga_horaria: i32,
}

impl CreateDisciplinaRequest {
    pub fn validate(&self) -> Result<()> {
        validate_nome_codigo(&self.nome, &self.codigo)?;
        validate_carga_horaria(self.carga_horaria)
    }
}

// 学科更新请求（carga_horaria / ativa 缺省时保留原值）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDisciplinaRequest {
    pub nome: String,
    pub codigo: String,
    pub carga_horaria: Option<i32>,
    pub ativa: Option<bool>,
}

impl UpdateDisciplinaRequest {
    pub fn validate(&self) -> Result<()> {
        validate_nome_codigo(&self.nome, &self.codigo)?;
        match self.carga_horaria {
            Some(hours) => validate_carga_horaria(hours),
            None => Ok(()),
        }
    }
}

fn validate_nome_codigo(nome: &str, codigo: &str) -> Result<()> {
    if nome.trim().is_empty() {
        return Err(GestaoError::validation("Nome da disciplina é obrigatório"));
    }
    if codigo.trim().is_empty() {
        return Err(GestaoError::validation("Código da disciplina é obrigatório"));
    }
    Ok(())
}

fn validate_carga_horaria(hours: i32) -> Result<()> {
    if hours <= 0 {
        return Err(GestaoError::validation(
            "Carga horária deve ser maior que zero",
        ));
    }
    Ok(())
}
