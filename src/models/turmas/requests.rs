use serde::Deserialize;
use std::collections::HashSet;

use crate::errors::{GestaoError, Result};

// 班级中的一条学科安排
#[derive(Debug, Clone, Deserialize)]
pub struct TurmaDisciplinaInput {
    pub disciplina_id: i64,
    #[serde(default)]
    pub professor_id: Option<i64>,
}

// 班级创建/更新请求（更新时学科列表整体替换）
#[derive(Debug, Clone, Deserialize)]
pub struct TurmaRequest {
    pub nome: String,
    pub serie: String,
    pub ano: i32,
    #[serde(default)]
    pub disciplinas: Vec<TurmaDisciplinaInput>,
}

impl TurmaRequest {
    pub fn validate(&self) -> Result<()> {
        if self.nome.trim().is_empty() {
            return Err(GestaoError::validation("Nome da turma é obrigatório"));
        }
        if self.serie.trim().is_empty() {
            return Err(GestaoError::validation("Série é obrigatória"));
        }
        if self.ano <= 0 {
            return Err(GestaoError::validation("Ano inválido"));
        }
        if self.disciplinas.is_empty() {
            return Err(GestaoError::validation(
                "A turma deve ter pelo menos uma disciplina",
            ));
        }

        let mut seen = HashSet::new();
        for item in &self.disciplinas {
            if !seen.insert(item.disciplina_id) {
                return Err(GestaoError::validation(format!(
                    "Disciplina {} informada mais de uma vez",
                    item.disciplina_id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(disciplinas: Vec<TurmaDisciplinaInput>) -> TurmaRequest {
        TurmaRequest {
            nome: "1ºA".into(),
            serie: "1º ANO".into(),
            ano: 2024,
            disciplinas,
        }
    }

    #[test]
    fn test_empty_disciplinas_rejected() {
        let err = request(vec![]).validate().unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_repeated_disciplina_rejected() {
        let item = TurmaDisciplinaInput {
            disciplina_id: 1,
            professor_id: None,
        };
        assert!(request(vec![item.clone(), item]).validate().is_err());
    }

    #[test]
    fn test_professor_is_optional_in_payload() {
        let req: TurmaRequest = serde_json::from_str(
            r#"{"nome":"1ºA","serie":"1º ANO","ano":2024,"disciplinas":[{"disciplina_id":3}]}"#,
        )
        .unwrap();
        assert_eq!(req.disciplinas[0].professor_id, None);
        assert!(req.validate().is_ok());
    }
}
