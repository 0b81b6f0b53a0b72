use serde::{Deserialize, Serialize};

// 学科
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Disciplina {
    pub id: i64,
    pub nome: String,
    pub codigo: String,
    pub carga_horaria: i32,
    pub ativa: bool,
}

// 学科摘要（用于关联展示）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisciplinaRef {
    pub id: i64,
    pub nome: String,
    pub codigo: String,
}

impl From<&Disciplina> for DisciplinaRef {
    fn from(d: &Disciplina) -> Self {
        Self {
            id: d.id,
            nome: d.nome.clone(),
            codigo: d.codigo.clone(),
        }
    }
}
