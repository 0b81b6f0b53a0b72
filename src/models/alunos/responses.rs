use super::entities::Aluno;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AlunoListResponse {
    pub items: Vec<Aluno>,
}
