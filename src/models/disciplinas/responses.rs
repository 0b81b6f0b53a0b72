use super::entities::Disciplina;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DisciplinaListResponse {
    pub items: Vec<Disciplina>,
}
