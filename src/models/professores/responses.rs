use super::entities::ProfessorView;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfessorListResponse {
    pub items: Vec<ProfessorView>,
}
