use super::entities::TurmaView;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TurmaListResponse {
    pub items: Vec<TurmaView>,
}
