use super::entities::Atribuicao;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AssociacaoListResponse {
    pub items: Vec<Atribuicao>,
}
