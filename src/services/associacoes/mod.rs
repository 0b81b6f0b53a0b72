pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::associacoes::requests::{AssociacaoListQuery, CreateAssociacaoRequest};
use crate::storage::Storage;

/// 教师资质与授课安排的直接维护
pub struct AssociacaoService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssociacaoService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_associacoes(
        &self,
        request: &HttpRequest,
        query: AssociacaoListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_associacoes(self, request, query).await
    }

    pub async fn create_associacao(
        &self,
        request: &HttpRequest,
        body: CreateAssociacaoRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_associacao(self, request, body).await
    }

    pub async fn delete_associacao(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_associacao(self, request, id).await
    }
}
