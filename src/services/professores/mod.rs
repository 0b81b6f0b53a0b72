pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::professores::requests::{CreateProfessorRequest, UpdateProfessorRequest};
use crate::storage::Storage;

pub struct ProfessorService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfessorService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_professores(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_professores(self, request).await
    }

    pub async fn get_professor(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_professor(self, request, id).await
    }

    pub async fn create_professor(
        &self,
        request: &HttpRequest,
        body: CreateProfessorRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_professor(self, request, body).await
    }

    pub async fn update_professor(
        &self,
        request: &HttpRequest,
        id: i64,
        body: UpdateProfessorRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_professor(self, request, id, body).await
    }

    pub async fn delete_professor(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_professor(self, request, id).await
    }

    // 启用/停用
    pub async fn toggle_status(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        status::toggle_status(self, request, id).await
    }
}
