pub mod create;
pub mod delete;
pub mod list;
pub mod status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::disciplinas::requests::{CreateDisciplinaRequest, UpdateDisciplinaRequest};
use crate::storage::Storage;

pub struct DisciplinaService {
    storage: Option<Arc<dyn Storage>>,
}

impl DisciplinaService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_disciplinas(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_disciplinas(self, request).await
    }

    pub async fn create_disciplina(
        &self,
        request: &HttpRequest,
        body: CreateDisciplinaRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_disciplina(self, request, body).await
    }

    pub async fn update_disciplina(
        &self,
        request: &HttpRequest,
        id: i64,
        body: UpdateDisciplinaRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_disciplina(self, request, id, body).await
    }

    pub async fn delete_disciplina(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_disciplina(self, request, id).await
    }

    pub async fn toggle_status(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        status::toggle_status(self, request, id).await
    }
}
