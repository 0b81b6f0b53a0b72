pub mod create;
pub mod delete;
pub mod list;
pub mod status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::alunos::requests::{CreateAlunoRequest, UpdateAlunoRequest};
use crate::storage::Storage;

pub struct AlunoService {
    storage: Option<Arc<dyn Storage>>,
}

impl AlunoService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_alunos(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_alunos(self, request).await
    }

    pub async fn create_aluno(
        &self,
        request: &HttpRequest,
        body: CreateAlunoRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_aluno(self, request, body).await
    }

    pub async fn update_aluno(
        &self,
        request: &HttpRequest,
        id: i64,
        body: UpdateAlunoRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_aluno(self, request, id, body).await
    }

    pub async fn delete_aluno(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_aluno(self, request, id).await
    }

    pub async fn toggle_status(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        status::toggle_status(self, request, id).await
    }
}
