pub mod create;
pub mod delete;
pub mod get;
pub mod status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::turmas::requests::TurmaRequest;
use crate::storage::Storage;

pub struct TurmaService {
    storage: Option<Arc<dyn Storage>>,
}

impl TurmaService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_turmas(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::list_turmas(self, request).await
    }

    pub async fn get_turma(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_turma(self, request, id).await
    }

    pub async fn create_turma(
        &self,
        request: &HttpRequest,
        body: TurmaRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_turma(self, request, body).await
    }

    // 更新班级；学科与教师的安排整体替换
    pub async fn update_turma(
        &self,
        request: &HttpRequest,
        id: i64,
        body: TurmaRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_turma(self, request, id, body).await
    }

    pub async fn delete_turma(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_turma(self, request, id).await
    }

    pub async fn toggle_status(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        status::toggle_status(self, request, id).await
    }
}
