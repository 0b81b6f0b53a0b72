//! 首页数据：管理员统计、教师本人视图、学生本人档案

pub mod aluno;
pub mod counts;
pub mod professor;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn counts(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        counts::get_counts(self, request).await
    }

    pub async fn professor(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        professor::get_professor_dashboard(self, request).await
    }

    pub async fn aluno(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        aluno::get_aluno_dashboard(self, request).await
    }
}
