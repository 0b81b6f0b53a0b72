use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TurmaService;
use crate::models::{ApiResponse, turmas::responses::TurmaListResponse};
use crate::services::error_response;

pub async fn list_turmas(
    service: &TurmaService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_turmas().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TurmaListResponse { items },
            "Turmas listadas",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}

pub async fn get_turma(
    service: &TurmaService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_turma_view(id).await {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(view, "Turma encontrada"))),
        Err(e) => Ok(error_response(e)),
    }
}
