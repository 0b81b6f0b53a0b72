use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TurmaService;
use crate::models::{ApiResponse, StatusToggleResponse};
use crate::services::error_response;

pub async fn toggle_status(
    service: &TurmaService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.toggle_turma_active(id).await {
        Ok(ativo) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StatusToggleResponse { id, ativo },
            if ativo { "Turma ativada" } else { "Turma desativada" },
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
