use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TurmaService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn delete_turma(
    service: &TurmaService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_turma(id).await {
        Ok(()) => {
            info!("Turma {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Turma excluída com sucesso")))
        }
        Err(e) => Ok(error_response(e)),
    }
}
