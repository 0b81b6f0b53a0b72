use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DisciplinaService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn delete_disciplina(
    service: &DisciplinaService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_disciplina(id).await {
        Ok(()) => {
            info!("Disciplina {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Disciplina excluída com sucesso",
            )))
        }
        Err(e) => Ok(error_response(e)),
    }
}
