use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProfessorService;
use crate::models::{ApiResponse, StatusToggleResponse};
use crate::services::{error_response, invalidate_user_cache};

pub async fn toggle_status(
    service: &ProfessorService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.toggle_professor_active(id).await {
        Ok(ativo) => {
            if !ativo {
                invalidate_user_cache(request).await;
            }
            info!("Professor {} active = {}", id, ativo);
            let message = if ativo {
                "Professor ativado"
            } else {
                "Professor desativado e removido das turmas"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StatusToggleResponse { id, ativo },
                message,
            )))
        }
        Err(e) => Ok(error_response(e)),
    }
}
