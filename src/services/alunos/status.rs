use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AlunoService;
use crate::models::{ApiResponse, StatusToggleResponse};
use crate::services::{error_response, invalidate_user_cache};

pub async fn toggle_status(
    service: &AlunoService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.toggle_aluno_active(id).await {
        Ok(ativo) => {
            if !ativo {
                invalidate_user_cache(request).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StatusToggleResponse { id, ativo },
                if ativo { "Aluno ativado" } else { "Aluno desativado" },
            )))
        }
        Err(e) => Ok(error_response(e)),
    }
}
