use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProfessorService;
use crate::models::ApiResponse;
use crate::services::{error_response, invalidate_user_cache};

pub async fn delete_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_professor(id).await {
        Ok(()) => {
            invalidate_user_cache(request).await;
            info!("Professor {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Professor excluído com sucesso")))
        }
        Err(e) => Ok(error_response(e)),
    }
}
