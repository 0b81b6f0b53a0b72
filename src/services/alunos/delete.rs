use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AlunoService;
use crate::models::ApiResponse;
use crate::services::{error_response, invalidate_user_cache};

pub async fn delete_aluno(
    service: &AlunoService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_aluno(id).await {
        Ok(()) => {
            invalidate_user_cache(request).await;
            info!("Aluno {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Aluno excluído com sucesso")))
        }
        Err(e) => Ok(error_response(e)),
    }
}
