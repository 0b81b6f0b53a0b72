use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssociacaoService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn delete_associacao(
    service: &AssociacaoService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_associacao(id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Associação excluída com sucesso",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
