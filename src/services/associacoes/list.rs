use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssociacaoService;
use crate::models::{
    ApiResponse,
    associacoes::{requests::AssociacaoListQuery, responses::AssociacaoListResponse},
};
use crate::services::error_response;

pub async fn list_associacoes(
    service: &AssociacaoService,
    request: &HttpRequest,
    query: AssociacaoListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_associacoes(query.professor_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssociacaoListResponse { items },
            "Associações listadas",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
