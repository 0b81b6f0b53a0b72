use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn get_counts(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.counts().await {
        Ok(counts) => Ok(HttpResponse::Ok().json(ApiResponse::success(counts, "Totais do sistema"))),
        Err(e) => Ok(error_response(e)),
    }
}
