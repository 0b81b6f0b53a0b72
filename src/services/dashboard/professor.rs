use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn get_professor_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Autenticação necessária",
        )));
    };
    let storage = service.get_storage(request)?;

    match storage.get_professor_view_by_user(user_id).await {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(view, "Painel do professor"))),
        Err(e) => Ok(error_response(e)),
    }
}
