use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn get_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_professor_view(id).await {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(view, "Professor encontrado"))),
        Err(e) => Ok(error_response(e)),
    }
}
