use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::{ApiResponse, professores::responses::ProfessorListResponse};
use crate::services::error_response;

pub async fn list_professores(
    service: &ProfessorService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_professores().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProfessorListResponse { items },
            "Professores listados",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
