use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DisciplinaService;
use crate::models::{ApiResponse, disciplinas::responses::DisciplinaListResponse};
use crate::services::error_response;

pub async fn list_disciplinas(
    service: &DisciplinaService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_disciplinas().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DisciplinaListResponse { items },
            "Disciplinas listadas",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
