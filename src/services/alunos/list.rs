use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AlunoService;
use crate::models::{ApiResponse, alunos::responses::AlunoListResponse};
use crate::services::error_response;

pub async fn list_alunos(
    service: &AlunoService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_alunos().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AlunoListResponse { items },
            "Alunos listados",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
