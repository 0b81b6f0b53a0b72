use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TurmaService;
use crate::models::{ApiResponse, turmas::requests::TurmaRequest};
use crate::services::error_response;

pub async fn update_turma(
    service: &TurmaService,
    request: &HttpRequest,
    id: i64,
    body: TurmaRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.update_turma(id, body).await {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            view,
            "Turma atualizada com sucesso",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
