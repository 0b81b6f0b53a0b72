use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TurmaService;
use crate::models::{ApiResponse, turmas::requests::TurmaRequest};
use crate::services::error_response;

pub async fn create_turma(
    service: &TurmaService,
    request: &HttpRequest,
    body: TurmaRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.create_turma(body).await {
        Ok(view) => {
            info!(
                "Turma {} created with {} disciplinas",
                view.turma.id,
                view.disciplinas.len()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(view, "Turma criada com sucesso")))
        }
        Err(e) => Ok(error_response(e)),
    }
}
