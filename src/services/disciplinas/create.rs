use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DisciplinaService;
use crate::models::{ApiResponse, disciplinas::requests::CreateDisciplinaRequest};
use crate::services::error_response;

pub async fn create_disciplina(
    service: &DisciplinaService,
    request: &HttpRequest,
    body: CreateDisciplinaRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.create_disciplina(body).await {
        Ok(disciplina) => Ok(HttpResponse::Created().json(ApiResponse::success(
            disciplina,
            "Disciplina criada com sucesso",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
