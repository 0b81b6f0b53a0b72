use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DisciplinaService;
use crate::models::{ApiResponse, disciplinas::requests::UpdateDisciplinaRequest};
use crate::services::error_response;

pub async fn update_disciplina(
    service: &DisciplinaService,
    request: &HttpRequest,
    id: i64,
    body: UpdateDisciplinaRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.update_disciplina(id, body).await {
        Ok(disciplina) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            disciplina,
            "Disciplina atualizada com sucesso",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
