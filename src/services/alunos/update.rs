use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AlunoService;
use crate::models::{ApiResponse, alunos::requests::UpdateAlunoRequest};
use crate::services::error_response;
use crate::utils::password::hash_password;

pub async fn update_aluno(
    service: &AlunoService,
    request: &HttpRequest,
    id: i64,
    mut body: UpdateAlunoRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Some(password) = body.password.take().filter(|p| !p.is_empty()) {
        match hash_password(&password) {
            Ok(hash) => body.password = Some(hash),
            Err(e) => return Ok(error_response(e)),
        }
    }

    match storage.update_aluno(id, body).await {
        Ok(aluno) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            aluno,
            "Aluno atualizado com sucesso",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
