use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AlunoService;
use crate::errors::GestaoError;
use crate::models::{ApiResponse, alunos::requests::CreateAlunoRequest};
use crate::services::{ensure_email_unused, error_response};
use crate::utils::password::hash_password;

pub async fn create_aluno(
    service: &AlunoService,
    request: &HttpRequest,
    mut body: CreateAlunoRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if body.password.is_empty() {
        return Ok(error_response(GestaoError::validation("Senha é obrigatória")));
    }
    if let Err(e) = ensure_email_unused(storage.as_ref(), &body.email).await {
        return Ok(error_response(e));
    }
    body.password = match hash_password(&body.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(e)),
    };

    match storage.create_aluno(body).await {
        Ok(aluno) => {
            info!("Aluno {} created", aluno.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                aluno,
                "Aluno cadastrado com sucesso",
            )))
        }
        Err(e) => Ok(error_response(e)),
    }
}
