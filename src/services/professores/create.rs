use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProfessorService;
use crate::errors::GestaoError;
use crate::models::{ApiResponse, professores::requests::CreateProfessorRequest};
use crate::services::{ensure_email_unused, error_response};
use crate::utils::password::hash_password;

pub async fn create_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    mut body: CreateProfessorRequest,
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

    match storage.create_professor(body).await {
        Ok(view) => {
            info!("Professor {} created", view.professor.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                view,
                "Professor cadastrado com sucesso",
            )))
        }
        Err(e) => Ok(error_response(e)),
    }
}
