use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::{ApiResponse, professores::requests::UpdateProfessorRequest};
use crate::services::error_response;
use crate::utils::password::hash_password;

pub async fn update_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    id: i64,
    mut body: UpdateProfessorRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 仅在提供了新密码时重新哈希
    if let Some(password) = body.password.take().filter(|p| !p.is_empty()) {
        match hash_password(&password) {
            Ok(hash) => body.password = Some(hash),
            Err(e) => return Ok(error_response(e)),
        }
    }

    match storage.update_professor(id, body).await {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            view,
            "Professor atualizado com sucesso",
        ))),
        Err(e) => Ok(error_response(e)),
    }
}
