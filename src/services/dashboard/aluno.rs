use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, dashboard::responses::AlunoDashboardResponse};
use crate::services::error_response;

pub async fn get_aluno_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Autenticação necessária",
        )));
    };
    let storage = service.get_storage(request)?;

    let aluno = match storage.get_aluno_by_user(user_id).await {
        Ok(aluno) => aluno,
        Err(e) => return Ok(error_response(e)),
    };

    // 未分班的学生只返回本人档案
    let turma = match aluno.turma.as_ref() {
        Some(turma) => match storage.get_turma_view(turma.id).await {
            Ok(view) => Some(view),
            Err(e) => return Ok(error_response(e)),
        },
        None => None,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AlunoDashboardResponse { aluno, turma },
        "Painel do aluno",
    )))
}
