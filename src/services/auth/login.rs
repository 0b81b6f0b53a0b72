use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

const INVALID_CREDENTIALS: &str = "E-mail ou senha incorretos";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let email = login_request.email.trim();

    let user = match storage.get_user_by_email(email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                INVALID_CREDENTIALS,
            )));
        }
        Err(e) => return Ok(crate::services::error_response(e)),
    };

    if !verify_password(&login_request.password, &user.password_hash) {
        info!("Failed login attempt for user {}", user.id);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            INVALID_CREDENTIALS,
        )));
    }

    if !user.active {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::UserInactive,
            "Usuário inativo",
        )));
    }

    let token_pair = match JwtUtils::generate_token_pair(user.id, user.role.clone()) {
        Ok(pair) => pair,
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Erro interno do servidor",
                )),
            );
        }
    };

    info!("User {} ({}) logged in", user.id, user.role);

    let refresh_cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);
    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: JwtUtils::access_token_ttl(),
        user,
        created_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login realizado com sucesso")))
}
