pub mod alunos;
pub mod associacoes;
pub mod auth;
pub mod dashboard;
pub mod disciplinas;
pub mod professores;
pub mod turmas;

pub use alunos::AlunoService;
pub use associacoes::AssociacaoService;
pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use disciplinas::DisciplinaService;
pub use professores::ProfessorService;
pub use turmas::TurmaService;

use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use tracing::error;

use crate::cache::ObjectCache;
use crate::errors::GestaoError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从 app_data 取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> actix_web::Result<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not registered in app data");
            actix_web::error::ErrorInternalServerError("Erro interno do servidor")
        })
}

/// 清空已认证用户缓存（用户被停用或删除后调用）
pub(crate) async fn invalidate_user_cache(request: &HttpRequest) {
    if let Some(cache) = request.app_data::<web::Data<Arc<dyn ObjectCache>>>() {
        cache.invalidate_all().await;
    }
}

/// 哈希密码前先检查邮箱是否已被占用
pub(crate) async fn ensure_email_unused(
    storage: &dyn Storage,
    email: &str,
) -> crate::errors::Result<()> {
    let email = email.trim();
    if storage.get_user_by_email(email).await?.is_some() {
        return Err(GestaoError::duplicate_email(format!(
            "O e-mail {email} já está em uso"
        )));
    }
    Ok(())
}

/// 业务错误 -> HTTP 响应；5xx 只返回通用消息，详情写日志
pub(crate) fn error_response(err: GestaoError) -> HttpResponse {
    let code = ErrorCode::from(&err);
    let status = err.status_code();

    if err.is_internal() {
        error!("{}", err.format_simple());
        return HttpResponse::build(status)
            .json(ApiResponse::error_empty(code, "Erro interno do servidor"));
    }

    HttpResponse::build(status).json(ApiResponse::error_empty(code, err.message()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_client_error_message_is_kept() {
        let resp = error_response(GestaoError::turma_is_active("Desative a turma"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], ErrorCode::TurmaIsActive as i32);
        assert_eq!(json["message"], "Desative a turma");
    }

    #[actix_web::test]
    async fn test_internal_error_is_masked() {
        let resp = error_response(GestaoError::database_operation("UNIQUE constraint failed"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Erro interno do servidor");
    }

    #[actix_web::test]
    async fn test_taken_email_is_rejected_before_hashing() {
        use crate::storage::sea_orm_storage::SeaOrmStorage;
        use sea_orm::{ConnectOptions, Database};

        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        let storage = SeaOrmStorage::from_connection(db).await.unwrap();

        storage
            .create_admin("Administrador", "admin@x.com", "hash")
            .await
            .unwrap();

        let err = ensure_email_unused(&storage, " admin@x.com ").await.unwrap_err();
        assert!(matches!(err, GestaoError::DuplicateEmail(_)));
        assert!(ensure_email_unused(&storage, "novo@x.com").await.is_ok());
    }
}
