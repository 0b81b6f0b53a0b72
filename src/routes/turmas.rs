use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::turmas::requests::TurmaRequest;
use crate::models::users::entities::UserRole;
use crate::services::TurmaService;
use crate::utils::SafeIDI64;

static TURMA_SERVICE: Lazy<TurmaService> = Lazy::new(TurmaService::new_lazy);

pub async fn list_turmas(req: HttpRequest) -> ActixResult<HttpResponse> {
    TURMA_SERVICE.list_turmas(&req).await
}

pub async fn create_turma(
    req: HttpRequest,
    body: web::Json<TurmaRequest>,
) -> ActixResult<HttpResponse> {
    TURMA_SERVICE.create_turma(&req, body.into_inner()).await
}

pub async fn get_turma(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TURMA_SERVICE.get_turma(&req, id.0).await
}

pub async fn update_turma(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<TurmaRequest>,
) -> ActixResult<HttpResponse> {
    TURMA_SERVICE.update_turma(&req, id.0, body.into_inner()).await
}

pub async fn delete_turma(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TURMA_SERVICE.delete_turma(&req, id.0).await
}

pub async fn toggle_status(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TURMA_SERVICE.toggle_status(&req, id.0).await
}

pub fn configure_turmas_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/turmas")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_turmas))
                            .route(web::post().to(create_turma)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(get_turma))
                            .route(web::put().to(update_turma))
                            .route(web::delete().to(delete_turma)),
                    )
                    .route("/{id}/toggle-status", web::put().to(toggle_status)),
            ),
    );
}
