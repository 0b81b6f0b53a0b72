use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::professores::requests::{CreateProfessorRequest, UpdateProfessorRequest};
use crate::models::users::entities::UserRole;
use crate::services::ProfessorService;
use crate::utils::SafeIDI64;

static PROFESSOR_SERVICE: Lazy<ProfessorService> = Lazy::new(ProfessorService::new_lazy);

pub async fn list_professores(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.list_professores(&req).await
}

pub async fn create_professor(
    req: HttpRequest,
    body: web::Json<CreateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .create_professor(&req, body.into_inner())
        .await
}

pub async fn get_professor(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.get_professor(&req, id.0).await
}

pub async fn update_professor(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .update_professor(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_professor(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.delete_professor(&req, id.0).await
}

pub async fn toggle_status(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.toggle_status(&req, id.0).await
}

// 仅管理员
pub fn configure_professores_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/professores")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_professores))
                            .route(web::post().to(create_professor)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(get_professor))
                            .route(web::put().to(update_professor))
                            .route(web::delete().to(delete_professor)),
                    )
                    .route("/{id}/toggle-status", web::put().to(toggle_status)),
            ),
    );
}
