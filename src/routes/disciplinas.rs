use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::disciplinas::requests::{CreateDisciplinaRequest, UpdateDisciplinaRequest};
use crate::models::users::entities::UserRole;
use crate::services::DisciplinaService;
use crate::utils::SafeIDI64;

static DISCIPLINA_SERVICE: Lazy<DisciplinaService> = Lazy::new(DisciplinaService::new_lazy);

pub async fn list_disciplinas(req: HttpRequest) -> ActixResult<HttpResponse> {
    DISCIPLINA_SERVICE.list_disciplinas(&req).await
}

pub async fn create_disciplina(
    req: HttpRequest,
    body: web::Json<CreateDisciplinaRequest>,
) -> ActixResult<HttpResponse> {
    DISCIPLINA_SERVICE
        .create_disciplina(&req, body.into_inner())
        .await
}

pub async fn update_disciplina(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateDisciplinaRequest>,
) -> ActixResult<HttpResponse> {
    DISCIPLINA_SERVICE
        .update_disciplina(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_disciplina(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    DISCIPLINA_SERVICE.delete_disciplina(&req, id.0).await
}

pub async fn toggle_status(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    DISCIPLINA_SERVICE.toggle_status(&req, id.0).await
}

pub fn configure_disciplinas_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/disciplinas")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_disciplinas))
                            .route(web::post().to(create_disciplina)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(update_disciplina))
                            .route(web::delete().to(delete_disciplina)),
                    )
                    .route("/{id}/toggle-status", web::put().to(toggle_status)),
            ),
    );
}
