use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::alunos::requests::{CreateAlunoRequest, UpdateAlunoRequest};
use crate::models::users::entities::UserRole;
use crate::services::AlunoService;
use crate::utils::SafeIDI64;

static ALUNO_SERVICE: Lazy<AlunoService> = Lazy::new(AlunoService::new_lazy);

pub async fn list_alunos(req: HttpRequest) -> ActixResult<HttpResponse> {
    ALUNO_SERVICE.list_alunos(&req).await
}

pub async fn create_aluno(
    req: HttpRequest,
    body: web::Json<CreateAlunoRequest>,
) -> ActixResult<HttpResponse> {
    ALUNO_SERVICE.create_aluno(&req, body.into_inner()).await
}

pub async fn update_aluno(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateAlunoRequest>,
) -> ActixResult<HttpResponse> {
    ALUNO_SERVICE.update_aluno(&req, id.0, body.into_inner()).await
}

pub async fn delete_aluno(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ALUNO_SERVICE.delete_aluno(&req, id.0).await
}

pub async fn toggle_status(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ALUNO_SERVICE.toggle_status(&req, id.0).await
}

pub fn configure_alunos_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/alunos")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_alunos))
                            .route(web::post().to(create_aluno)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(update_aluno))
                            .route(web::delete().to(delete_aluno)),
                    )
                    .route("/{id}/toggle-status", web::put().to(toggle_status)),
            ),
    );
}
