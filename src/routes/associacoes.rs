use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::associacoes::requests::{AssociacaoListQuery, CreateAssociacaoRequest};
use crate::models::users::entities::UserRole;
use crate::services::AssociacaoService;
use crate::utils::SafeIDI64;

static ASSOCIACAO_SERVICE: Lazy<AssociacaoService> = Lazy::new(AssociacaoService::new_lazy);

pub async fn list_associacoes(
    req: HttpRequest,
    query: web::Query<AssociacaoListQuery>,
) -> ActixResult<HttpResponse> {
    ASSOCIACAO_SERVICE
        .list_associacoes(&req, query.into_inner())
        .await
}

pub async fn create_associacao(
    req: HttpRequest,
    body: web::Json<CreateAssociacaoRequest>,
) -> ActixResult<HttpResponse> {
    ASSOCIACAO_SERVICE
        .create_associacao(&req, body.into_inner())
        .await
}

pub async fn delete_associacao(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSOCIACAO_SERVICE.delete_associacao(&req, id.0).await
}

pub fn configure_associacoes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/associacoes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_associacoes))
                            .route(web::post().to(create_associacao)),
                    )
                    .route("/{id}", web::delete().to(delete_associacao)),
            ),
    );
}
