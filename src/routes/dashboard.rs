use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::DashboardService;

static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn counts(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.counts(&req).await
}

pub async fn professor(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.professor(&req).await
}

pub async fn aluno(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.aluno(&req).await
}

pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dashboard")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/counts")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::get().to(counts)),
            )
            .service(
                web::resource("/professor")
                    .wrap(middlewares::RequireRole::new_any(UserRole::professor_roles()))
                    .route(web::get().to(professor)),
            )
            .service(
                web::resource("/aluno")
                    .wrap(middlewares::RequireRole::new_any(UserRole::aluno_roles()))
                    .route(web::get().to(aluno)),
            ),
    );
}
