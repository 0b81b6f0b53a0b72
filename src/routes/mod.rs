pub mod alunos;
pub mod associacoes;
pub mod auth;
pub mod dashboard;
pub mod disciplinas;
pub mod professores;
pub mod turmas;

pub use alunos::configure_alunos_routes;
pub use associacoes::configure_associacoes_routes;
pub use auth::configure_auth_routes;
pub use dashboard::configure_dashboard_routes;
pub use disciplinas::configure_disciplinas_routes;
pub use professores::configure_professores_routes;
pub use turmas::configure_turmas_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_professores_routes)
        .configure(configure_turmas_routes)
        .configure(configure_disciplinas_routes)
        .configure(configure_associacoes_routes)
        .configure(configure_alunos_routes)
        .configure(configure_dashboard_routes);
}
