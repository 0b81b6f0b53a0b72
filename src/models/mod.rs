pub mod associacoes;
pub mod auth;
pub mod common;
pub mod dashboard;
pub mod disciplinas;
pub mod professores;
pub mod alunos;
pub mod turmas;
pub mod users;

pub use common::{AppStartTime, ApiResponse, ErrorCode, StatusToggleResponse};
