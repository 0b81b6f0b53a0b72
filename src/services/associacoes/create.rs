use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssociacaoService;
use crate::models::{ApiResponse, associacoes::requests::CreateAssociacaoRequest};
use crate::services::error_response;

pub async fn create_associacao(
    service: &AssociacaoService,
    request: &HttpRequest,
    body: CreateAssociacaoRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.create_associacao(body).await {
        Ok(atribuicao) => {
            info!(
                "Association {} created (capacitacao = {})",
                atribuicao.id(),
                atribuicao.is_capacitacao()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                atribuicao,
                "Associação criada com sucesso",
            )))
        }
        Err(e) => Ok(error_response(e)),
    }
}
