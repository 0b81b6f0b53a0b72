//! 路径参数提取器
//!
//! 在进入处理程序之前校验 `{id}`，非法值直接返回统一格式的 400 响应。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 正整数 ID（来自路径参数 `{id}`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

fn parse_positive_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.parse::<i64>().ok()).filter(|id| *id > 0)
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match parse_positive_id(req.match_info().get("id")) {
            Some(id) => ready(Ok(SafeIDI64(id))),
            None => {
                let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "ID inválido",
                ));
                ready(Err(
                    InternalError::from_response("invalid id", response).into()
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id(Some("42")), Some(42));
        assert_eq!(parse_positive_id(Some("0")), None);
        assert_eq!(parse_positive_id(Some("-3")), None);
        assert_eq!(parse_positive_id(Some("abc")), None);
        assert_eq!(parse_positive_id(None), None);
    }
}
