/*!
 * 速率限制中间件
 *
 * 按客户端 IP 对认证端点计数，窗口内超过上限返回 429。
 *
 * ```rust,ignore
 * web::resource("/login")
 *     .wrap(RateLimit::login())
 *     .route(web::post().to(login))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use std::net::IpAddr;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

const MAX_TRACKED_CLIENTS: u64 = 100_000;

/// 固定窗口计数器，键为 `前缀:ip`
#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window_secs: u64,
    key_prefix: &'static str,
    counters: Cache<String, u32>,
}

impl RateLimit {
    pub fn new(key_prefix: &'static str, max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix,
            counters: Cache::builder()
                .time_to_live(Duration::from_secs(window_secs))
                .max_capacity(MAX_TRACKED_CLIENTS)
                .build(),
        }
    }

    /// 登录：5 次/分钟/IP
    pub fn login() -> Self {
        Self::new("login", 5, 60)
    }

    /// 刷新令牌：10 次/分钟/IP
    pub fn refresh_token() -> Self {
        Self::new("refresh", 10, 60)
    }

    /// 计数一次，返回是否仍在限额内
    async fn hit(&self, client: &str) -> bool {
        let key = format!("{}:{}", self.key_prefix, client);
        let current = self.counters.get(&key).await.unwrap_or(0);
        if current >= self.max_requests {
            warn!(
                "Rate limit exceeded for key: {} ({}/{})",
                key, current, self.max_requests
            );
            return false;
        }
        self.counters
            .entry(key)
            .and_upsert_with(|entry| {
                let next = entry.map(|e| e.into_value() + 1).unwrap_or(1);
                ready(next)
            })
            .await;
        true
    }
}

fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}

/// 客户端 IP：连接地址优先，其次 X-Forwarded-For 第一个地址，再次 X-Real-IP
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    let forwarded = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| is_valid_ip(ip));
    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    let real_ip = req
        .headers()
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ip| is_valid_ip(ip));
    if let Some(ip) = real_ip {
        return ip.to_string();
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header(("Retry-After", retry_after.to_string()))
        .json(ApiResponse::error_empty(
            ErrorCode::RateLimitExceeded,
            "Muitas tentativas, tente novamente mais tarde",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let client = extract_client_ip(&req);
            if !limit.hit(&client).await {
                return Ok(req.into_response(
                    create_rate_limit_response(limit.window_secs).map_into_right_body(),
                ));
            }
            Ok(srv.call(req).await?.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");

        let refresh = RateLimit::refresh_token();
        assert_eq!(refresh.max_requests, 10);
    }

    #[test]
    fn test_ip_validation() {
        assert!(is_valid_ip("127.0.0.1"));
        assert!(is_valid_ip("::1"));
        assert!(!is_valid_ip("not-an-ip"));
    }

    #[tokio::test]
    async fn test_limit_is_per_client() {
        let limit = RateLimit::new("test", 2, 60);
        assert!(limit.hit("10.0.0.1").await);
        assert!(limit.hit("10.0.0.1").await);
        assert!(!limit.hit("10.0.0.1").await);
        assert!(limit.hit("10.0.0.2").await);
    }
}
