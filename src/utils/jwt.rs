use crate::config::{AppConfig, JwtConfig};
use crate::models::users::entities::UserRole;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

const ACCESS: &str = "access";
const REFRESH: &str = "refresh";

// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // 用户 ID
    pub role: String,       // 用户角色
    pub token_type: String, // "access" 或 "refresh"
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }

    pub fn user_role(&self) -> Option<UserRole> {
        self.role.parse().ok()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn issue(
        config: &JwtConfig,
        user_id: i64,
        role: UserRole,
        token_type: &str,
        expiry: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: token_type.to_string(),
            exp: (now + expiry).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
    }

    fn verify_with(
        config: &JwtConfig,
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.secret.as_bytes()),
            &Validation::default(),
        )?
        .claims;

        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    /// 使用指定配置签发 access + refresh
    pub fn token_pair_with(
        config: &JwtConfig,
        user_id: i64,
        role: UserRole,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        Ok(TokenPair {
            access_token: Self::issue(
                config,
                user_id,
                role.clone(),
                ACCESS,
                chrono::Duration::minutes(config.access_token_expiry),
            )?,
            refresh_token: Self::issue(
                config,
                user_id,
                role,
                REFRESH,
                chrono::Duration::days(config.refresh_token_expiry),
            )?,
        })
    }

    pub fn generate_token_pair(
        user_id: i64,
        role: UserRole,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        Self::token_pair_with(&AppConfig::get().jwt, user_id, role)
    }

    pub fn generate_access_token(
        user_id: i64,
        role: UserRole,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = &AppConfig::get().jwt;
        Self::issue(
            config,
            user_id,
            role,
            ACCESS,
            chrono::Duration::minutes(config.access_token_expiry),
        )
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_with(&AppConfig::get().jwt, token, ACCESS)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_with(&AppConfig::get().jwt, token, REFRESH)
    }

    /// 访问令牌有效期（秒）
    pub fn access_token_ttl() -> i64 {
        AppConfig::get().jwt.access_token_expiry * 60
    }

    /// Refresh Token Cookie
    pub fn create_refresh_token_cookie(refresh_token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(REFRESH_TOKEN_COOKIE, refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(
                config.jwt.refresh_token_expiry,
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// 过期的空 Cookie（用于注销）
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        Cookie::build(REFRESH_TOKEN_COOKIE, "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry: 15,
            refresh_token_expiry: 7,
        }
    }

    #[test]
    fn test_token_pair_claims() {
        let config = test_config("segredo-de-teste");
        let pair = JwtUtils::token_pair_with(&config, 7, UserRole::Professor).unwrap();

        let claims = JwtUtils::verify_with(&config, &pair.access_token, ACCESS).unwrap();
        assert_eq!(claims.user_id(), Some(7));
        assert_eq!(claims.user_role(), Some(UserRole::Professor));

        let refresh = JwtUtils::verify_with(&config, &pair.refresh_token, REFRESH).unwrap();
        assert_eq!(refresh.token_type, REFRESH);
        assert_eq!(refresh.user_id(), Some(7));
        assert_eq!(refresh.user_role(), Some(UserRole::Professor));
    }

    #[test]
    fn test_token_type_mismatch() {
        let config = test_config("segredo-de-teste");
        let pair = JwtUtils::token_pair_with(&config, 1, UserRole::Admin).unwrap();
        assert!(JwtUtils::verify_with(&config, &pair.refresh_token, ACCESS).is_err());
        assert!(JwtUtils::verify_with(&config, &pair.access_token, REFRESH).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let pair = JwtUtils::token_pair_with(&test_config("a"), 1, UserRole::Aluno).unwrap();
        assert!(JwtUtils::verify_with(&test_config("b"), &pair.access_token, ACCESS).is_err());
    }
}
