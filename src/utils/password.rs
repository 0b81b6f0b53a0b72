use crate::config::{AppConfig, Argon2Config};
use crate::errors::GestaoError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码（使用全局配置的 Argon2 参数）
pub fn hash_password(password: &str) -> Result<String, GestaoError> {
    hash_password_with(password, &AppConfig::get().argon2)
}

/// 使用指定参数哈希密码
pub fn hash_password_with(password: &str, config: &Argon2Config) -> Result<String, GestaoError> {
    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| GestaoError::internal(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| GestaoError::internal(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码（参数从哈希串中解析）
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_params() -> Argon2Config {
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password_with("pw", &light_params()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("pw", &hash));
        assert!(!verify_password("outra", &hash));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(!verify_password("pw", "not-a-hash"));
    }
}
