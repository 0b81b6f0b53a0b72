use crate::cache::{MokaCacheWrapper, ObjectCache};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_ADMIN_EMAIL: &str = "admin@escola.local";
const DEFAULT_ADMIN_NAME: &str = "Administrador";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// 数据库中没有任何用户时创建初始管理员
///
/// 邮箱取 `ADMIN_EMAIL`，密码取 `ADMIN_PASSWORD`，未设置密码时随机生成并打印一次。
async fn seed_admin(storage: &Arc<dyn Storage>) -> Result<()> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!("Database already has {} user(s), skipping admin seed", count);
        return Ok(());
    }

    info!("No users found in database, creating initial admin account...");

    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN_PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Admin login: {} / {}", email, pwd);
        warn!("  Save this password or set ADMIN_PASSWORD");
        warn!("==========================================================");
        pwd
    });

    let password_hash = hash_password(&password)?;
    let user = storage
        .create_admin(DEFAULT_ADMIN_NAME, &email, &password_hash)
        .await?;

    info!("Initial admin account created (ID: {}, email: {})", user.id, user.email);
    Ok(())
}

/// 启动前准备：存储（含迁移）、初始管理员、用户缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    if let Err(e) = seed_admin(&storage).await {
        warn!("Failed to seed admin account: {}", e);
    }

    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new(&AppConfig::get().cache));
    debug!("User cache initialized");

    Ok(StartupContext { storage, cache })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_length() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert_ne!(pwd, generate_random_password(16));
    }
}
