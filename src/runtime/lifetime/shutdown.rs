use tokio::signal;
use tracing::{error, warn};

pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => warn!("Shutdown signal received, stopping server..."),
        Err(e) => {
            // 无法监听信号时保持挂起，让服务器继续运行
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
