pub mod error_code;
pub mod response;

pub use error_code::ErrorCode;
pub use response::{ApiResponse, StatusToggleResponse};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
