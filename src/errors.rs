//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称和 HTTP 状态码。

use actix_web::http::StatusCode;
use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - status_code() 方法 - 返回对应的 HTTP 状态码
/// - 便捷构造函数
macro_rules! define_gestao_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum GestaoError {
            $($variant(String),)*
        }

        impl GestaoError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GestaoError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GestaoError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GestaoError::$variant(msg) => msg,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(GestaoError::$variant(_) => StatusCode::$status,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GestaoError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GestaoError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gestao_errors! {
    Validation("E001", "Validation Error", BAD_REQUEST),
    NotFound("E002", "Resource Not Found", NOT_FOUND),
    DuplicateEmail("E003", "Duplicate Email", CONFLICT),
    DuplicateRegistration("E004", "Duplicate Registration", CONFLICT),
    DuplicateMatricula("E005", "Duplicate Matricula", CONFLICT),
    DuplicateCode("E006", "Duplicate Code", CONFLICT),
    DuplicateName("E007", "Duplicate Name", CONFLICT),
    DuplicateAssociation("E008", "Duplicate Association", CONFLICT),
    HasAssociations("E009", "Has Associations", BAD_REQUEST),
    HasActiveAssignments("E010", "Has Active Assignments", BAD_REQUEST),
    HasGrades("E011", "Has Grades", BAD_REQUEST),
    HasAbsences("E012", "Has Absences", BAD_REQUEST),
    HasEnrolledStudents("E013", "Has Enrolled Students", BAD_REQUEST),
    TurmaIsActive("E014", "Turma Is Active", BAD_REQUEST),
    Authentication("E015", "Authentication Error", UNAUTHORIZED),
    Authorization("E016", "Authorization Error", FORBIDDEN),
    DatabaseConfig("E017", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E018", "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation("E019", "Database Operation Error", INTERNAL_SERVER_ERROR),
    Serialization("E020", "Serialization Error", INTERNAL_SERVER_ERROR),
    Internal("E021", "Internal Error", INTERNAL_SERVER_ERROR),
}

impl GestaoError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为服务端内部错误（详情只写日志，不返回给客户端）
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl fmt::Display for GestaoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GestaoError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for GestaoError {
    fn from(err: sea_orm::DbErr) -> Self {
        GestaoError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GestaoError {
    fn from(err: serde_json::Error) -> Self {
        GestaoError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GestaoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GestaoError::validation("test").code(), "E001");
        assert_eq!(GestaoError::not_found("test").code(), "E002");
        assert_eq!(GestaoError::duplicate_association("test").code(), "E008");
        assert_eq!(GestaoError::turma_is_active("test").code(), "E014");
        assert_eq!(GestaoError::internal("test").code(), "E021");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            GestaoError::has_enrolled_students("test").error_type(),
            "Has Enrolled Students"
        );
        assert_eq!(
            GestaoError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GestaoError::duplicate_email("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            GestaoError::has_grades("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GestaoError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert!(GestaoError::database_operation("x").is_internal());
        assert!(!GestaoError::has_associations("x").is_internal());
    }

    #[test]
    fn test_db_err_maps_to_database_operation() {
        let err: GestaoError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E019");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_format_simple() {
        let err = GestaoError::validation("Nome obrigatório");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Nome obrigatório"));
    }
}
