use crate::errors::GestaoError;

/// API 层业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    RateLimitExceeded = 1004,
    InternalServerError = 1005,

    // 认证
    AuthFailed = 2000,
    UserInactive = 2001,

    // 校验与唯一性
    ValidationFailed = 3000,
    DuplicateEmail = 3001,
    DuplicateRegistration = 3002,
    DuplicateMatricula = 3003,
    DuplicateCode = 3004,
    DuplicateName = 3005,
    DuplicateAssociation = 3006,

    // 删除保护
    HasAssociations = 4001,
    HasActiveAssignments = 4002,
    HasGrades = 4003,
    HasAbsences = 4004,
    HasEnrolledStudents = 4005,
    TurmaIsActive = 4006,
}

impl From<&GestaoError> for ErrorCode {
    fn from(err: &GestaoError) -> Self {
        match err {
            GestaoError::Validation(_) => ErrorCode::ValidationFailed,
            GestaoError::NotFound(_) => ErrorCode::NotFound,
            GestaoError::DuplicateEmail(_) => ErrorCode::DuplicateEmail,
            GestaoError::DuplicateRegistration(_) => ErrorCode::DuplicateRegistration,
            GestaoError::DuplicateMatricula(_) => ErrorCode::DuplicateMatricula,
            GestaoError::DuplicateCode(_) => ErrorCode::DuplicateCode,
            GestaoError::DuplicateName(_) => ErrorCode::DuplicateName,
            GestaoError::DuplicateAssociation(_) => ErrorCode::DuplicateAssociation,
            GestaoError::HasAssociations(_) => ErrorCode::HasAssociations,
            GestaoError::HasActiveAssignments(_) => ErrorCode::HasActiveAssignments,
            GestaoError::HasGrades(_) => ErrorCode::HasGrades,
            GestaoError::HasAbsences(_) => ErrorCode::HasAbsences,
            GestaoError::HasEnrolledStudents(_) => ErrorCode::HasEnrolledStudents,
            GestaoError::TurmaIsActive(_) => ErrorCode::TurmaIsActive,
            GestaoError::Authentication(_) => ErrorCode::Unauthorized,
            GestaoError::Authorization(_) => ErrorCode::Forbidden,
            GestaoError::DatabaseConfig(_)
            | GestaoError::DatabaseConnection(_)
            | GestaoError::DatabaseOperation(_)
            | GestaoError::Serialization(_)
            | GestaoError::Internal(_) => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_errors_map_to_their_codes() {
        assert_eq!(
            ErrorCode::from(&GestaoError::turma_is_active("x")) as i32,
            4006
        );
        assert_eq!(
            ErrorCode::from(&GestaoError::duplicate_association("x")),
            ErrorCode::DuplicateAssociation
        );
        assert_eq!(
            ErrorCode::from(&GestaoError::database_connection("x")),
            ErrorCode::InternalServerError
        );
    }
}
