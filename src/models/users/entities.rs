use serde::{Deserialize, Serialize};

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,     // 管理员
    Professor, // 教师
    Aluno,     // 学生
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const PROFESSOR: &'static str = "professor";
    pub const ALUNO: &'static str = "aluno";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn professor_roles() -> &'static [&'static UserRole] {
        &[&Self::Professor]
    }
    pub fn aluno_roles() -> &'static [&'static UserRole] {
        &[&Self::Aluno]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "Papel inválido: '{s}'. Valores aceitos: admin, professor, aluno"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::Professor => write!(f, "{}", UserRole::PROFESSOR),
            UserRole::Aluno => write!(f, "{}", UserRole::ALUNO),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::PROFESSOR => Ok(UserRole::Professor),
            UserRole::ALUNO => Ok(UserRole::Aluno),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_str() {
        for role in [UserRole::Admin, UserRole::Professor, UserRole::Aluno] {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(role.clone()));
        }
        assert!("teacher".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: 1,
            email: "ana@x.com".into(),
            name: "Ana".into(),
            password_hash: "secret".into(),
            role: UserRole::Professor,
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"role\":\"professor\""));
    }
}
