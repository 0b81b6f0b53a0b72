use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和域名后缀
    if !EMAIL_RE.is_match(email) {
        return Err("E-mail inválido");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("ana@x.com").is_ok());
        assert!(validate_email("joao.silva+escola@colegio.edu.br").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("ana").is_err());
        assert!(validate_email("ana@x").is_err());
        assert!(validate_email("ana @x.com").is_err());
        assert!(validate_email("@x.com").is_err());
    }
}
