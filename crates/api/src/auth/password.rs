use crate::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost).map_err(|e| AppError::Internal(e.to_string()))
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hash).map_err(|e| AppError::Internal(e.to_string()))
    }

    pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_differs_from_plaintext_and_verifies() {
        let passwords = PasswordService::new(4);
        let hash = passwords.hash_password("123456").unwrap();

        assert_ne!(hash, "123456");
        assert!(passwords.verify_password("123456", &hash).unwrap());
        assert!(!passwords.verify_password("654321", &hash).unwrap());
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(PasswordService::validate_password_strength("12345").is_err());
        assert!(PasswordService::validate_password_strength("123456").is_ok());
    }
}
