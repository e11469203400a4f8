use infra::models::UserRow;
use infra::repos::{CreateUserData, UpdateUserData, UserRepo};
use uuid::Uuid;

use crate::auth::PasswordService;
use crate::error::AppError;
use crate::gql::domains::auth::types::SignupInput;
use crate::gql::domains::users::types::UpdateUserInput;
use crate::gql::types::ValidRoles;

#[derive(Clone)]
pub struct UsersService {
    repo: UserRepo,
    passwords: PasswordService,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl UsersService {
    pub fn new(repo: UserRepo, passwords: PasswordService) -> Self {
        Self { repo, passwords }
    }

    /// Hash the password and persist a new user with the default role.
    /// A taken email surfaces as `BadRequest`.
    pub async fn create(&self, input: SignupInput) -> Result<UserRow, AppError> {
        PasswordService::validate_password_strength(&input.password)?;
        let password_hash = self.passwords.hash_password(&input.password)?;

        let user = self
            .repo
            .create(CreateUserData {
                email: normalize_email(&input.email),
                full_name: input.full_name.trim().to_string(),
                password_hash,
                roles: None,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    pub async fn find_all(&self, roles: &[ValidRoles]) -> Result<Vec<UserRow>, AppError> {
        let roles: Vec<String> = roles.iter().map(|r| r.as_str().to_string()).collect();
        Ok(self.repo.list(&roles).await?)
    }

    pub async fn find_one_by_email(&self, email: &str) -> Result<UserRow, AppError> {
        let email = normalize_email(email);
        self.repo
            .get_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{email} not found")))
    }

    pub async fn find_one_by_id(&self, id: Uuid) -> Result<UserRow, AppError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{id} not found")))
    }

    /// Merge the provided fields into the user and stamp who changed it.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateUserInput,
        updated_by: &UserRow,
    ) -> Result<UserRow, AppError> {
        self.find_one_by_id(id).await?;

        let password_hash = match input.password.as_deref() {
            Some(password) => {
                PasswordService::validate_password_strength(password)?;
                Some(self.passwords.hash_password(password)?)
            }
            None => None,
        };

        let data = UpdateUserData {
            email: input.email.as_deref().map(normalize_email),
            full_name: input.full_name.map(|n| n.trim().to_string()),
            password_hash,
            roles: input
                .roles
                .map(|roles| roles.iter().map(|r| r.as_str().to_string()).collect()),
            is_active: input.is_active,
            last_update_by: Some(updated_by.id),
        };

        self.repo
            .update(id, data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{id} not found")))
    }

    pub async fn block(&self, id: Uuid, admin: &UserRow) -> Result<UserRow, AppError> {
        let user = self
            .repo
            .block(id, admin.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{id} not found")))?;

        tracing::info!(user_id = %user.id, blocked_by = %admin.id, "User blocked");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_email;

    #[test]
    fn emails_are_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  Jane@Shop.DEV "), "jane@shop.dev");
    }
}
