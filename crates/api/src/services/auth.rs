use infra::models::UserRow;
use uuid::Uuid;

use super::UsersService;
use crate::auth::{JwtService, PasswordService};
use crate::error::AppError;
use crate::gql::domains::auth::types::{AuthResponse, LoginInput, SignupInput};

const BAD_CREDENTIALS: &str = "Email / Password do not match";
const INACTIVE_USER: &str = "User is inactive, talk with an admin";

#[derive(Clone)]
pub struct AuthService {
    users: UsersService,
    jwt: JwtService,
    passwords: PasswordService,
}

impl AuthService {
    pub fn new(users: UsersService, jwt: JwtService, passwords: PasswordService) -> Self {
        Self {
            users,
            jwt,
            passwords,
        }
    }

    fn issue(&self, user: UserRow) -> Result<AuthResponse, AppError> {
        let token = self
            .jwt
            .create_token(user.id, user.email.clone(), user.roles.clone())?;
        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn signup(&self, input: SignupInput) -> Result<AuthResponse, AppError> {
        let user = self.users.create(input).await?;
        self.issue(user)
    }

    pub async fn login(&self, input: LoginInput) -> Result<AuthResponse, AppError> {
        let user = match self.users.find_one_by_email(&input.email).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::BadRequest(BAD_CREDENTIALS.to_string()))
            }
            Err(e) => return Err(e),
        };

        if !self
            .passwords
            .verify_password(&input.password, &user.password_hash)?
        {
            return Err(AppError::BadRequest(BAD_CREDENTIALS.to_string()));
        }

        if !user.is_active {
            return Err(AppError::Unauthorized(INACTIVE_USER.to_string()));
        }

        tracing::info!(user_id = %user.id, "User logged in");
        self.issue(user)
    }

    /// Fresh token for an already authenticated user.
    pub fn revalidate_token(&self, user: UserRow) -> Result<AuthResponse, AppError> {
        self.issue(user)
    }

    /// Load the user a token points at; gone or blocked users are rejected.
    pub async fn validate_user(&self, id: Uuid) -> Result<UserRow, AppError> {
        let user = match self.users.find_one_by_id(id).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::Unauthorized("Token not valid".to_string()))
            }
            Err(e) => return Err(e),
        };

        if !user.is_active {
            return Err(AppError::Unauthorized(INACTIVE_USER.to_string()));
        }

        Ok(user)
    }
}
