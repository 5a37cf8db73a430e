use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User, required};
use crate::error::RecipesServiceError;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct RegisterUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUseCase<R> {
    /// Returns the id of the new user.
    pub async fn execute(&self, input: RegisterInput) -> Result<i32, RecipesServiceError> {
        let username = required(input.username, "username")?;
        let password = required(input.password, "password")?;
        if self.repo.find_by_username(&username).await?.is_some() {
            return Err(RecipesServiceError::UsernameTaken);
        }
        // A concurrent registration can still win between the lookup and the
        // insert; the UNIQUE constraint reports that as `UsernameTaken` too.
        self.repo.create(&NewUser { username, password }).await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<User, RecipesServiceError> {
        let (Some(username), Some(password)) = (input.username, input.password) else {
            return Err(RecipesServiceError::InvalidCredentials);
        };
        self.repo
            .find_by_credentials(&username, &password)
            .await?
            .ok_or(RecipesServiceError::InvalidCredentials)
    }
}
