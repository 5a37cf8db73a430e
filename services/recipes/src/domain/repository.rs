#![allow(async_fn_in_trait)]

use crate::domain::types::{NewRecipe, NewUser, Recipe, RecipeChanges, User};
use crate::error::RecipesServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, RecipesServiceError>;

    /// Exact match on both fields.
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, RecipesServiceError>;

    /// Insert a user and return its id. A username already in the table yields
    /// `UsernameTaken`.
    async fn create(&self, user: &NewUser) -> Result<i32, RecipesServiceError>;
}

/// Repository for recipes.
pub trait RecipeRepository: Send + Sync {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Recipe>, RecipesServiceError>;

    async fn list_all(&self) -> Result<Vec<Recipe>, RecipesServiceError>;

    /// Whether `user_id` already owns a recipe titled `title`.
    async fn exists_for_user(
        &self,
        title: &str,
        user_id: i32,
    ) -> Result<bool, RecipesServiceError>;

    /// Insert a recipe and return its id.
    async fn create(&self, recipe: &NewRecipe) -> Result<i32, RecipesServiceError>;

    /// Overwrite the editable fields. Unknown ids are not an error.
    async fn update(&self, id: i32, changes: &RecipeChanges) -> Result<(), RecipesServiceError>;

    /// Delete by id. Unknown ids are not an error.
    async fn delete(&self, id: i32) -> Result<(), RecipesServiceError>;
}
