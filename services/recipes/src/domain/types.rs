use crate::error::RecipesServiceError;

/// Registered account. `password` is the cleartext credential as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

/// Credentials for a user that does not exist yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A stored recipe row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    /// Present in the table but never written by the service.
    pub origin: Option<String>,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub image_path: Option<String>,
    /// Owner as claimed by the client. Rows from an older database may lack it.
    pub user_id: Option<i32>,
}

/// Fields of a recipe about to be inserted.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub image_path: Option<String>,
    pub user_id: i32,
}

/// Full replacement of a recipe's editable fields. `id` and `user_id` never change.
#[derive(Debug, Clone)]
pub struct RecipeChanges {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub image_path: Option<String>,
}

/// Unwrap a request field, reporting its name when absent.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, RecipesServiceError> {
    value.ok_or(RecipesServiceError::MissingField(field))
}
