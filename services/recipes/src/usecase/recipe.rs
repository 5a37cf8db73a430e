use crate::domain::repository::RecipeRepository;
use crate::domain::types::{NewRecipe, Recipe, RecipeChanges, required};
use crate::error::RecipesServiceError;

// ── ListUserRecipes ──────────────────────────────────────────────────────────

pub struct ListUserRecipesUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> ListUserRecipesUseCase<R> {
    pub async fn execute(&self, user_id: Option<i32>) -> Result<Vec<Recipe>, RecipesServiceError> {
        let user_id = required(user_id, "userId")?;
        self.repo.list_by_user(user_id).await
    }
}

// ── ListAllRecipes ───────────────────────────────────────────────────────────

pub struct ListAllRecipesUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> ListAllRecipesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Recipe>, RecipesServiceError> {
        self.repo.list_all().await
    }
}

// ── CreateRecipe ─────────────────────────────────────────────────────────────

pub struct CreateRecipeInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub image_path: Option<String>,
    pub user_id: Option<i32>,
}

pub struct CreateRecipeUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> CreateRecipeUseCase<R> {
    /// Returns the id of the new recipe.
    pub async fn execute(&self, input: CreateRecipeInput) -> Result<i32, RecipesServiceError> {
        let recipe = NewRecipe {
            title: required(input.title, "title")?,
            description: required(input.description, "description")?,
            ingredients: required(input.ingredients, "ingredients")?,
            steps: required(input.steps, "steps")?,
            image_path: input.image_path,
            user_id: required(input.user_id, "userId")?,
        };
        self.repo.create(&recipe).await
    }
}

// ── UpdateRecipe ─────────────────────────────────────────────────────────────

pub struct UpdateRecipeInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub image_path: Option<String>,
}

pub struct UpdateRecipeUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> UpdateRecipeUseCase<R> {
    /// Overwrites every editable field; an absent `image_path` clears the image.
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateRecipeInput,
    ) -> Result<(), RecipesServiceError> {
        let changes = RecipeChanges {
            title: required(input.title, "title")?,
            description: required(input.description, "description")?,
            ingredients: required(input.ingredients, "ingredients")?,
            steps: required(input.steps, "steps")?,
            image_path: input.image_path,
        };
        self.repo.update(id, &changes).await
    }
}

// ── DeleteRecipe ─────────────────────────────────────────────────────────────

pub struct DeleteRecipeUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> DeleteRecipeUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), RecipesServiceError> {
        self.repo.delete(id).await
    }
}
