use tracing::debug;

use crate::domain::repository::{RecipeRepository, UserRepository};
use crate::domain::seed::{ADMIN_PASSWORD, ADMIN_USERNAME, SEED_RECIPES};
use crate::domain::types::NewUser;
use crate::error::RecipesServiceError;

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_id: i32,
    pub recipes_inserted: usize,
}

/// Ensures the demo account and its recipes exist. Running it again inserts nothing.
pub struct SeedUseCase<U: UserRepository, R: RecipeRepository> {
    pub users: U,
    pub recipes: R,
}

impl<U: UserRepository, R: RecipeRepository> SeedUseCase<U, R> {
    pub async fn execute(&self) -> Result<SeedReport, RecipesServiceError> {
        let admin_id = self.seed_admin_user().await?;
        let recipes_inserted = self.seed_recipes(admin_id).await?;
        Ok(SeedReport {
            admin_id,
            recipes_inserted,
        })
    }

    /// Insert `admin`/`admin` unless a user with that name exists. Returns its id.
    pub async fn seed_admin_user(&self) -> Result<i32, RecipesServiceError> {
        if let Some(admin) = self.users.find_by_username(ADMIN_USERNAME).await? {
            return Ok(admin.id);
        }
        let new_admin = NewUser {
            username: ADMIN_USERNAME.to_owned(),
            password: ADMIN_PASSWORD.to_owned(),
        };
        match self.users.create(&new_admin).await {
            Ok(id) => Ok(id),
            // Another process seeded it between the lookup and the insert.
            Err(RecipesServiceError::UsernameTaken) => self
                .users
                .find_by_username(ADMIN_USERNAME)
                .await?
                .map(|admin| admin.id)
                .ok_or_else(|| anyhow::anyhow!("admin user vanished after conflict").into()),
            Err(e) => Err(e),
        }
    }

    /// Insert each fixed recipe `user_id` does not already own by title.
    /// Returns how many rows were inserted.
    pub async fn seed_recipes(&self, user_id: i32) -> Result<usize, RecipesServiceError> {
        let mut inserted = 0;
        for seed in SEED_RECIPES {
            if self.recipes.exists_for_user(seed.title, user_id).await? {
                continue;
            }
            let id = self.recipes.create(&seed.to_new_recipe(user_id)).await?;
            debug!(recipe_id = id, title = seed.title, "seeded recipe");
            inserted += 1;
        }
        Ok(inserted)
    }
}
