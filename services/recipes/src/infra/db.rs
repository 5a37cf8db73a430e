use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use resepku_recipes_migration::Migrator;
use resepku_recipes_schema::{recipes, users};

use crate::domain::repository::{RecipeRepository, UserRepository};
use crate::domain::types::{NewRecipe, NewUser, Recipe, RecipeChanges, User};
use crate::error::RecipesServiceError;

// ── Connection & schema ──────────────────────────────────────────────────────

/// Open the SQLite store. In-memory URLs need `max_connections = 1`, since every
/// pooled connection would otherwise get its own empty database.
pub async fn connect(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options).await
}

/// Create both tables if absent. Safe to run on every start.
pub async fn ensure_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    Migrator::up(db, None).await.context("apply migrations")?;
    info!("schema ready");
    Ok(())
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, RecipesServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, RecipesServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .filter(users::Column::Password.eq(password))
            .one(&self.db)
            .await
            .context("find user by credentials")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<i32, RecipesServiceError> {
        let result = users::ActiveModel {
            username: Set(user.username.clone()),
            password: Set(user.password.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(model.id),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(RecipesServiceError::UsernameTaken)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password: model.password,
    }
}

// ── Recipe repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecipeRepository {
    pub db: DatabaseConnection,
}

impl RecipeRepository for DbRecipeRepository {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Recipe>, RecipesServiceError> {
        let models = recipes::Entity::find()
            .filter(recipes::Column::UserId.eq(user_id))
            .order_by_asc(recipes::Column::Id)
            .all(&self.db)
            .await
            .context("list recipes by user")?;
        Ok(models.into_iter().map(recipe_from_model).collect())
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, RecipesServiceError> {
        let models = recipes::Entity::find()
            .order_by_asc(recipes::Column::Id)
            .all(&self.db)
            .await
            .context("list all recipes")?;
        Ok(models.into_iter().map(recipe_from_model).collect())
    }

    async fn exists_for_user(
        &self,
        title: &str,
        user_id: i32,
    ) -> Result<bool, RecipesServiceError> {
        let count = recipes::Entity::find()
            .filter(recipes::Column::Title.eq(title))
            .filter(recipes::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .context("check recipe title for user")?;
        Ok(count > 0)
    }

    async fn create(&self, recipe: &NewRecipe) -> Result<i32, RecipesServiceError> {
        let model = recipes::ActiveModel {
            title: Set(recipe.title.clone()),
            description: Set(recipe.description.clone()),
            ingredients: Set(recipe.ingredients.clone()),
            steps: Set(recipe.steps.clone()),
            image_path: Set(recipe.image_path.clone()),
            user_id: Set(Some(recipe.user_id)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create recipe")?;
        Ok(model.id)
    }

    async fn update(&self, id: i32, changes: &RecipeChanges) -> Result<(), RecipesServiceError> {
        // update_many so that an unknown id affects zero rows instead of erroring.
        recipes::Entity::update_many()
            .set(recipes::ActiveModel {
                title: Set(changes.title.clone()),
                description: Set(changes.description.clone()),
                ingredients: Set(changes.ingredients.clone()),
                steps: Set(changes.steps.clone()),
                image_path: Set(changes.image_path.clone()),
                ..Default::default()
            })
            .filter(recipes::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update recipe")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RecipesServiceError> {
        recipes::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete recipe")?;
        Ok(())
    }
}

fn recipe_from_model(model: recipes::Model) -> Recipe {
    Recipe {
        id: model.id,
        title: model.title,
        origin: model.origin,
        description: model.description,
        ingredients: model.ingredients,
        steps: model.steps,
        image_path: model.image_path,
        user_id: model.user_id,
    }
}
