use axum::{Json, extract::State};
use resepku_core::serde::lenient_id;
use serde::{Deserialize, Serialize};

use crate::domain::types::Recipe;
use crate::error::{LegacyListError, RecipesServiceError};
use crate::handlers::MessageResponse;
use crate::handlers::extract::{AppJson, AppPath, AppQuery};
use crate::state::AppState;
use crate::usecase::recipe::{
    CreateRecipeInput, CreateRecipeUseCase, DeleteRecipeUseCase, ListAllRecipesUseCase,
    ListUserRecipesUseCase, UpdateRecipeInput, UpdateRecipeUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// A recipe row as the mobile client reads it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: i32,
    pub title: String,
    pub origin: Option<String>,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub image_path: Option<String>,
    pub user_id: Option<i32>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            origin: recipe.origin,
            description: recipe.description,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
            image_path: recipe.image_path,
            user_id: recipe.user_id,
        }
    }
}

fn to_responses(recipes: Vec<Recipe>) -> Json<Vec<RecipeResponse>> {
    Json(recipes.into_iter().map(RecipeResponse::from).collect())
}

#[derive(Serialize)]
pub struct CreatedRecipeResponse {
    pub message: &'static str,
    pub id: i32,
}

// ── Request types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecipeListQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub image_path: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub image_path: Option<String>,
}

// ── GET /api/recipes?userId= ─────────────────────────────────────────────────

pub async fn list_recipes(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RecipeListQuery>,
) -> Result<Json<Vec<RecipeResponse>>, RecipesServiceError> {
    let usecase = ListUserRecipesUseCase {
        repo: state.recipe_repo(),
    };
    let recipes = usecase
        .execute(query.user_id)
        .await
        .map_err(|e| e.with_message("Gagal mengambil resep"))?;
    Ok(to_responses(recipes))
}

// ── GET /api/all-recipes ─────────────────────────────────────────────────────

pub async fn list_all_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, RecipesServiceError> {
    let usecase = ListAllRecipesUseCase {
        repo: state.recipe_repo(),
    };
    let recipes = usecase
        .execute()
        .await
        .map_err(|e| e.with_message("Gagal mengambil semua resep"))?;
    Ok(to_responses(recipes))
}

// ── GET /recipes ─────────────────────────────────────────────────────────────

/// Same listing as `/api/all-recipes`, kept for older clients; failures use the
/// `{"error": ...}` body.
pub async fn list_all_recipes_legacy(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, LegacyListError> {
    let usecase = ListAllRecipesUseCase {
        repo: state.recipe_repo(),
    };
    let recipes = usecase.execute().await?;
    Ok(to_responses(recipes))
}

// ── POST /api/recipes ────────────────────────────────────────────────────────

pub async fn create_recipe(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateRecipeRequest>,
) -> Result<Json<CreatedRecipeResponse>, RecipesServiceError> {
    let usecase = CreateRecipeUseCase {
        repo: state.recipe_repo(),
    };
    let id = usecase
        .execute(CreateRecipeInput {
            title: body.title,
            description: body.description,
            ingredients: body.ingredients,
            steps: body.steps,
            image_path: body.image_path,
            user_id: body.user_id,
        })
        .await
        .map_err(|e| e.with_message("Gagal menambah resep"))?;
    Ok(Json(CreatedRecipeResponse {
        message: "Resep berhasil ditambahkan",
        id,
    }))
}

// ── PUT /api/recipes/{id} ────────────────────────────────────────────────────

pub async fn update_recipe(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(body): AppJson<UpdateRecipeRequest>,
) -> Result<Json<MessageResponse>, RecipesServiceError> {
    let usecase = UpdateRecipeUseCase {
        repo: state.recipe_repo(),
    };
    usecase
        .execute(
            id,
            UpdateRecipeInput {
                title: body.title,
                description: body.description,
                ingredients: body.ingredients,
                steps: body.steps,
                image_path: body.image_path,
            },
        )
        .await
        .map_err(|e| e.with_message("Gagal mengupdate resep"))?;
    Ok(Json(MessageResponse {
        message: "Resep berhasil diperbarui",
    }))
}

// ── DELETE /api/recipes/{id} ─────────────────────────────────────────────────

pub async fn delete_recipe(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, RecipesServiceError> {
    let usecase = DeleteRecipeUseCase {
        repo: state.recipe_repo(),
    };
    usecase
        .execute(id)
        .await
        .map_err(|e| e.with_message("Gagal menghapus resep"))?;
    Ok(Json(MessageResponse {
        message: "Resep berhasil dihapus",
    }))
}
