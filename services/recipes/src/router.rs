use axum::{
    Router,
    routing::{get, post, put},
};

use resepku_core::health::healthz;
use resepku_core::middleware::with_http_layers;

use crate::handlers::{
    account::{login, register},
    health::readyz,
    recipe::{
        create_recipe, delete_recipe, list_all_recipes, list_all_recipes_legacy, list_recipes,
        update_recipe,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        // Recipes
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        .route("/api/recipes/{id}", put(update_recipe).delete(delete_recipe))
        .route("/api/all-recipes", get(list_all_recipes))
        .route("/recipes", get(list_all_recipes_legacy))
        .with_state(state);
    with_http_layers(router)
}
