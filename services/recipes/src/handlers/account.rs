use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::RecipesServiceError;
use crate::handlers::extract::AppJson;
use crate::state::AppState;
use crate::usecase::account::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub message: &'static str,
    pub user_id: i32,
}

// ── POST /api/register ───────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    AppJson(body): AppJson<CredentialsRequest>,
) -> Result<Json<AccountResponse>, RecipesServiceError> {
    let usecase = RegisterUseCase {
        repo: state.user_repo(),
    };
    let user_id = usecase
        .execute(RegisterInput {
            username: body.username,
            password: body.password,
        })
        .await
        .map_err(|e| e.with_message("Gagal mendaftar"))?;
    tracing::info!(user_id, "user registered");
    Ok(Json(AccountResponse {
        message: "Registrasi berhasil",
        user_id,
    }))
}

// ── POST /api/login ──────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<CredentialsRequest>,
) -> Result<Json<AccountResponse>, RecipesServiceError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await
        .map_err(|e| e.with_message("Gagal login"))?;
    Ok(Json(AccountResponse {
        message: "Login berhasil",
        user_id: user.id,
    }))
}
