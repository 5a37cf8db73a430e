use anyhow::Context as _;
use tracing::{error, info};

use resepku_core::tracing::init_tracing;
use resepku_recipes::config::RecipesConfig;
use resepku_recipes::infra::db;
use resepku_recipes::router::build_router;
use resepku_recipes::state::AppState;
use resepku_recipes::usecase::seed::SeedUseCase;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RecipesConfig::from_env();

    let db = db::connect(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    db::ensure_schema(&db).await?;

    let state = AppState { db };

    // A failed seed leaves the demo data incomplete but the API usable.
    let seed = SeedUseCase {
        users: state.user_repo(),
        recipes: state.recipe_repo(),
    };
    match seed.execute().await {
        Ok(report) => info!(
            admin_id = report.admin_id,
            recipes_inserted = report.recipes_inserted,
            "seed data ready"
        ),
        Err(e) => error!(error = ?e, kind = e.kind(), "failed to seed demo data"),
    }

    let router = build_router(state);
    let addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("recipes service listening on http://{addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
