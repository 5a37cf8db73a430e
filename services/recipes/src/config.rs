/// Recipes service configuration loaded from environment variables.
/// Every setting has a default, so an empty environment reproduces the
/// stock deployment: `db.sqlite` in the working directory, port 3000.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipesConfig {
    /// SQLite connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Pool size (default 5). Env var: `DATABASE_MAX_CONNECTIONS`.
    pub database_max_connections: u32,
    /// Bind address (default "0.0.0.0"). Env var: `RECIPES_HOST`.
    pub recipes_host: String,
    /// TCP port for the HTTP server (default 3000). Env var: `RECIPES_PORT`.
    pub recipes_port: u16,
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite?mode=rwc";

impl RecipesConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            recipes_host: lookup("RECIPES_HOST").unwrap_or_else(|| "0.0.0.0".to_owned()),
            recipes_port: lookup("RECIPES_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.recipes_host, self.recipes_port)
    }
}
