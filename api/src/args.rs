use clap::Parser;
use fridgely_core::domain::common::{AuthConfig, DatabaseConfig, FridgelyConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "fridgely-api", about = "Fridgely grocery/fridge manager API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api/v1".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "http://localhost:19006")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "fridgely")]
    pub name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct AuthArgs {
    #[arg(long, env = "AUTH_SECRET_KEY", default_value = "change-me")]
    pub secret_key: String,

    #[arg(long, env = "ACCESS_TOKEN_EXPIRES_MINUTES", default_value_t = 150)]
    pub access_token_expires_minutes: i64,

    #[arg(long, env = "REFRESH_TOKEN_EXPIRES_MINUTES", default_value_t = 60 * 24 * 7)]
    pub refresh_token_expires_minutes: i64,
}

#[derive(Debug, Clone, Parser)]
pub struct LogArgs {
    /// Emit logs as JSON instead of the human-readable format.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub json: bool,

    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub filter: String,
}

impl From<Args> for FridgelyConfig {
    fn from(args: Args) -> Self {
        FridgelyConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            auth: AuthConfig {
                secret_key: args.auth.secret_key,
                access_token_expires_minutes: args.auth.access_token_expires_minutes,
                refresh_token_expires_minutes: args.auth.refresh_token_expires_minutes,
            },
        }
    }
}
