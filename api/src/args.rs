use clap::Parser;
use foodswap_core::domain::common::{DatabaseConfig, FoodswapConfig, SweeperConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodswap-api", version, about = "foodswap REST API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Seconds between expiry sweeper passes.
    #[arg(long, env = "SWEEP_INTERVAL_SECONDS", default_value = "60")]
    pub sweep_interval_seconds: u64,

    /// Emit logs as JSON.
    #[arg(long, env = "LOG_JSON", default_value = "false")]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "3333")]
    pub port: u16,

    /// Path prefix mounted in front of every route, e.g. "/api".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value = "5432")]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "foodswap")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "foodswap")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "foodswap")]
    pub database_name: String,
}

impl From<Args> for FoodswapConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.database_host,
                port: args.db.database_port,
                username: args.db.database_user,
                password: args.db.database_password,
                name: args.db.database_name,
            },
            sweeper: SweeperConfig {
                interval_seconds: args.sweep_interval_seconds,
            },
        }
    }
}
