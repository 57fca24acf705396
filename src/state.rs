use crate::jwt::{Jwt, JwtTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{env, str::FromStr, sync::Arc};

/// Runtime policy, read once at startup. Every value can be overridden from
/// the environment; unparsable values fall back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub default_page_limit: u64,
    pub token_expiry_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", 3000),
            default_page_limit: env_or("DEFAULT_PAGE_LIMIT", 15),
            token_expiry_hours: env_or("TOKEN_EXPIRY_HOURS", 12),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;
    type Jwt: JwtTrait;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Self::Jwt;
    fn config(&self) -> &Config;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
    config: Config,
}

impl State {
    pub async fn new() -> Arc<Self> {
        Self::with_database(Self::connect_database().await).await
    }

    pub async fn with_database(conn: DbConn) -> Arc<Self> {
        let config = Config::from_env();

        Arc::new(Self {
            database: conn,
            jwt: Jwt::from_env(&config),
            config,
        })
    }

    async fn connect_database() -> DbConn {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging(false);

        let db = Database::connect(opts)
            .await
            .expect("failed to connect to database");

        info!("Connected to database");

        db
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Jwt = Jwt;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Self::Jwt {
        &self.jwt
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
