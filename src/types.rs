pub use crate::utils::database;
use crate::utils::config;
use async_trait::async_trait;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

/// Where uploaded images live on disk and how they are exposed to clients.
#[derive(Clone)]
pub struct StorageContext {
    pub upload_dir: String,
    pub domain: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub jwt_secret: String,
    pub token_expiry_hours: i64,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub storage: StorageContext,
    pub auth: AuthContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub upload_dir: String,
    pub domain: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_expiry_hours: i64,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = config::read_required("DATABASE_URL");
        let database_max_connections = config::read_parsed_or("DATABASE_MAX_CONNECTIONS", 25);
        let database_acquire_timeout_seconds =
            config::read_parsed_or("DATABASE_ACQUIRE_TIMEOUT_SECONDS", 5);
        let host = config::read_or("HOST", "0.0.0.0");
        let environment = config::read_or("APP_ENV", "development");
        let port = config::read_parsed_or::<u32>("PORT", 8000);
        let url = config::read_or("URL", &format!("http://{}:{}", host, port));
        let upload_dir = config::read_or("UPLOADS_DIR", "uploads");
        let domain = config::read_or("DOMAIN", &url);
        let jwt_secret = config::read_required("JWT_SECRET");
        let token_expiry_hours = config::read_parsed_or::<i64>("JWT_EXPIRY_HOURS", 24);

        Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections: database_max_connections,
                acquire_timeout_seconds: database_acquire_timeout_seconds,
            },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            storage: StorageConfig { upload_dir, domain },
            auth: AuthConfig {
                jwt_secret,
                token_expiry_hours,
            },
        }
    }
}

impl Config {
    pub fn into_context(self, db_conn: database::DatabaseConnection) -> Context {
        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            storage: StorageContext {
                upload_dir: self.storage.upload_dir,
                domain: self.storage.domain,
            },
            auth: AuthContext {
                jwt_secret: self.auth.jwt_secret,
                token_expiry_hours: self.auth.token_expiry_hours,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(&self.database).await;
        database::migrate(db_conn.clone()).await;

        self.into_context(db_conn)
    }
}
