use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub storage: StorageBacking,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env_or("DATABASE_HOST", "localhost"),
            port: env_or("DATABASE_PORT", "5432").parse()?,
            username: env_or("DATABASE_USERNAME", "app"),
            password: env_or("DATABASE_PASSWORD", "passwd"),
            database: env_or("DATABASE_NAME", "app"),
        };
        let storage = match env_or("STORAGE_BACKEND", "database").as_str() {
            "memory" => StorageBacking::Memory,
            _ => StorageBacking::Database,
        };
        Ok(Self { database, storage })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

/// Which storage variant the registry is wired with at startup.
/// The in-memory variant holds all state in process memory and is
/// single-instance only.
pub enum StorageBacking {
    Database,
    Memory,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
