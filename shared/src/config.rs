use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub messaging: MessagingConfig,
    pub users_api: ApiConfig,
    pub courts_api: ApiConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: env_or("PORT", "8082")
                .parse()
                .context("PORT must be a valid port number")?,
        };
        let database = DatabaseConfig {
            host: env_or("DATABASE_HOST", "localhost"),
            port: env_or("DATABASE_PORT", "5432")
                .parse()
                .context("DATABASE_PORT must be a valid port number")?,
            username: env_or("DATABASE_USERNAME", "app"),
            password: env_or("DATABASE_PASSWORD", "passwd"),
            database: env_or("DATABASE_NAME", "reservations"),
        };
        let messaging = MessagingConfig {
            url: env_or("NATS_URL", "nats://localhost:4222"),
        };
        let users_api = ApiConfig {
            base_url: env_or("USERS_API_URL", "http://localhost:8080"),
        };
        let courts_api = ApiConfig {
            base_url: env_or("COURTS_API_URL", "http://localhost:8081"),
        };
        Ok(Self {
            server,
            database,
            messaging,
            users_api,
            courts_api,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct MessagingConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
