use std::env;
use chrono_tz::Tz;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub default_timezone: Tz,
    pub log_dir: String,
    pub bootstrap_manager_email: Option<String>,
    pub bootstrap_manager_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://vaga_livre.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            default_timezone: env::var("DEFAULT_TIMEZONE")
                .unwrap_or_else(|_| "America/Sao_Paulo".to_string())
                .parse()
                .expect("DEFAULT_TIMEZONE must be an IANA timezone name"),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
            bootstrap_manager_email: env::var("BOOTSTRAP_MANAGER_EMAIL").ok().filter(|e| !e.is_empty()),
            bootstrap_manager_name: env::var("BOOTSTRAP_MANAGER_NAME").unwrap_or_else(|_| "Síndico".to_string()),
        }
    }
}
