//! Configuración de variables de entorno
//!
//! La configuración se construye una sola vez en `main` y se pasa
//! explícitamente dentro del `AppState`; no hay estado global.

use anyhow::{bail, Result};
use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno.
    ///
    /// `DATABASE_URL` y `JWT_SECRET` son obligatorias; el resto tiene
    /// los mismos defaults que el servidor de desarrollo.
    pub fn from_env() -> Result<Self> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => bail!("DATABASE_URL no está definida en las variables de entorno"),
        };
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => bail!("JWT_SECRET no está definida en las variables de entorno"),
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            database_url,
            jwt_secret,
            // 3 horas, igual que la cookie de sesión
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "10800".to_string())
                .parse()
                .unwrap_or(10800),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
