use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Intervalo del polling del QR de WhatsApp (milisegundos)
    pub qr_poll_interval_ms: u32,
    pub paging: PagingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "https://api.booking-admin.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            qr_poll_interval_ms: 3000,
            paging: PagingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    pub default_page: u32,
    pub default_per_page: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_per_page: 10,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:5000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.booking-admin.example.com").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            qr_poll_interval_ms: option_env!("QR_POLL_INTERVAL_MS")
                .unwrap_or("3000").parse().unwrap_or(3000),
            paging: PagingConfig {
                default_page: option_env!("DEFAULT_PAGE")
                    .unwrap_or("1").parse().unwrap_or(1),
                default_per_page: option_env!("DEFAULT_PER_PAGE")
                    .unwrap_or("10").parse().unwrap_or(10),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
