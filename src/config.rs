use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Clinic WhatsApp number, digits only with country code.
    pub whatsapp_number: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            whatsapp_number: env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "553799084866".to_string()),
        }
    }
}
