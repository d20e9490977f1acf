/// Server configuration, loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub environment: String,

    // Reservation store (spreadsheet REST API)
    pub sheets_base_url: String,
    pub sheets_spreadsheet_id: String,
    pub sheets_api_token: String,
    pub sheet_name: String,

    // Logging
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),

            sheets_base_url: std::env::var("SHEETS_API_BASE_URL")
                .unwrap_or_else(|_| "https://sheets.googleapis.com".into()),
            sheets_spreadsheet_id: std::env::var("SHEETS_SPREADSHEET_ID").unwrap_or_default(),
            sheets_api_token: std::env::var("SHEETS_API_TOKEN").unwrap_or_default(),
            sheet_name: std::env::var("SHEET_NAME").unwrap_or_else(|_| "reservations".into()),

            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
