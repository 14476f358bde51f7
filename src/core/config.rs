use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
    pub reference_data: ReferenceDataConfig,
    pub local_state: LocalStateConfig,
    pub registration: RegistrationConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
    pub form_session_ttl: Duration,
}

/// Which remote store backs the `users` table
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres(DatabaseConfig),
    Rest(RestStoreConfig),
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// PostgREST-compatible hosted backend (e.g. Supabase)
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Project base URL, without the `/rest/v1` suffix
    pub base_url: String,
    pub api_key: String,
    pub table: String,
    pub timeout: Duration,
}

/// Sources of the four lookup tables. Each is a file path or an http(s) URL.
#[derive(Debug, Clone)]
pub struct ReferenceDataConfig {
    pub regions: String,
    pub provinces: String,
    pub cities: String,
    pub barangays: String,
}

#[derive(Debug, Clone)]
pub struct LocalStateConfig {
    pub path: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    pub login_redirect_url: String,
    pub redirect_delay_ms: u64,
    /// Re-check password strength on submit (off by default)
    pub require_strong_password: bool,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            store: StoreConfig::from_env()?,
            reference_data: ReferenceDataConfig::from_env(),
            local_state: LocalStateConfig::from_env(),
            registration: RegistrationConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(format!("{} must be a boolean (true/false)", name)),
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB
    const DEFAULT_FORM_SESSION_TTL_SECS: u64 = 3600; // 1 hour

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        let form_session_ttl_secs = env::var("FORM_SESSION_TTL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_FORM_SESSION_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "FORM_SESSION_TTL_SECS must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
            form_session_ttl: Duration::from_secs(form_session_ttl_secs),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        let backend = env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".to_string());

        match backend.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreConfig::Postgres(DatabaseConfig::from_env()?)),
            "rest" => Ok(StoreConfig::Rest(RestStoreConfig::from_env()?)),
            "memory" => Ok(StoreConfig::Memory),
            other => Err(format!(
                "STORE_BACKEND must be one of postgres, rest, memory (got '{}')",
                other
            )),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Postgres(_) => "postgres",
            StoreConfig::Rest(_) => "rest",
            StoreConfig::Memory => "memory",
        }
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl RestStoreConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("REST_STORE_URL")
            .map_err(|_| "REST_STORE_URL environment variable is required".to_string())?
            .trim_end_matches('/')
            .to_string();

        let api_key = env::var("REST_STORE_API_KEY")
            .map_err(|_| "REST_STORE_API_KEY environment variable is required".to_string())?;

        let table = env::var("REST_STORE_TABLE").unwrap_or_else(|_| "users".to_string());

        let timeout_secs = env::var("REST_STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "REST_STORE_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            api_key,
            table,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl ReferenceDataConfig {
    pub fn from_env() -> Self {
        Self {
            regions: env::var("GEO_REGIONS_SOURCE")
                .unwrap_or_else(|_| "data/region.json".to_string()),
            provinces: env::var("GEO_PROVINCES_SOURCE")
                .unwrap_or_else(|_| "data/province.json".to_string()),
            cities: env::var("GEO_CITIES_SOURCE").unwrap_or_else(|_| "data/city.json".to_string()),
            barangays: env::var("GEO_BARANGAYS_SOURCE")
                .unwrap_or_else(|_| "data/barangay.json".to_string()),
        }
    }
}

impl LocalStateConfig {
    pub fn from_env() -> Self {
        Self {
            path: env::var("LOCAL_STATE_PATH")
                .unwrap_or_else(|_| "data/state/local_state.json".to_string()),
            key: env::var("LOCAL_STATE_KEY").unwrap_or_else(|_| "loggedInUser".to_string()),
        }
    }
}

impl RegistrationConfig {
    const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;

    pub fn from_env() -> Result<Self, String> {
        let login_redirect_url =
            env::var("LOGIN_REDIRECT_URL").unwrap_or_else(|_| "login.html".to_string());

        let redirect_delay_ms = env::var("REDIRECT_DELAY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_REDIRECT_DELAY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "REDIRECT_DELAY_MS must be a valid number".to_string())?;

        let require_strong_password = parse_bool(
            "REQUIRE_STRONG_PASSWORD",
            &env::var("REQUIRE_STRONG_PASSWORD").unwrap_or_default(),
        )?;

        Ok(Self {
            login_redirect_url,
            redirect_delay_ms,
            require_strong_password,
        })
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            login_redirect_url: "login.html".to_string(),
            redirect_delay_ms: Self::DEFAULT_REDIRECT_DELAY_MS,
            require_strong_password: false,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Rehistro API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Student registration with cascading address lookup".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
