// ABOUTME: Environment variable name constants and their fallback values
// ABOUTME: Centralized definitions of all environment variables read by Worktrack

// Database Configuration
pub const DB_URL: &str = "DB_URL";
pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";

// Server Configuration
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// Fallbacks used when the matching variable is unset
pub const DEFAULT_DB_URL: &str = "sqlite://worktrack.db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info";
