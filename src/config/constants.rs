pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://bootstore.db";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

pub const STATIC_PREFIX: &str = "/static";

// Deployment preparation artifacts
pub const SECRET_KEY_FILE: &str = "vercel_secret_key.txt";
pub const CHECKLIST_FILE: &str = "VERCEL-CHECKLIST.md";
pub const SECRET_KEY_BYTES: usize = 32;
pub const REQUIRED_FILES: [&str; 3] = ["vercel.json", "Cargo.toml", "config.yaml"];
pub const REQUIRED_DIRS: [&str; 3] = ["src", "static", "templates"];
