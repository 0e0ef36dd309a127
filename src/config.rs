//! Service Configuration
//!
//! All settings are environment-provided, with defaults pointing at a local,
//! unauthenticated MongoDB instance on the default port. The HTTP listener
//! address is fixed and not configurable.

const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DB_NAME: &str = "search_db";
const DEFAULT_COLLECTION_NAME: &str = "search_data";

/// Connection settings for the document store.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (`MONGO_URI`).
    pub mongo_uri: String,
    /// Database name (`MONGO_DB`).
    pub database: String,
    /// Collection holding the searchable documents (`MONGO_COLLECTION`).
    pub collection: String,
}

impl Config {
    /// Reads settings from the environment, falling back to the local
    /// defaults for any variable that is unset. A `.env` file in the
    /// working directory is honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mongo_uri: std::env::var("MONGO_URI")
                .unwrap_or_else(|_| DEFAULT_MONGO_URI.to_string()),
            database: std::env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
            collection: std::env::var("MONGO_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_COLLECTION_NAME.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
            database: DEFAULT_DB_NAME.to_string(),
            collection: DEFAULT_COLLECTION_NAME.to_string(),
        }
    }
}
