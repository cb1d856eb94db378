use crate::error::{RegistryError, Result};

/// Connection settings for the registry database.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Reads `DATABASE_URL` from the environment, picking up a `.env` file
    /// from the working directory if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| RegistryError::Config(String::from("DATABASE_URL is not set")))?;

        Ok(Config { database_url })
    }
}
