use std::env;

use errors::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Origin allowed to call the JSON api cross-site. CORS is off when unset.
    pub client_host: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| Error::InternalServerError("DATABASE_URL must be set".into()))?;

        Ok(Config {
            database_url,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into()),
            client_host: lookup("CLIENT_HOST").filter(|host| !host.is_empty()),
        })
    }
}
