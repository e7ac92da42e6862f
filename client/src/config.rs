use once_cell::sync::Lazy;
use serde::Deserialize;

/// The static config instance.
pub static INSTANCE: Lazy<Config> = Lazy::new(|| {
    #[cfg(not(test))]
    {
        use std::{fs::File, io::Read};

        return toml::from_str(&{
            let mut string = String::new();
            File::open("./data/config.toml")
                .unwrap()
                .read_to_string(&mut string)
                .unwrap();
            string
        })
        .unwrap();
    }

    #[cfg(test)]
    Config::default()
});

/// Describing the client configuration.
#[derive(Deserialize, Default)]
pub struct Config {
    pub api: Api,
}

/// Describing the remote journal API.
#[derive(Deserialize, Clone)]
pub struct Api {
    /// Base url of the REST collaborator, up to and including the
    /// `/api` prefix.
    pub base_url: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001/api".to_string(),
        }
    }
}
