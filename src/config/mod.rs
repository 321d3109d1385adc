//! Configuration management module.
//!
//! This module handles loading application configuration from an optional
//! YAML file and the environment, including the API credential, model
//! settings and theme preference. Configuration is never written back.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use crate::gemini::{
    GenerationOptions, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_RECIPE_COUNT, DEFAULT_TEMPERATURE,
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/qingshi-tui";
const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
const MAX_RECIPE_COUNT: usize = 10;

/// Oversees the application configuration.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub recipe_count: usize,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file. Every field is optional.
///
#[derive(Debug, Default, Deserialize)]
struct FileSpec {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    temperature: Option<f64>,
    recipe_count: Option<usize>,
    theme_name: Option<String>,
}

fn default_theme_name() -> String {
    crate::ui::Theme::default().name
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            recipe_count: DEFAULT_RECIPE_COUNT,
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided or
    /// the default directory otherwise, then apply environment overrides. A
    /// missing file is not an error.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(Path::new(FILE_NAME));

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply_file_contents(&contents)?;
            log::debug!("Loaded configuration from {}", file_path.display());
        } else {
            log::debug!(
                "No configuration file at {}, using defaults",
                file_path.display()
            );
        }
        self.file_path = Some(file_path);

        self.apply_env(|name| std::env::var(name).ok());
        Ok(())
    }

    /// Overlay values from YAML file contents onto the current configuration.
    ///
    fn apply_file_contents(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = if contents.trim().is_empty() {
            FileSpec::default()
        } else {
            serde_yaml::from_str(contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?
        };
        if let Some(api_key) = data.api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(api_key);
        }
        if let Some(model) = data.model {
            self.model = model;
        }
        if let Some(base_url) = data.base_url {
            self.base_url = base_url;
        }
        if let Some(temperature) = data.temperature {
            self.temperature = temperature;
        }
        if let Some(recipe_count) = data.recipe_count {
            self.recipe_count = recipe_count;
        }
        if let Some(theme_name) = data.theme_name {
            self.theme_name = theme_name;
        }
        Ok(())
    }

    /// Take the API key from the first non-empty environment variable, which
    /// wins over the file.
    ///
    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(*name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(api_key);
        }
    }

    /// Check value ranges and the presence of the API key.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recipe_count == 0 || self.recipe_count > MAX_RECIPE_COUNT {
            return Err(ConfigError::InvalidValue {
                field: "recipe_count".to_string(),
                message: format!("must be between 1 and {}", MAX_RECIPE_COUNT),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature".to_string(),
                message: "must be between 0.0 and 2.0".to_string(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        self.api_key().map(|_| ())
    }

    /// Return the API key or the error explaining how to provide one.
    ///
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::ApiKeyNotSet(self.file_path_display()))
    }

    /// Return the options for generation requests.
    ///
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            model: self.model.clone(),
            temperature: self.temperature,
            recipe_count: self.recipe_count,
        }
    }

    fn file_path_display(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => format!("~/{}/{}", DEFAULT_DIRECTORY_PATH, FILE_NAME),
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}
