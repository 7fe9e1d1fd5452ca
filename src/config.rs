use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Origin of the recipe API; the resource path is fixed relative to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// View configuration
    #[serde(default)]
    pub view: ViewConfig,
}

/// Configuration for the card view
#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    /// Element id of the container the cards render into
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Whether cards show the recipe location
    #[serde(default = "default_true")]
    pub show_location: bool,
    /// Whether cards carry delete/edit buttons
    #[serde(default = "default_true")]
    pub show_actions: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            show_location: true,
            show_actions: true,
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://adriano02.pythonanywhere.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_container_id() -> String {
    "recipe-container".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            view: ViewConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__BASE_URL, RECIPES__VIEW__SHOW_ACTIONS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Environment variables with RECIPES prefix
            // Use double underscore for nested: RECIPES__VIEW__SHOW_ACTIONS
            .add_source(
                Environment::with_prefix("RECIPES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
