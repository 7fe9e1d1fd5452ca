pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod node;
pub mod render;

pub use app::RecipeApp;
pub use client::RecipeClient;
pub use config::{AppConfig, ViewConfig};
pub use error::ApiError;
pub use form::{FormInput, FormPayload};
pub use model::{DeleteConfirmation, ImageUpload, Recipe, RecipeFields};
pub use node::{el, Element, Node};
pub use render::{RecipeView, ViewOptions};

/// Fetch every recipe from the API at `base_url`.
pub async fn fetch_recipes(base_url: &str) -> Result<Vec<Recipe>, ApiError> {
    RecipeClient::new(base_url).list_all().await
}

/// Fetch every recipe and render the card container with default options.
pub async fn fetch_and_render(base_url: &str) -> Result<String, ApiError> {
    let recipes = fetch_recipes(base_url).await?;
    let view = RecipeView::new(base_url, ViewOptions::default());
    Ok(view.render(&recipes).to_html())
}
