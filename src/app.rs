use log::debug;

use crate::client::RecipeClient;
use crate::error::ApiError;
use crate::form::FormPayload;
use crate::model::Recipe;
use crate::render::RecipeView;

/// Drives the fetch-render cycle: every successful mutation re-fetches the
/// whole list and rebuilds the container markup.
///
/// The rendered HTML string is the only client-side state. A failed mutation
/// leaves it untouched; a failed list fetch replaces it with an error
/// placeholder so a stale card list is never shown as current.
pub struct RecipeApp {
    client: RecipeClient,
    view: RecipeView,
    html: String,
}

impl RecipeApp {
    pub fn new(client: RecipeClient, view: RecipeView) -> Self {
        Self {
            client,
            view,
            html: String::new(),
        }
    }

    /// Current container markup, as of the last render.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Fetch the full list and rebuild the container from it.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        match self.client.list_all().await {
            Ok(recipes) => {
                debug!("rendering {} recipes", recipes.len());
                self.render(&recipes);
                Ok(())
            }
            Err(err) => {
                self.html = self.view.render_error(&err.to_string()).to_html();
                Err(err)
            }
        }
    }

    /// Search by id and render the single result into the container.
    pub async fn show_by_id(&mut self, id: u64) -> Result<(), ApiError> {
        let recipe = self.client.search_by_id(id).await?;
        self.render(&[recipe]);
        Ok(())
    }

    /// Search by name and render the result set into the container.
    pub async fn show_by_name(&mut self, name: &str) -> Result<(), ApiError> {
        let recipes = self.client.search_by_name(name).await?;
        self.render(&recipes);
        Ok(())
    }

    /// Create a recipe, then refresh the list.
    pub async fn create(&mut self, payload: FormPayload) -> Result<Recipe, ApiError> {
        let created = self.client.create(&payload.fields, payload.image).await?;
        self.refresh().await?;
        Ok(created)
    }

    /// Replace a recipe wholesale, then refresh the list. The payload must
    /// carry an id.
    pub async fn update(&mut self, payload: FormPayload) -> Result<Recipe, ApiError> {
        let id = payload.id.ok_or(ApiError::MissingId)?;
        let updated = self.client.replace(id, &payload.fields, payload.image).await?;
        self.refresh().await?;
        Ok(updated)
    }

    /// Partially update a recipe, then refresh the list.
    pub async fn patch(&mut self, payload: FormPayload) -> Result<Recipe, ApiError> {
        let id = payload.id.ok_or(ApiError::MissingId)?;
        let patched = self.client.patch(id, &payload.fields, payload.image).await?;
        self.refresh().await?;
        Ok(patched)
    }

    /// Delete a recipe, then refresh the list. Returns the server's
    /// confirmation message.
    pub async fn delete(&mut self, id: u64) -> Result<String, ApiError> {
        let confirmation = self.client.remove(id).await?;
        self.refresh().await?;
        Ok(confirmation.message)
    }

    fn render(&mut self, recipes: &[Recipe]) {
        self.html = self.view.render(recipes).to_html();
    }
}
