use std::time::Duration;

use log::{debug, error};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::model::{DeleteConfirmation, ImageUpload, Recipe, RecipeFields};

/// Collection path, fixed relative to the API origin.
const RESOURCE_PATH: &str = "/api/recipes";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the recipe API.
///
/// Each method is one request; re-fetching the list after a mutation is the
/// caller's responsibility.
pub struct RecipeClient {
    client: Client,
    base_url: String,
}

impl RecipeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("recipe-cards/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout))
    }

    /// Origin the client talks to; image paths resolve against it too.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), RESOURCE_PATH)
    }

    /// Fetch every recipe in the collection.
    pub async fn list_all(&self) -> Result<Vec<Recipe>, ApiError> {
        let url = self.collection_url();
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            error!("list request rejected: {}", response.status());
            return Err(ApiError::Rejected {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch one recipe by id. Any unsuccessful response is reported as
    /// `NotFound`; the API does not distinguish further for searches.
    pub async fn search_by_id(&self, id: u64) -> Result<Recipe, ApiError> {
        let url = format!("{}/search/{}", self.collection_url(), id);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::NotFound);
        }
        Ok(response.json().await?)
    }

    /// Fetch recipes whose name matches the keyword.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Recipe>, ApiError> {
        let url = format!("{}/search/{}", self.collection_url(), name);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::NotFound);
        }
        Ok(response.json().await?)
    }

    /// Create a recipe. Every field is sent, empty when unset; the image
    /// part is attached when given.
    pub async fn create(
        &self,
        fields: &RecipeFields,
        image: Option<ImageUpload>,
    ) -> Result<Recipe, ApiError> {
        let url = self.collection_url();
        debug!("POST {}", url);
        let form = multipart_form(fields, image, true);
        let response = self.client.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            error!("create rejected: {}", response.status());
            return Err(ApiError::Rejected {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Replace a recipe wholesale. Same body rules as [`create`](Self::create).
    pub async fn replace(
        &self,
        id: u64,
        fields: &RecipeFields,
        image: Option<ImageUpload>,
    ) -> Result<Recipe, ApiError> {
        let url = format!("{}/{}", self.collection_url(), id);
        debug!("PUT {}", url);
        let form = multipart_form(fields, image, true);
        let response = self.client.put(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            error!("replace rejected: {}", response.status());
            return Err(ApiError::Rejected {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Partially update a recipe, sending only the fields that are set.
    /// Fails with `NoData` before any request goes out when there is
    /// nothing to send.
    pub async fn patch(
        &self,
        id: u64,
        fields: &RecipeFields,
        image: Option<ImageUpload>,
    ) -> Result<Recipe, ApiError> {
        if fields.is_empty() && image.is_none() {
            return Err(ApiError::NoData);
        }

        let url = format!("{}/{}", self.collection_url(), id);
        debug!("PATCH {}", url);
        let form = multipart_form(fields, image, false);
        let response = self.client.patch(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            error!("patch rejected: {}", response.status());
            return Err(ApiError::Rejected {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Delete a recipe by id, returning the server's confirmation message.
    pub async fn remove(&self, id: u64) -> Result<DeleteConfirmation, ApiError> {
        let url = format!("{}/{}", self.collection_url(), id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            error!("delete rejected: {}", response.status());
            return Err(ApiError::Rejected {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }
}

/// Assemble the multipart body. With `include_empty`, unset fields are sent
/// as empty strings (full update); otherwise they are skipped (partial).
fn multipart_form(fields: &RecipeFields, image: Option<ImageUpload>, include_empty: bool) -> Form {
    let mut form = Form::new();
    let pairs = [
        ("name", &fields.name),
        ("ingredients", &fields.ingredients),
        ("instructions", &fields.instructions),
        ("location", &fields.location),
    ];

    for (key, value) in pairs {
        match value {
            Some(value) => form = form.text(key, value.clone()),
            None if include_empty => form = form.text(key, String::new()),
            None => {}
        }
    }

    if let Some(image) = image {
        form = form.part("image", Part::bytes(image.bytes).file_name(image.file_name));
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn soup_json() -> &'static str {
        r#"{
            "id": 1,
            "name": "Soup",
            "image": "img/s.png",
            "ingredients": ["water", "salt"],
            "instructions": "Boil\\r\\nServe",
            "location": "Kitchen"
        }"#
    }

    #[tokio::test]
    async fn test_list_all() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/recipes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!("[{}]", soup_json()))
            .create_async()
            .await;

        let client = RecipeClient::new(server.url());
        let recipes = client.list_all().await.unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Soup");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_all_rejected() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/recipes")
            .with_status(500)
            .with_body(r#"{"message": "boom"}"#)
            .create_async()
            .await;

        let client = RecipeClient::new(server.url());
        let result = client.list_all().await;

        assert!(matches!(
            result,
            Err(ApiError::Rejected { status }) if status.as_u16() == 500
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_by_id_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/recipes/search/99")
            .with_status(404)
            .with_body(r#"{"message": "Resep tidak ditemukan"}"#)
            .create_async()
            .await;

        let client = RecipeClient::new(server.url());
        let result = client.search_by_id(99).await;

        assert!(matches!(result, Err(ApiError::NotFound)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_by_name() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/recipes/search/Soup")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!("[{}]", soup_json()))
            .create_async()
            .await;

        let client = RecipeClient::new(server.url());
        let recipes = client.search_by_name("Soup").await.unwrap();

        assert_eq!(recipes.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_sends_all_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/recipes")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="name""#.to_string()),
                Matcher::Regex(r#"name="ingredients""#.to_string()),
                Matcher::Regex(r#"name="instructions""#.to_string()),
                Matcher::Regex(r#"name="location""#.to_string()),
            ]))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(soup_json())
            .create_async()
            .await;

        let client = RecipeClient::new(server.url());
        // location deliberately unset: a full update still sends it, empty
        let fields = RecipeFields::new()
            .name("Soup")
            .ingredients("water,salt")
            .instructions("Boil");
        let created = client.create(&fields, None).await.unwrap();

        assert_eq!(created.id, 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_patch_sends_only_set_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/recipes/1")
            .match_body(Matcher::Regex(
                r#"name="location"\r\n\r\nPantry"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(soup_json())
            .create_async()
            .await;

        let client = RecipeClient::new(server.url());
        let fields = RecipeFields::new().location("Pantry");
        client.patch(1, &fields, None).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_patch_without_data_fails_locally() {
        // No mock server at all: the error must surface before any request
        let client = RecipeClient::new("http://127.0.0.1:1");
        let result = client.patch(1, &RecipeFields::new(), None).await;

        assert!(matches!(result, Err(ApiError::NoData)));
    }

    #[tokio::test]
    async fn test_patch_with_image_only() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/recipes/1")
            .match_body(Matcher::Regex(r#"name="image""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(soup_json())
            .create_async()
            .await;

        let client = RecipeClient::new(server.url());
        let image = ImageUpload::new("s.png", b"fake image bytes".to_vec());
        client.patch(1, &RecipeFields::new(), Some(image)).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_remove() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/recipes/7")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Resep berhasil dihapus"}"#)
            .create_async()
            .await;

        let client = RecipeClient::new(server.url());
        let confirmation = client.remove(7).await.unwrap();

        assert_eq!(confirmation.message, "Resep berhasil dihapus");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_transport_error() {
        // Nothing listens here
        let client = RecipeClient::new("http://127.0.0.1:1");
        let result = client.list_all().await;

        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
