use serde::{Deserialize, Serialize};

/// A recipe record as served by the API.
///
/// The client treats this as an opaque read model: `id` is server-assigned
/// and is the only field used for identity. `image` is a path relative to
/// the API origin. `instructions` may contain literal `\r\n` escape
/// sequences that the view converts to line breaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub location: String,
}

/// Mutation payload with optional fields.
///
/// `Some` means "include this field in the request body". Full updates send
/// absent fields as empty strings; partial updates skip them entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFields {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub location: Option<String>,
}

impl RecipeFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// True when no field is set at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
            && self.location.is_none()
    }
}

/// An image file to attach to a multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Success body returned by the delete endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}
