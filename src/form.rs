use log::warn;

use crate::model::{ImageUpload, RecipeFields};

/// Raw values read from the page form, before any normalization.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub id: String,
    pub name: String,
    pub image: Option<ImageUpload>,
    pub ingredients: String,
    pub instructions: String,
    pub location: String,
}

/// A submittable mutation assembled from form input.
#[derive(Debug, Clone)]
pub struct FormPayload {
    pub id: Option<u64>,
    pub fields: RecipeFields,
    pub image: Option<ImageUpload>,
}

impl FormInput {
    /// Assemble a payload from the form fields.
    ///
    /// Text fields are trimmed and the ingredient list is normalized (split
    /// on commas, items trimmed, rejoined). With `allow_partial` every empty
    /// field is dropped from the payload; otherwise all fields are carried
    /// verbatim, empty or not. Returns `None` when nothing besides the id
    /// would be submitted.
    pub fn collect(&self, allow_partial: bool) -> Option<FormPayload> {
        let id = self.id.trim().parse().ok();

        let include = |value: &str| -> Option<String> {
            let value = value.trim();
            if value.is_empty() && allow_partial {
                None
            } else {
                Some(value.to_string())
            }
        };

        let fields = RecipeFields {
            name: include(&self.name),
            ingredients: include(&self.ingredients).map(|raw| normalize_ingredients(&raw)),
            instructions: include(&self.instructions),
            location: include(&self.location),
        };

        if fields.is_empty() && self.image.is_none() {
            warn!("form has no submittable data");
            return None;
        }

        Some(FormPayload {
            id,
            fields,
            image: self.image.clone(),
        })
    }
}

/// Split on commas, trim each item, rejoin comma-separated.
fn normalize_ingredients(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(",")
}
