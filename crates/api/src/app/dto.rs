//! Recipe transport shapes.
//!
//! Pure DTOs: field declarations and JSON mapping only. Recipe CRUD itself
//! lives outside this core; these shapes pin the wire contract that the
//! upload exposer's image URLs feed into.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use recipeshare_core::RecipeId;

/// Recipe detail/listing payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub recipe_id: RecipeId,
    pub title: String,
    pub preparation_time: u32,
    pub portion: u32,
    pub ingredients: String,
    pub description: String,
    /// Owning user's login handle.
    pub username: String,
    pub rating: f32,
    pub date: NaiveDate,
    /// URLs under `/upload/` for this recipe's images.
    pub image_urls: Vec<String>,
}

/// Inbound recipe submission payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub title: String,
    pub preparation_time: u32,
    pub portion: u32,
    pub ingredients: String,
    pub description: String,
    pub files: Vec<FilePayload>,
}

/// Uploaded file payload carried inside a [`RecipeRequest`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePayload {
    pub file_name: String,
    pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_dto_serializes_camel_case() {
        let dto = RecipeDto {
            recipe_id: RecipeId::new(12),
            title: "Pierogi".to_string(),
            preparation_time: 90,
            portion: 4,
            ingredients: "flour, potatoes, cheese".to_string(),
            description: "Classic dumplings".to_string(),
            username: "ann.k".to_string(),
            rating: 4.5,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            image_urls: vec!["/upload/pierogi.jpg".to_string()],
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "recipeId": 12,
                "title": "Pierogi",
                "preparationTime": 90,
                "portion": 4,
                "ingredients": "flour, potatoes, cheese",
                "description": "Classic dumplings",
                "username": "ann.k",
                "rating": 4.5,
                "date": "2024-05-01",
                "imageUrls": ["/upload/pierogi.jpg"],
            })
        );
    }

    #[test]
    fn recipe_request_deserializes_with_file_payloads() {
        let request: RecipeRequest = serde_json::from_value(serde_json::json!({
            "title": "Bigos",
            "preparationTime": 120,
            "portion": 6,
            "ingredients": "cabbage, sausage",
            "description": "Hunter's stew",
            "files": [{ "fileName": "bigos.jpg", "data": [255, 216, 255] }],
        }))
        .unwrap();

        assert_eq!(request.title, "Bigos");
        assert_eq!(request.files.len(), 1);
        assert_eq!(request.files[0].file_name, "bigos.jpg");
        assert_eq!(request.files[0].data, vec![255, 216, 255]);
    }
}
