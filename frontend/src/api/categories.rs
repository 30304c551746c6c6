use crate::{
    error::ApiError,
    models::{Category, Envelope},
};

use super::{bearer, decode, read, ApiClient};

/// `GET /categories` for the select input and the table labels.
pub async fn get_categories(client: &ApiClient, token: &str) -> Result<Vec<Category>, ApiError> {
    let response = bearer(client.get("/categories"), token).send().await?;
    let (status, body) = read(response).await?;

    let envelope: Envelope<Vec<Category>> = decode(status, &body, "Could not load categories")?;
    Ok(envelope.data)
}

/// Label shown for an expense: the category's name, else the legacy free-text value.
pub fn category_label(categories: &[Category], category_id: Option<i64>, legacy: Option<&str>) -> String {
    category_id
        .and_then(|id| categories.iter().find(|category| category.id == id))
        .map(|category| category.name.clone())
        .or_else(|| legacy.filter(|name| !name.is_empty()).map(str::to_string))
        .unwrap_or_else(|| "Uncategorized".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                name: "Food".to_string(),
            },
            Category {
                id: 2,
                name: "Transport".to_string(),
            },
        ]
    }

    #[test]
    fn resolves_category_id() {
        assert_eq!(category_label(&categories(), Some(2), None), "Transport");
    }

    #[test]
    fn falls_back_to_legacy_text() {
        assert_eq!(category_label(&categories(), Some(99), Some("Fuel")), "Fuel");
        assert_eq!(category_label(&categories(), None, Some("Fuel")), "Fuel");
    }

    #[test]
    fn unknown_everything_is_uncategorized() {
        assert_eq!(category_label(&[], None, Some("")), "Uncategorized");
    }
}
