//! Wire types for the Quizzer category and auth endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned category identifier.
///
/// The service hands out hex object ids, but numeric ids are accepted too and
/// normalised to their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct CategoryId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for CategoryId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        }
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<i32> for CategoryId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Absent until the backend has stored the category.
    #[serde(
        default,
        alias = "ID",
        alias = "_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<CategoryId>,
    #[serde(alias = "Name")]
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }

    /// Copy of this category with a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: name.into(),
        }
    }

    pub fn has_id(&self, id: &CategoryId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// List responses come either bare or wrapped in `{"categories": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ListBody {
    Bare(Vec<Category>),
    Enveloped { categories: Option<Vec<Category>> },
}

impl ListBody {
    pub(crate) fn into_categories(self) -> Vec<Category> {
        match self {
            ListBody::Enveloped { categories } => categories.unwrap_or_default(),
            ListBody::Bare(categories) => categories,
        }
    }
}

/// Single-item responses come either bare or wrapped in `{"category": {...}}`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ItemBody {
    Bare(Category),
    Enveloped { category: Category },
}

impl ItemBody {
    pub(crate) fn into_category(self) -> Category {
        match self {
            ItemBody::Enveloped { category } => category,
            ItemBody::Bare(category) => category,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "profileURL")]
    pub profile_url: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_text_ids_normalise_to_strings() {
        let numeric: Category = serde_json::from_value(json!({"id": 7, "name": "maths"})).unwrap();
        let text: Category = serde_json::from_value(json!({"id": "7", "name": "maths"})).unwrap();
        assert_eq!(numeric, text);
        assert_eq!(numeric.id.unwrap().as_str(), "7");
    }

    #[test]
    fn go_style_field_names_are_accepted() {
        let category: Category = serde_json::from_value(json!({
            "ID": "5f1d7e",
            "Name": "history",
            "CreatedAt": "2020-07-26T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(category, Category::new("5f1d7e", "history"));
    }

    #[test]
    fn missing_id_is_omitted_on_the_wire() {
        let category = Category {
            id: None,
            name: "draft".to_string(),
        };
        assert_eq!(serde_json::to_value(&category).unwrap(), json!({"name": "draft"}));
    }

    #[test]
    fn list_body_accepts_both_shapes() {
        let bare: ListBody = serde_json::from_value(json!([{"id": 1, "name": "a"}])).unwrap();
        let wrapped: ListBody =
            serde_json::from_value(json!({"categories": [{"id": 1, "name": "a"}]})).unwrap();
        let null: ListBody = serde_json::from_value(json!({"categories": null})).unwrap();
        assert_eq!(bare.into_categories(), wrapped.into_categories());
        assert!(null.into_categories().is_empty());
    }

    #[test]
    fn item_body_accepts_both_shapes() {
        let bare: ItemBody = serde_json::from_value(json!({"id": 5, "name": "x"})).unwrap();
        let wrapped: ItemBody =
            serde_json::from_value(json!({"category": {"id": 5, "name": "x"}})).unwrap();
        assert_eq!(bare.into_category(), Category::new(5, "x"));
        assert_eq!(wrapped.into_category(), Category::new(5, "x"));
    }

    #[test]
    fn register_request_uses_service_field_names() {
        let request = RegisterRequest {
            username: "ada".to_string(),
            password: "secret".to_string(),
            profile_url: String::new(),
            is_admin: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["profileURL"], "");
        assert_eq!(value["isAdmin"], true);
    }
}
