use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории, назначается сервером.
///
/// Backends disagree on the JSON type of the id, so both `"7"` and `7`
/// decode to the same value. It always serializes back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty category id".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for CategoryId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for CategoryId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(Into::into)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Категория каталога в том виде, в каком её отдаёт `api/v1/categories`.
///
/// The record is identified by `id` only. Some backends send the document
/// key as `_id` (or both); `_id` is read as a fallback so every operation
/// works against the same identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCategory")]
pub struct Category {
    pub id: CategoryId,
    pub name_en: String,
    pub name_ar: String,
    pub image: Option<String>,
    pub is_active: bool,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name_en: &str, name_ar: &str) -> Self {
        Self {
            id: id.into(),
            name_en: name_en.to_string(),
            name_ar: name_ar.to_string(),
            image: None,
            is_active: true,
        }
    }

    /// Name shown in prompts and as the thumbnail alt text
    pub fn display_name(&self) -> &str {
        &self.name_en
    }
}

#[derive(Deserialize)]
struct RawCategory {
    #[serde(default)]
    id: Option<CategoryId>,
    #[serde(default, rename = "_id")]
    legacy_id: Option<CategoryId>,
    #[serde(default)]
    name_en: Option<String>,
    #[serde(default)]
    name_ar: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    is_active: Option<bool>,
}

impl TryFrom<RawCategory> for Category {
    type Error = String;

    fn try_from(raw: RawCategory) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .or(raw.legacy_id)
            .ok_or_else(|| "category without `id`".to_string())?;

        Ok(Self {
            id,
            name_en: raw.name_en.unwrap_or_default(),
            name_ar: raw.name_ar.unwrap_or_default(),
            image: raw.image.filter(|s| !s.is_empty()),
            // поле отсутствует или null: категория активна
            is_active: raw.is_active.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_are_equal() {
        let a: CategoryId = serde_json::from_str("7").unwrap();
        let b: CategoryId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "7");
    }

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "id": "64b1",
            "name_en": "Phones",
            "name_ar": "هواتف",
            "image": "https://cdn.example.com/phones.png",
            "is_active": false
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, CategoryId::new("64b1"));
        assert_eq!(category.name_ar, "هواتف");
        assert_eq!(category.image.as_deref(), Some("https://cdn.example.com/phones.png"));
        assert!(!category.is_active);
    }

    #[test]
    fn test_legacy_id_is_used_as_fallback() {
        let json = r#"{"_id": "abc", "name_en": "Books", "name_ar": "كتب"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id.as_str(), "abc");
        assert!(category.is_active);
        assert_eq!(category.image, None);
    }

    #[test]
    fn test_id_wins_over_legacy_id() {
        let json = r#"{"id": 3, "_id": "mongo-3", "name_en": "Toys", "name_ar": "ألعاب"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id.as_str(), "3");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let json = r#"{"name_en": "Ghost", "name_ar": "شبح"}"#;
        assert!(serde_json::from_str::<Category>(json).is_err());
    }

    #[test]
    fn test_empty_image_becomes_none() {
        let json = r#"{"id": 1, "name_en": "A", "name_ar": "ب", "image": ""}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.image, None);
    }

    #[test]
    fn test_null_fields_do_not_reject_the_page() {
        use crate::shared::pagination::PageEnvelope;

        let json = r#"{
            "data": [
                {"id": 1, "name_en": "Phones", "name_ar": null, "image": null, "is_active": null},
                {"id": 2, "name_en": null, "name_ar": "كتب", "is_active": false}
            ],
            "pagination": {"total": 2, "current_page": 1, "total_pages": 1, "limit": 10}
        }"#;
        let page: PageEnvelope<Category> = serde_json::from_str(json).unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].name_ar, "");
        assert_eq!(page.data[0].image, None);
        assert!(page.data[0].is_active);
        assert_eq!(page.data[1].name_en, "");
        assert_eq!(page.data[1].name_ar, "كتب");
        assert!(!page.data[1].is_active);
    }

    #[test]
    fn test_from_string() {
        assert_eq!(CategoryId::from_string(" 12 ").unwrap().as_str(), "12");
        assert!(CategoryId::from_string("  ").is_err());
    }
}
