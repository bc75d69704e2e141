//! Categories - read-only groupings that questions reference

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category primary key
pub type CategoryId = i32;

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: CategoryId,
    /// Display name, stored and serialized as `type`
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// `id -> type` mapping as returned by the category endpoints.
///
/// Serializes as a JSON object; integer keys become strings
/// (`{"1": "Science"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<CategoryId, String>);

impl CategoryMap {
    pub fn get(&self, id: CategoryId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Category> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().map(|c| (c.id, c.kind)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_kind_as_type() {
        let c = Category {
            id: 1,
            kind: "Science".into(),
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn map_uses_string_keys() {
        let map: CategoryMap = vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(2), Some("Art"));
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"1":"Science","2":"Art"}"#
        );
    }
}
