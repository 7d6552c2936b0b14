//! University and college entities. Both are plain `{id, name}` records.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A university known to the portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: DbId,
    #[serde(alias = "universityName")]
    pub name: String,
}

impl crate::table::TableRow for University {
    fn search_text(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }

    fn sort_key(&self, column: &str) -> Option<crate::table::SortValue> {
        match column {
            "id" => Some(crate::table::SortValue::Int(self.id)),
            "name" => Some(crate::table::SortValue::Text(self.name.clone())),
            _ => None,
        }
    }
}

/// A college within a university.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub id: DbId,
    #[serde(alias = "collegeName")]
    pub name: String,
}

impl crate::table::TableRow for College {
    fn search_text(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }

    fn sort_key(&self, column: &str) -> Option<crate::table::SortValue> {
        match column {
            "id" => Some(crate::table::SortValue::Int(self.id)),
            "name" => Some(crate::table::SortValue::Text(self.name.clone())),
            _ => None,
        }
    }
}
