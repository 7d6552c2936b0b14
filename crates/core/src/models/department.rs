//! Department entity and payload DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// An academic department, owned by a program.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub program_id: DbId,
    /// Resolved server-side from `program_id`; absent on some endpoints.
    #[serde(default)]
    pub program_name: Option<String>,
}

impl crate::table::TableRow for Department {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.program_name.clone().unwrap_or_default(),
        ]
    }

    fn sort_key(&self, column: &str) -> Option<crate::table::SortValue> {
        match column {
            "id" => Some(crate::table::SortValue::Int(self.id)),
            "name" => Some(crate::table::SortValue::Text(self.name.clone())),
            _ => None,
        }
    }
}

/// Payload for creating a department.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    #[validate(length(min = 2, message = "اسم القسم مطلوب"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(required(message = "يجب اختيار البرنامج"))]
    pub program_id: Option<DbId>,
}

/// Payload for updating a department.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartment {
    pub id: DbId,
    #[validate(length(min = 2, message = "اسم القسم مطلوب"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(required(message = "يجب اختيار البرنامج"))]
    pub program_id: Option<DbId>,
}
