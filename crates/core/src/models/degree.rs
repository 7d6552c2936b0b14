//! Degree entity and payload DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// Whether a degree is a basic (undergraduate) or advanced (postgraduate)
/// degree. The backend encodes this as the strings `"0"` / `"1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneralDegree {
    #[serde(rename = "0")]
    Basic,
    #[serde(rename = "1")]
    Advanced,
}

/// An academic degree offered by a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub department_id: DbId,
    #[serde(default)]
    pub standard_duration_years: Option<i32>,
    pub general_degree: GeneralDegree,
}

/// Payload for creating a degree.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDegree {
    #[validate(length(min = 2, message = "اسم الدرجة العلمية مطلوب"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(required(message = "يجب اختيار القسم"))]
    pub department_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10, message = "مدة الدراسة يجب أن تكون بين 1 و 10 سنوات"))]
    pub standard_duration_years: Option<i32>,
    pub general_degree: GeneralDegree,
}

/// Payload for updating a degree.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDegree {
    pub id: DbId,
    #[validate(length(min = 2, message = "اسم الدرجة العلمية مطلوب"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(required(message = "يجب اختيار القسم"))]
    pub department_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10, message = "مدة الدراسة يجب أن تكون بين 1 و 10 سنوات"))]
    pub standard_duration_years: Option<i32>,
    pub general_degree: GeneralDegree,
}

impl crate::table::TableRow for Degree {
    fn search_text(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }

    fn sort_key(&self, column: &str) -> Option<crate::table::SortValue> {
        match column {
            "id" => Some(crate::table::SortValue::Int(self.id)),
            "name" => Some(crate::table::SortValue::Text(self.name.clone())),
            "durationYears" => self
                .standard_duration_years
                .map(|y| crate::table::SortValue::Int(y.into())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn payload() -> CreateDegree {
        CreateDegree {
            name: "Master of Science".to_string(),
            description: None,
            department_id: Some(3),
            standard_duration_years: Some(2),
            general_degree: GeneralDegree::Basic,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn missing_department_fails() {
        let mut p = payload();
        p.department_id = None;
        assert!(p.validate().is_err());
    }

    #[test]
    fn duration_out_of_range_fails() {
        let mut p = payload();
        p.standard_duration_years = Some(0);
        assert!(p.validate().is_err());
        p.standard_duration_years = Some(11);
        assert!(p.validate().is_err());
        p.standard_duration_years = None;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn general_degree_serializes_as_flag_string() {
        let json = serde_json::to_value(payload()).unwrap();
        assert_eq!(json["generalDegree"], "0");
    }
}
