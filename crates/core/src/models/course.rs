//! Course entity and payload DTO.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// A course within a department / degree / track.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub credit_hours: i32,
    pub is_optional: bool,
    pub semester: i32,
    pub department_id: DbId,
    pub degree_id: DbId,
    #[serde(default)]
    pub msar_id: Option<DbId>,
    /// Codes of prerequisite courses.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Ids of assigned instructors.
    #[serde(default)]
    pub instructors: Vec<DbId>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for creating or updating a course. The backend accepts the
/// same shape for both, with `id` present only on update.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[validate(custom(function = crate::validation::non_blank))]
    pub code: String,
    #[validate(length(min = 2, message = "اسم المقرر مطلوب"))]
    pub name: String,
    #[validate(range(min = 0, message = "عدد الساعات المعتمدة يجب ألا يكون سالباً"))]
    pub credit_hours: i32,
    pub is_optional: bool,
    #[validate(required(message = "يجب اختيار الفصل الدراسي"))]
    pub semester: Option<i32>,
    #[validate(required(message = "يجب اختيار القسم"))]
    pub department_id: Option<DbId>,
    #[validate(required(message = "يجب اختيار الدرجة العلمية"))]
    pub degree_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msar_id: Option<DbId>,
    #[validate(custom(function = crate::validation::non_blank_all))]
    pub prerequisites: Vec<String>,
    pub instructors: Vec<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn payload() -> CreateCourse {
        CreateCourse {
            id: None,
            code: "CS101".into(),
            name: "Programming I".into(),
            credit_hours: 3,
            is_optional: false,
            semester: Some(1),
            department_id: Some(2),
            degree_id: Some(5),
            msar_id: None,
            prerequisites: vec![],
            instructors: vec![7],
            description: None,
        }
    }

    #[test]
    fn credit_hours_accepts_zero_and_positive() {
        let mut p = payload();
        p.credit_hours = 0;
        assert!(p.validate().is_ok());
        p.credit_hours = 4;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn credit_hours_rejects_negative() {
        let mut p = payload();
        p.credit_hours = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn blank_code_rejected() {
        let mut p = payload();
        p.code = "   ".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn blank_prerequisite_code_rejected() {
        let mut p = payload();
        p.prerequisites = vec!["   ".into(), "".into()];
        assert!(p.validate().is_err());

        p.prerequisites = vec!["MATH100".into()];
        assert!(p.validate().is_ok());
    }
}
