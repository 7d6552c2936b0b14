//! Instructor entity and payload DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// A teaching staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: DbId,
    pub name: String,
    pub national_id: String,
    pub academic_title_id: DbId,
    pub department_id: DbId,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl crate::table::TableRow for Instructor {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.national_id.clone(),
            self.email.clone().unwrap_or_default(),
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

/// Payload for creating an instructor.
///
/// The national-id uniqueness check against the loaded list is advisory
/// UX only; the server enforces the real invariant.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstructor {
    #[validate(length(min = 2, message = "اسم المحاضر مطلوب"))]
    pub name: String,
    #[validate(regex(
        path = *crate::validation::NATIONAL_ID_RE,
        message = "الرقم القومي يجب أن يتكون من 14 رقماً"
    ))]
    pub national_id: String,
    #[validate(required(message = "يجب اختيار الدرجة الأكاديمية"))]
    pub academic_title_id: Option<DbId>,
    #[validate(required(message = "يجب اختيار القسم"))]
    pub department_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *crate::validation::PHONE_RE, message = "رقم الهاتف غير صالح"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "البريد الإلكتروني غير صالح"))]
    pub email: Option<String>,
}

/// Payload for updating an instructor.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstructor {
    pub id: DbId,
    #[validate(length(min = 2, message = "اسم المحاضر مطلوب"))]
    pub name: String,
    #[validate(regex(
        path = *crate::validation::NATIONAL_ID_RE,
        message = "الرقم القومي يجب أن يتكون من 14 رقماً"
    ))]
    pub national_id: String,
    #[validate(required(message = "يجب اختيار الدرجة الأكاديمية"))]
    pub academic_title_id: Option<DbId>,
    #[validate(required(message = "يجب اختيار القسم"))]
    pub department_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *crate::validation::PHONE_RE, message = "رقم الهاتف غير صالح"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "البريد الإلكتروني غير صالح"))]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn payload() -> CreateInstructor {
        CreateInstructor {
            name: "أحمد علي".into(),
            national_id: "12345678901234".into(),
            academic_title_id: Some(1),
            department_id: Some(2),
            phone: Some("+201001234567".into()),
            email: Some("a.ali@example.edu".into()),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn national_id_length_boundaries() {
        let mut p = payload();
        p.national_id = "1234567890123".into(); // 13 digits
        assert!(p.validate().is_err());
        p.national_id = "123456789012345".into(); // 15 digits
        assert!(p.validate().is_err());
        p.national_id = "12345678901234".into();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn bad_email_rejected() {
        let mut p = payload();
        p.email = Some("not-an-email".into());
        assert!(p.validate().is_err());
    }
}
