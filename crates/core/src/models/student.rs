//! Student entity and payload DTO.
//!
//! Students are keyed by national id (the business key), not a numeric
//! surrogate id.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// A prior qualification held by a student.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
    #[validate(required(message = "يجب اختيار نوع المؤهل"))]
    pub qualification_type_id: Option<DbId>,
    #[validate(length(min = 2, message = "جهة الحصول على المؤهل مطلوبة"))]
    pub institution: String,
    #[validate(required(message = "يجب اختيار التقدير"))]
    pub grade_id: Option<DbId>,
    pub date_obtained: Option<chrono::NaiveDate>,
}

/// An enrolled (or admitted) student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub university_id: Option<DbId>,
    #[serde(default)]
    pub college_id: Option<DbId>,
    #[serde(default)]
    pub department_id: Option<DbId>,
    #[serde(default)]
    pub program_id: Option<DbId>,
    #[serde(default)]
    pub degree_id: Option<DbId>,
    #[serde(default)]
    pub msar_id: Option<DbId>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
}

/// Payload for registering a student.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[validate(regex(
        path = *crate::validation::NATIONAL_ID_RE,
        message = "الرقم القومي يجب أن يتكون من 14 رقماً"
    ))]
    pub national_id: String,
    #[validate(length(min = 2, message = "الاسم الأول مطلوب"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "اسم العائلة مطلوب"))]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *crate::validation::PHONE_RE, message = "رقم الهاتف غير صالح"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "البريد الإلكتروني غير صالح"))]
    pub email: Option<String>,
    #[validate(required(message = "يجب اختيار الجامعة"))]
    pub university_id: Option<DbId>,
    #[validate(required(message = "يجب اختيار الكلية"))]
    pub college_id: Option<DbId>,
    #[validate(required(message = "يجب اختيار القسم"))]
    pub department_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<DbId>,
    #[validate(required(message = "يجب اختيار الدرجة العلمية"))]
    pub degree_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msar_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 4.0, message = "المعدل التراكمي يجب أن يكون بين 0 و 4"))]
    pub gpa: Option<f64>,
    #[validate(nested)]
    pub qualifications: Vec<Qualification>,
}
