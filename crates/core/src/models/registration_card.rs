//! Registration card (admission request) entity and payload DTO.
//!
//! A registration card is a student's admission request, distinct from
//! the longer-term registration form used after acceptance. Submission
//! goes over multipart form encoding because it may carry up to three
//! degree-image attachments.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// Review status of an admission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A submitted admission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCard {
    pub id: DbId,
    pub national_id: String,
    pub student_name: String,
    pub request_type: String,
    pub degree_id: DbId,
    pub department_id: DbId,
    #[serde(default)]
    pub msar_id: Option<DbId>,
    pub semester_id: DbId,
    pub language_id: DbId,
    pub status: CardStatus,
}

impl crate::table::TableRow for RegistrationCard {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.student_name.clone(),
            self.national_id.clone(),
            self.request_type.clone(),
        ]
    }

    fn sort_key(&self, column: &str) -> Option<crate::table::SortValue> {
        match column {
            "id" => Some(crate::table::SortValue::Int(self.id)),
            "name" => Some(crate::table::SortValue::Text(self.student_name.clone())),
            _ => None,
        }
    }
}

/// An image attachment accompanying a card submission.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub field_name: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Payload for submitting a new admission request. Attachments ride
/// alongside as multipart file parts, not in the JSON-ish field set.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationCard {
    #[validate(regex(
        path = *crate::validation::NATIONAL_ID_RE,
        message = "الرقم القومي يجب أن يتكون من 14 رقماً"
    ))]
    pub national_id: String,
    #[validate(length(min = 2, message = "اسم الطالب مطلوب"))]
    pub student_name: String,
    #[validate(length(min = 1, message = "نوع الطلب مطلوب"))]
    pub request_type: String,
    #[validate(required(message = "يجب اختيار الدرجة العلمية"))]
    pub degree_id: Option<DbId>,
    #[validate(required(message = "يجب اختيار القسم"))]
    pub department_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msar_id: Option<DbId>,
    #[validate(required(message = "يجب اختيار الفصل الدراسي"))]
    pub semester_id: Option<DbId>,
    #[validate(required(message = "يجب اختيار اللغة"))]
    pub language_id: Option<DbId>,
}
