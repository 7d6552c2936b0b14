//! Track (msar) entity and payload DTO.
//!
//! A track is a specialization path under a given degree + department
//! combination; the department is derived from the degree server-side.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// Nested degree summary returned on track records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeSummary {
    pub id: DbId,
    pub name: String,
}

/// A specialization track under a degree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: DbId,
    pub name: String,
    pub degree_id: DbId,
    #[serde(default)]
    pub department_id: Option<DbId>,
    #[serde(default)]
    pub degree: Option<DegreeSummary>,
}

/// Payload for creating a track.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    #[validate(length(min = 2, message = "اسم المسار مطلوب"))]
    pub name: String,
    #[validate(required(message = "يجب اختيار الدرجة العلمية"))]
    pub degree_id: Option<DbId>,
}
