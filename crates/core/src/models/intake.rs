//! Intake (admission cycle) entity and payload DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::DbId;

/// An academic intake: an admission cycle with a start and end date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intake {
    pub id: DbId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Payload for creating an intake. The end date must not precede the
/// start date; equal dates are allowed.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_window))]
pub struct CreateIntake {
    #[validate(length(min = 2, message = "اسم الدفعة مطلوب"))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Payload for updating an intake.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_update_window))]
pub struct UpdateIntake {
    pub id: DbId,
    #[validate(length(min = 2, message = "اسم الدفعة مطلوب"))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl crate::table::TableRow for Intake {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.start_date.to_string(),
            self.end_date.to_string(),
        ]
    }

    fn sort_key(&self, column: &str) -> Option<crate::table::SortValue> {
        match column {
            "id" => Some(crate::table::SortValue::Int(self.id)),
            "name" => Some(crate::table::SortValue::Text(self.name.clone())),
            "startDate" => Some(crate::table::SortValue::Text(self.start_date.to_string())),
            _ => None,
        }
    }
}

fn check_window(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::new("date_window")
            .with_message("تاريخ النهاية يجب ألا يسبق تاريخ البداية".into()));
    }
    Ok(())
}

fn validate_window(intake: &CreateIntake) -> Result<(), ValidationError> {
    check_window(intake.start_date, intake.end_date)
}

fn validate_update_window(intake: &UpdateIntake) -> Result<(), ValidationError> {
    check_window(intake.start_date, intake.end_date)
}
