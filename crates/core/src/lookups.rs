//! Lookup reference lists used to populate dependent selects.
//!
//! A lookup is a small `{id, name}` list fetched from the backend's
//! `/Lookups/<name>` endpoints; it is read-only from the consuming form.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// One option of a lookup list.
///
/// The backend is inconsistent about field casing across lookup endpoints,
/// hence the aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    #[serde(alias = "Id")]
    pub id: DbId,
    #[serde(alias = "Name", alias = "name")]
    pub name: String,
}

/// Every lookup list the portal's forms depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Universities,
    Colleges,
    Departments,
    Degrees,
    Majors,
    Grades,
    Msarat,
    Semesters,
    Languages,
    Programs,
    Intakes,
    Statuses,
    Nationalities,
    MilitaryServices,
    Qualifications,
}

impl LookupKind {
    /// Path segment under `/Lookups/` for this list.
    pub fn path(self) -> &'static str {
        match self {
            LookupKind::Universities => "universities",
            LookupKind::Colleges => "colleges",
            LookupKind::Departments => "departments",
            LookupKind::Degrees => "degrees",
            LookupKind::Majors => "majors",
            LookupKind::Grades => "grades",
            LookupKind::Msarat => "masars",
            LookupKind::Semesters => "semesters",
            LookupKind::Languages => "languages",
            LookupKind::Programs => "Programs",
            LookupKind::Intakes => "Intakes",
            LookupKind::Statuses => "statuses",
            LookupKind::Nationalities => "nationalities",
            LookupKind::MilitaryServices => "militaryServices",
            LookupKind::Qualifications => "Qualifications",
        }
    }

    /// Arabic label used in user-facing lookup failure messages.
    pub fn label(self) -> &'static str {
        match self {
            LookupKind::Universities => "الجامعات",
            LookupKind::Colleges => "الكليات",
            LookupKind::Departments => "الأقسام",
            LookupKind::Degrees => "الدرجات العلمية",
            LookupKind::Majors => "التخصصات",
            LookupKind::Grades => "التقديرات",
            LookupKind::Msarat => "المسارات",
            LookupKind::Semesters => "الفصول الدراسية",
            LookupKind::Languages => "اللغات",
            LookupKind::Programs => "البرامج",
            LookupKind::Intakes => "الدفعات",
            LookupKind::Statuses => "الحالات",
            LookupKind::Nationalities => "الجنسيات",
            LookupKind::MilitaryServices => "الخدمة العسكرية",
            LookupKind::Qualifications => "المؤهلات",
        }
    }
}
