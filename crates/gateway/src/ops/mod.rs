//! Per-entity gateway operations.
//!
//! One module per entity family, each an `impl Gateway` block mapping
//! programmatic intents onto the backend's endpoint shapes. Endpoint
//! paths follow the backend verbatim, including its inconsistent naming
//! (`/University/names`, `/RegisterationCard/...`).

pub mod cards;
pub mod courses;
pub mod degrees;
pub mod departments;
pub mod instructors;
pub mod intakes;
pub mod lookups;
pub mod students;
pub mod tracks;
pub mod universities;
