//! Domain layer for the admissions administration client.
//!
//! Holds the entity models shared by the gateway and the management
//! console, the validation rules applied before any payload leaves the
//! client, and the pure list-view / form state machines (search, sort,
//! pagination, cascading selects, repeatable rows). No I/O happens here.

pub mod form;
pub mod lookups;
pub mod models;
pub mod table;
pub mod types;
pub mod validation;

pub use types::DbId;
