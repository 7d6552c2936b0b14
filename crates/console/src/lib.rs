//! Management console layer.
//!
//! One [`container::Management`] per entity family owns the client-side
//! copy of the collection and coordinates list state, the add/edit form,
//! the delete confirmation dialog, toast messages, and in-flight request
//! generations. The containers are UI-agnostic; the `qabul-admin` binary
//! drives them from the command line.

pub mod container;
pub mod dialog;
pub mod lookups;
pub mod ops;
pub mod toast;
