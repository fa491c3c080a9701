//! Domain layer.
//!
//! Pure types for the order lifecycle: the status enum, the transition
//! table, the error taxonomy, and the read models the query side returns.

pub mod errors;
pub mod models;
pub mod state_machine;
pub mod status;
