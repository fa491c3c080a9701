//! Order lifecycle operations and read-side queries.
//!
//! [`OrderEngine`] owns every mutation (placement, status updates,
//! cancellation), each wrapped in a single transaction.
//! [`OrderQueryService`] serves the read side.

mod lifecycle;
mod queries;

pub use lifecycle::OrderEngine;
pub use queries::OrderQueryService;
