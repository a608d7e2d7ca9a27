//! Service layer for chart recomputation.
//!
//! Services read the shared [`Dataset`](crate::models::Dataset) and produce
//! fresh [`Figure`](crate::charts::Figure)s. None of them keep state between
//! calls.

pub mod callbacks;
pub mod pie_chart;
pub mod scatter_chart;

pub use callbacks::{CallbackError, CallbackRegistry, CallbackSpec, InputValues};
pub use pie_chart::compute_pie_chart;
pub use scatter_chart::compute_scatter_chart;
