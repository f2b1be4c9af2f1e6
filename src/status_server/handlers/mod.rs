//! Status server HTTP handlers.

mod metrics;
mod state;

pub use metrics::metrics_handler;
pub use state::state_handler;
