mod contact;
mod health;
mod metrics;

pub use contact::{MAX_BODY_BYTES, contact_info, submit_contact};
pub use health::health_handler;
pub use metrics::metrics_handler;
