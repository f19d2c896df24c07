use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Gauge, Histogram, register_counter, register_counter_vec,
    register_gauge, register_histogram,
};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("contact_requests_total", "Total contact submissions received").unwrap();
    pub static ref RATE_LIMITED: Counter =
        register_counter!("contact_rate_limited_total", "Submissions denied by the rate limiter").unwrap();
    pub static ref REJECTED: CounterVec = register_counter_vec!(
        "contact_rejected_total",
        "Submissions rejected after admission",
        &["reason"]
    )
    .unwrap();
    pub static ref ACCEPTED: Counter =
        register_counter!("contact_accepted_total", "Submissions accepted").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "contact_request_latency_seconds",
        "Contact submission latency in seconds"
    )
    .unwrap();
    pub static ref TRACKED_CLIENTS: Gauge =
        register_gauge!("rate_limiter_tracked_clients", "Clients currently held by the rate limiter").unwrap();
}
