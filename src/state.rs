use crate::config::Args;
use crate::rate_limit::RateLimiter;

// app's shared state
pub struct AppState {
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(rate_limiter: RateLimiter) -> Self {
        Self { rate_limiter }
    }

    pub fn from_args(args: &Args) -> Self {
        Self::new(RateLimiter::new(args.rate_limit, args.rate_window()))
    }
}
