use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::{Duration, Instant};

// Rate limit entry - tracks requests per IP/key
pub struct RateLimitEntry {
    pub count: u32,
    pub window_start: Instant,
}

impl RateLimitEntry {
    fn start(now: Instant) -> Self {
        Self {
            count: 1,
            window_start: now,
        }
    }

    // window is over only once strictly more than `window` has passed
    fn expired(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.window_start) > window
    }
}

// Per-client fixed window counter. A window starts with the client's first
// request and resets lazily on the first request after it expires. Check and
// update run under the DashMap entry lock.
pub struct RateLimiter {
    entries: DashMap<String, RateLimitEntry>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            max_requests,
            window,
        }
    }

    pub fn check_and_record(&self, identifier: &str) -> bool {
        self.check_and_record_at(identifier, Instant::now())
    }

    // same check against a caller supplied clock
    pub fn check_and_record_at(&self, identifier: &str, now: Instant) -> bool {
        match self.entries.entry(identifier.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(RateLimitEntry::start(now));
                true
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();

                //window expired..? Reset it
                if entry.expired(now, self.window) {
                    *entry = RateLimitEntry::start(now);
                    return true;
                }

                //over limit
                if entry.count >= self.max_requests {
                    return false;
                }

                entry.count += 1;
                true
            }
        }
    }

    // returns how many entries were dropped
    pub fn sweep_expired(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = !entry.expired(now, self.window);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    pub fn tracked_clients(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn count(&self, identifier: &str) -> Option<u32> {
        self.entries.get(identifier).map(|entry| entry.count)
    }
}
