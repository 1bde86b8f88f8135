//! Per-caller token-bucket rate limiting.
//!
//! Each caller key owns a bucket of `capacity` tokens refilled continuously
//! over `window`; a request consumes one token. Refill is computed in whole
//! tokens and capped at capacity.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct TokenBucket {
    tokens: u32,
    last_refill: Instant,
}

#[derive(Debug)]
pub struct RateLimiter {
    capacity: u32,
    window: Duration,
    buckets: Mutex<HashMap<String, TokenBucket>>,
}

impl RateLimiter {
    pub fn new(capacity: u32, window: Duration) -> Self {
        Self { capacity, window, buckets: Mutex::new(HashMap::new()) }
    }

    /// Consume one token for `key`. Returns false when the caller is over
    /// its budget. A capacity of 0 disables limiting entirely.
    pub fn try_acquire(&self, key: &str) -> bool {
        if self.capacity == 0 {
            return true;
        }
        let mut buckets = match self.buckets.lock() {
            Ok(guard) => guard,
            // Poisoning only affects bookkeeping; keep serving.
            Err(poisoned) => poisoned.into_inner(),
        };
        let now = Instant::now();
        let bucket = buckets
            .entry(key.to_string())
            .or_insert(TokenBucket { tokens: self.capacity, last_refill: now });

        let elapsed = now.duration_since(bucket.last_refill);
        let refill = (elapsed.as_secs_f64() / self.window.as_secs_f64()
            * self.capacity as f64) as u32;
        if refill > 0 {
            bucket.tokens = (bucket.tokens + refill).min(self.capacity);
            bucket.last_refill = now;
        }

        if bucket.tokens > 0 {
            bucket.tokens -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausts_and_blocks() {
        let limiter = RateLimiter::new(2, Duration::from_secs(3600));
        assert!(limiter.try_acquire("1.2.3.4"));
        assert!(limiter.try_acquire("1.2.3.4"));
        assert!(!limiter.try_acquire("1.2.3.4"));
    }

    #[test]
    fn callers_are_independent() {
        let limiter = RateLimiter::new(1, Duration::from_secs(3600));
        assert!(limiter.try_acquire("a"));
        assert!(!limiter.try_acquire("a"));
        assert!(limiter.try_acquire("b"));
    }

    #[test]
    fn refills_after_the_window() {
        let limiter = RateLimiter::new(1, Duration::from_millis(20));
        assert!(limiter.try_acquire("a"));
        assert!(!limiter.try_acquire("a"));
        std::thread::sleep(Duration::from_millis(40));
        assert!(limiter.try_acquire("a"));
    }

    #[test]
    fn zero_capacity_disables_limiting() {
        let limiter = RateLimiter::new(0, Duration::from_secs(1));
        for _ in 0..10 {
            assert!(limiter.try_acquire("a"));
        }
    }
}
