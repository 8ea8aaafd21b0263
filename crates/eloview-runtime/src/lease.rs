use crate::{Error, Result};
use std::time::{Duration, Instant};

/// Task lease granted by the job queue. Work stops once it has expired.
pub trait Lease {
    fn expired(&self) -> bool;

    /// Fail with `LeaseExpired` if the lease ran out by the end of `phase`.
    fn check(&self, phase: &'static str) -> Result<()> {
        if self.expired() {
            tracing::warn!(phase, "lease expired");
            return Err(Error::LeaseExpired { phase });
        }
        Ok(())
    }
}

/// Lease that ends at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }
}

impl Lease for Deadline {
    fn expired(&self) -> bool {
        Instant::now() >= self.at
    }
}

/// Lease that never expires (local runs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeadline;

impl Lease for NoDeadline {
    fn expired(&self) -> bool {
        false
    }
}
