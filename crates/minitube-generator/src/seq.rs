use crate::Generator;
use minitube_core::VideoId;
use std::sync::atomic::{AtomicU64, Ordering};

/// A sequential id generator.
///
/// Produces ids like "vid000000", "vid000001", etc. Unique within a single
/// instance only; meant for tests and fixtures where predictable ids help.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    /// Creates a sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a sequential generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = VideoId;

    fn generate(&self) -> VideoId {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        VideoId::new_unchecked(format!("{}{:06}", self.prefix, count))
    }
}
