//! Global statistics counters, reported at the end of a render.
//!
//! Counters are registered lazily the first time their call site runs and are
//! compiled out when the `counter` feature is disabled.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

#[derive(Default)]
pub struct Counter {
    atomic: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }
    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed); // Adding one is associative and commutative
    }
    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<HashMap<&'static str, Arc<Counter>>> = Mutex::new(HashMap::new());
}

pub fn insert_counter(descr: &'static str) -> Arc<Counter> {
    let mut counters = match __COUNTERS.lock() {
        Ok(counters) => counters,
        Err(poisoned) => poisoned.into_inner(),
    };
    counters
        .entry(descr)
        .or_insert_with(|| Arc::new(Counter::new()))
        .clone()
}

/// Current value of every registered counter, sorted by name
pub fn counter_values() -> Vec<(&'static str, u64)> {
    let counters = match __COUNTERS.lock() {
        Ok(counters) => counters,
        Err(poisoned) => poisoned.into_inner(),
    };
    let mut values: Vec<_> = counters
        .iter()
        .map(|(name, counter)| (*name, counter.value()))
        .collect();
    values.sort_unstable();
    values
}

pub fn report_counters() {
    for (counter_name, value) in counter_values() {
        log::log!(target: "counter_report", log::Level::Info, "{}: {}", counter_name, value)
    }
}

#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use $crate::utils::counter::{insert_counter, lazy_static, Counter};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<Counter> = insert_counter($descr);
            }
            COUNTER_REF.inc();
        }
    };
}

// Reexport for ease of use
pub use lazy_static;

#[cfg(all(test, feature = "counter"))]
mod tests {
    use super::counter_values;

    #[test]
    fn counter_registers_and_increments() {
        for _ in 0..3 {
            crate::counter!("Test counter");
        }
        let value = counter_values()
            .into_iter()
            .find(|(name, _)| *name == "Test counter")
            .map(|(_, value)| value);
        assert_eq!(value, Some(3));
    }
}
