use std::sync::atomic::{AtomicU32, Ordering};

/// Unique table prefixes, `test_{process_id}_{test_counter}_`, so tests that
/// share a database file never see each other's tables.
#[derive(Debug, Clone)]
pub struct TestIsolation {
    process_id: u32,
    test_counter: u32,
}

// Global counter shared across all tests in this process
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

impl TestIsolation {
    pub fn new() -> Self {
        Self {
            process_id: std::process::id(),
            test_counter: TEST_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn table_prefix(&self) -> String {
        format!("test_{}_{}_", self.process_id, self.test_counter)
    }
}

impl Default for TestIsolation {
    fn default() -> Self {
        Self::new()
    }
}
