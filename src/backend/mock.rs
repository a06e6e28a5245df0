use super::ResultSource;
use crate::fixtures::{DUMMY_ERROR, DUMMY_OK};
use crate::models::ProcessResult;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct MockBackend {
    produce_count: Arc<AtomicUsize>,
    should_fail: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            produce_count: Arc::new(AtomicUsize::new(0)),
            should_fail: false,
        }
    }

    pub fn with_failure(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }

    pub fn produce_count(&self) -> usize {
        self.produce_count.load(Ordering::SeqCst)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSource for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn produce(&self) -> ProcessResult {
        self.produce_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            DUMMY_ERROR.into()
        } else {
            DUMMY_OK.into()
        }
    }
}
