use oval_proto::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that captures everything presented to it
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub written: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> Vec<Vec<u8>> {
        self.written.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &[u8]) -> Result<()> {
        self.written.lock().unwrap().push(content.to_vec());
        Ok(())
    }
}
