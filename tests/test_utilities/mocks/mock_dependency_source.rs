use build_order::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DependencySource serving canned tool output per package
///
/// Unknown packages fail, like a tool exiting with a non-zero status.
#[derive(Default, Clone)]
pub struct MockDependencySource {
    outputs: HashMap<String, Vec<String>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockDependencySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, package: &str, output: &str) -> Self {
        self.outputs.insert(
            package.to_string(),
            output.lines().map(str::to_string).collect(),
        );
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl DependencySource for MockDependencySource {
    fn fetch_dependencies(&self, package_name: &str) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(package_name.to_string());
        self.outputs
            .get(package_name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("mock tool exited with status 100"))
    }

    fn describe(&self) -> String {
        "mock-rdepends".to_string()
    }
}
