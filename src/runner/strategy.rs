use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One candidate way of invoking the test suite: an executable, its
/// arguments, and an optional working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationStrategy {
    pub label: String,
    pub program: String,
    pub args: Vec<String>,
    pub working_directory: Option<PathBuf>,
}

impl InvocationStrategy {
    pub fn new(label: &str, program: &str, args: Vec<&str>) -> Self {
        Self {
            label: label.to_string(),
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            working_directory: None,
        }
    }

    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// The fixed ladder of invocation strategies, most specific first.
///
/// Tier three bypasses the test framework and runs the file directly.
/// Not ideal, but it keeps a broken pytest installation from masking an
/// otherwise runnable suite.
pub fn default_tiers(test_file: &str) -> Vec<InvocationStrategy> {
    vec![
        InvocationStrategy::new("pytest", "pytest", vec![test_file, "-v", "--tb=short"]),
        InvocationStrategy::new(
            "python3 -m pytest",
            "python3",
            vec!["-m", "pytest", test_file, "-v", "--tb=short"],
        ),
        InvocationStrategy::new("direct execution", "python3", vec![test_file]),
    ]
}
