//! Pattern content structures

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pattern category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "design-pattern")]
    DesignPattern,
    #[serde(rename = "ml-algorithm")]
    MlAlgorithm,
    #[serde(rename = "dsa")]
    Dsa,
}

/// Pattern difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single declared test case, owned by exactly one pattern.
///
/// `input` and `expected_output` are opaque JSON values whose shape is
/// pattern-defined; the engine never interprets them. `code` is the check
/// expression handed to the external execution sandbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: String,
    pub description: String,
    pub input: Value,
    pub expected_output: Value,
    pub code: String,
}

/// A unit of learning content: problem statement plus starter/solution code
/// and its declared test cases. Authored once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub description: String,
    #[serde(default)]
    pub visualization: Option<String>,
    pub xp_reward: u32,
    pub starter_code: String,
    pub solution: String,
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub hints: Vec<String>,
}

/// Outcome of running one test case in the external sandbox.
///
/// The engine only consumes the aggregate pass/fail signal; the output and
/// error fields exist for the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    pub test_id: String,
    pub passed: bool,
    #[serde(default)]
    pub actual_output: Option<Value>,
    #[serde(default)]
    pub expected_output: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}
