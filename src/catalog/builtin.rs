//! Built-in seed catalog content

use crate::catalog::{Category, Difficulty, Pattern, TestCase};
use serde_json::{json, Value};

/// The authored seed patterns, in authoring order.
pub fn builtin_patterns() -> Vec<Pattern> {
    vec![singleton(), binary_search(), linear_regression()]
}

fn singleton() -> Pattern {
    Pattern {
        id: "singleton".to_string(),
        title: "Singleton Pattern".to_string(),
        category: Category::DesignPattern,
        difficulty: Difficulty::Beginner,
        description: "The Singleton pattern ensures that a class has only one instance and provides a global point of access to it. This is useful when exactly one object is needed to coordinate actions across the system.

**Key Concepts:**
- Private constructor to prevent direct instantiation
- Static method to get the single instance
- Lazy initialization"
            .to_string(),
        visualization: Some(
            "
┌─────────────────────┐
│   Singleton         │
├─────────────────────┤
│ - instance: Singleton│
├─────────────────────┤
│ + getInstance()     │
│ - constructor()     │
└─────────────────────┘
        "
            .to_string(),
        ),
        xp_reward: 50,
        starter_code: r#"class Singleton {
  // TODO: Implement the Singleton pattern

  constructor() {
    // Your code here
  }

  static getInstance() {
    // Your code here
  }

  doSomething() {
    return "Singleton instance";
  }
}"#
        .to_string(),
        solution: r#"class Singleton {
  static instance;

  constructor() {
    // Private constructor prevents direct instantiation
    if (Singleton.instance) {
      return Singleton.instance;
    }
    Singleton.instance = this;
  }

  static getInstance() {
    if (!Singleton.instance) {
      Singleton.instance = new Singleton();
    }
    return Singleton.instance;
  }

  doSomething() {
    return "Singleton instance";
  }
}"#
        .to_string(),
        test_cases: vec![
            test_case(
                "test-1",
                "Should return the same instance",
                Value::Null,
                json!(true),
                "const instance1 = Singleton.getInstance();
const instance2 = Singleton.getInstance();
return instance1 === instance2;",
            ),
            test_case(
                "test-2",
                "Should execute doSomething method",
                Value::Null,
                json!("Singleton instance"),
                "const instance = Singleton.getInstance();
return instance.doSomething();",
            ),
        ],
        hints: vec![
            "Use a static property to store the instance".to_string(),
            "Make the constructor private".to_string(),
            "Check if instance exists before creating a new one".to_string(),
        ],
    }
}

fn binary_search() -> Pattern {
    Pattern {
        id: "binary-search".to_string(),
        title: "Binary Search".to_string(),
        category: Category::Dsa,
        difficulty: Difficulty::Beginner,
        description: "Binary Search is an efficient algorithm for finding an item in a sorted array. It works by repeatedly dividing the search interval in half.

**Key Concepts:**
- Array must be sorted
- Time complexity: O(log n)
- Divide and conquer approach"
            .to_string(),
        visualization: Some(
            "
Array: [1, 3, 5, 7, 9, 11, 13, 15]
Target: 7

Step 1: [1, 3, 5, 7, | 9, 11, 13, 15]  mid=7 ✓
        "
            .to_string(),
        ),
        xp_reward: 40,
        starter_code: "function binarySearch(arr, target) {
  // TODO: Implement binary search
  // Return the index of target, or -1 if not found

  return -1;
}"
        .to_string(),
        solution: "function binarySearch(arr, target) {
  let left = 0;
  let right = arr.length - 1;

  while (left <= right) {
    const mid = Math.floor((left + right) / 2);

    if (arr[mid] === target) {
      return mid;
    } else if (arr[mid] < target) {
      left = mid + 1;
    } else {
      right = mid - 1;
    }
  }

  return -1;
}"
        .to_string(),
        test_cases: vec![
            test_case(
                "test-1",
                "Should find element in the middle",
                json!({ "arr": [1, 3, 5, 7, 9], "target": 5 }),
                json!(2),
                "return binarySearch([1, 3, 5, 7, 9], 5);",
            ),
            test_case(
                "test-2",
                "Should return -1 for missing element",
                json!({ "arr": [1, 3, 5, 7, 9], "target": 6 }),
                json!(-1),
                "return binarySearch([1, 3, 5, 7, 9], 6);",
            ),
            test_case(
                "test-3",
                "Should find first element",
                json!({ "arr": [1, 3, 5, 7, 9], "target": 1 }),
                json!(0),
                "return binarySearch([1, 3, 5, 7, 9], 1);",
            ),
        ],
        hints: vec![
            "Start with left at 0 and right at array length - 1".to_string(),
            "Calculate middle index: Math.floor((left + right) / 2)".to_string(),
            "Compare middle element with target and adjust search range".to_string(),
        ],
    }
}

fn linear_regression() -> Pattern {
    Pattern {
        id: "linear-regression".to_string(),
        title: "Simple Linear Regression".to_string(),
        category: Category::MlAlgorithm,
        difficulty: Difficulty::Intermediate,
        description: "Linear Regression is a fundamental machine learning algorithm that models the relationship between variables by fitting a linear equation.

**Key Concepts:**
- Slope and intercept calculation
- Mean of x and y values
- Formula: y = mx + b"
            .to_string(),
        visualization: Some(
            "
     y
     │     ●
     │   ●   ●
     │ ●   ●
     │●  /
     │  /
     └────────── x
        "
            .to_string(),
        ),
        xp_reward: 60,
        starter_code: "// Point: { x: number, y: number }

function linearRegression(points) {
  // TODO: Calculate slope and intercept
  // slope = Σ((x - meanX) * (y - meanY)) / Σ((x - meanX)²)
  // intercept = meanY - slope * meanX

  return { slope: 0, intercept: 0 };
}"
        .to_string(),
        solution: "// Point: { x: number, y: number }

function linearRegression(points) {
  const n = points.length;
  const meanX = points.reduce((sum, p) => sum + p.x, 0) / n;
  const meanY = points.reduce((sum, p) => sum + p.y, 0) / n;

  let numerator = 0;
  let denominator = 0;

  for (const point of points) {
    numerator += (point.x - meanX) * (point.y - meanY);
    denominator += (point.x - meanX) ** 2;
  }

  const slope = numerator / denominator;
  const intercept = meanY - slope * meanX;

  return { slope, intercept };
}"
        .to_string(),
        test_cases: vec![test_case(
            "test-1",
            "Should calculate correct slope and intercept",
            json!([{ "x": 1, "y": 2 }, { "x": 2, "y": 4 }, { "x": 3, "y": 6 }]),
            json!({ "slope": 2, "intercept": 0 }),
            "const result = linearRegression([{ x: 1, y: 2 }, { x: 2, y: 4 }, { x: 3, y: 6 }]);
return { slope: Math.round(result.slope), intercept: Math.round(result.intercept) };",
        )],
        hints: vec![
            "Calculate mean of x and y values first".to_string(),
            "Use the covariance formula for slope".to_string(),
            "intercept = meanY - slope * meanX".to_string(),
        ],
    }
}

fn test_case(
    id: &str,
    description: &str,
    input: Value,
    expected_output: Value,
    code: &str,
) -> TestCase {
    TestCase {
        id: id.to_string(),
        description: description.to_string(),
        input,
        expected_output,
        code: code.to_string(),
    }
}
