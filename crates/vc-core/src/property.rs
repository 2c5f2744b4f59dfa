//! Property verification types.
//!
//! Every property checked against a container names the container family
//! it belongs to, so a failing report points straight at the structure
//! whose invariant broke.

use crate::counterexample::Counterexample;

/// Result of checking a single property.
#[derive(Debug, Clone)]
pub struct PropertyResult {
    /// Human-readable property name (e.g., "RingClosesForward")
    pub name: &'static str,

    /// Whether the property holds
    pub holds: bool,

    /// Description of violation if property doesn't hold
    pub violation: Option<String>,

    /// Container family the property belongs to (e.g., "circular_list")
    pub container: &'static str,

    /// States leading to the violation, when the checker could record them
    pub counterexample: Option<Counterexample>,
}

impl PropertyResult {
    /// Create a passing property result.
    #[must_use]
    pub fn pass(name: &'static str, container: &'static str) -> Self {
        debug_assert!(!name.is_empty(), "Property name must not be empty");
        debug_assert!(!container.is_empty(), "Container name must not be empty");

        Self {
            name,
            holds: true,
            violation: None,
            container,
            counterexample: None,
        }
    }

    /// Create a failing property result.
    #[must_use]
    pub fn fail(
        name: &'static str,
        container: &'static str,
        violation: String,
        counterexample: Option<Counterexample>,
    ) -> Self {
        debug_assert!(!name.is_empty(), "Property name must not be empty");
        debug_assert!(!container.is_empty(), "Container name must not be empty");
        debug_assert!(!violation.is_empty(), "Violation description must not be empty");

        Self {
            name,
            holds: false,
            violation: Some(violation),
            container,
            counterexample,
        }
    }

    /// Format as a single-line status for logging.
    #[must_use]
    pub fn format_status(&self) -> String {
        if self.holds {
            format!("[PASS] {} ({})", self.name, self.container)
        } else {
            format!(
                "[FAIL] {} ({}): {}",
                self.name,
                self.container,
                self.violation.as_deref().unwrap_or("unknown")
            )
        }
    }
}

/// A set of named properties evaluated against one container.
pub trait PropertyChecker {
    /// Evaluate every property, passing ones included.
    fn check_all(&self) -> Vec<PropertyResult>;

    /// `Err` with the first property that does not hold.
    fn verify_all(&self) -> Result<(), PropertyResult> {
        match self.check_all().into_iter().find(|r| !r.holds) {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    fn all_hold(&self) -> bool {
        self.check_all().iter().all(|r| r.holds)
    }

    /// Evaluate every property and keep the results for reporting.
    fn summary(&self) -> PropertySummary {
        PropertySummary {
            results: self.check_all(),
        }
    }
}

/// Outcome of one [`PropertyChecker::summary`] run.
#[derive(Debug, Clone)]
pub struct PropertySummary {
    pub results: Vec<PropertyResult>,
}

impl PropertySummary {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.holds).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// Properties that do not hold, in check order.
    pub fn failures(&self) -> impl Iterator<Item = &PropertyResult> {
        self.results.iter().filter(|r| !r.holds)
    }

    /// One status line per property, then the trace of the first failure
    /// that carries a counterexample.
    #[must_use]
    pub fn format_report(&self) -> String {
        let mut report = format!(
            "Property Check Summary: {}/{} passed\n",
            self.passed(),
            self.results.len()
        );

        for result in &self.results {
            report.push_str(&result.format_status());
            report.push('\n');
        }

        let traced = self.failures().find_map(|r| r.counterexample.as_ref());
        if let Some(ce) = traced {
            report.push_str("\nCounterexample:\n");
            report.push_str(&ce.render_diagram());
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<PropertyResult>);

    impl PropertyChecker for Fixed {
        fn check_all(&self) -> Vec<PropertyResult> {
            self.0.clone()
        }
    }

    #[test]
    fn test_property_result_pass() {
        let result = PropertyResult::pass("SizeWithinCapacity", "bounded_stack");
        assert!(result.holds);
        assert!(result.violation.is_none());
        assert!(result.counterexample.is_none());
    }

    #[test]
    fn test_property_result_fail() {
        let result = PropertyResult::fail(
            "SizeWithinCapacity",
            "bounded_stack",
            "size 11 exceeds capacity 10".to_string(),
            None,
        );
        assert!(!result.holds);
        assert!(result.violation.is_some());
    }

    #[test]
    fn test_format_status() {
        let pass = PropertyResult::pass("Test", "avl_tree");
        assert_eq!(pass.format_status(), "[PASS] Test (avl_tree)");

        let fail = PropertyResult::fail("Test", "avl_tree", "error".to_string(), None);
        assert_eq!(fail.format_status(), "[FAIL] Test (avl_tree): error");
    }

    #[test]
    fn test_verify_all_returns_first_failure() {
        let checker = Fixed(vec![
            PropertyResult::pass("A", "bst"),
            PropertyResult::fail("B", "bst", "broken".to_string(), None),
            PropertyResult::fail("C", "bst", "also broken".to_string(), None),
        ]);

        let failure = checker.verify_all().unwrap_err();
        assert_eq!(failure.name, "B");
        assert!(!checker.all_hold());

        let summary = checker.summary();
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.failures().count(), 2);
        assert!(summary.format_report().starts_with("Property Check Summary: 1/3 passed"));
    }

    #[test]
    fn test_report_includes_counterexample() {
        let mut ce = Counterexample::with_seed(7);
        ce.add_state(crate::counterexample::StateSnapshot {
            step: 1,
            description: "pushed 3".to_string(),
            variables: vec![("len".to_string(), "1".to_string())],
        });
        let checker = Fixed(vec![PropertyResult::fail(
            "LifoOrder",
            "bounded_stack",
            "pop returned 1, expected 3".to_string(),
            Some(ce),
        )]);

        let report = checker.summary().format_report();
        assert!(report.contains("Counterexample:"));
        assert!(report.contains("DST_SEED=7"));
        assert!(report.contains("pushed 3"));
    }
}
