//! Fault category patterns, fix advice and reproduction step templates.

use fh_protocol::FaultCategory;
use regex::Regex;
use std::sync::LazyLock;

// ── Category patterns ─────────────────────────────────────────

struct CategoryRule {
    category: FaultCategory,
    patterns: Vec<Regex>,
}

impl CategoryRule {
    fn new(category: FaultCategory, patterns: &[&str]) -> Self {
        Self {
            category,
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("category pattern must compile"))
                .collect(),
        }
    }

    fn matches(&self, lower: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(lower))
    }
}

/// Tested in this order; the first category with a hit wins.
static CATEGORY_RULES: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    vec![
        CategoryRule::new(
            FaultCategory::Memory,
            &[
                r"out of memory",
                r"alloc(ation)? failed",
                r"memory leak",
                r"segmentation fault",
            ],
        ),
        CategoryRule::new(
            FaultCategory::Io,
            &[
                r"io error",
                r"disk full",
                r"permission denied",
                r"device busy",
            ],
        ),
        CategoryRule::new(
            FaultCategory::Network,
            &[r"timeout", r"connection reset", r"dns", r"unreachable"],
        ),
        CategoryRule::new(
            FaultCategory::Boot,
            &[r"bootloader", r"firmware", r"panic", r"watchdog"],
        ),
    ]
});

/// Assign a fault category to a single log line.
pub fn detect_category(line: &str) -> FaultCategory {
    let lower = line.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.category)
        .unwrap_or(FaultCategory::Generic)
}

/// Whether a line carries an error marker ("error" or "panic", any case).
pub fn is_error_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("error") || lower.contains("panic")
}

// ── Fix advice ────────────────────────────────────────────────

pub fn suggested_fix(category: FaultCategory) -> &'static str {
    match category {
        FaultCategory::Memory => {
            "Increase heap/stack allocation and enable leak detection in the bootloader configuration."
        }
        FaultCategory::Io => {
            "Check storage health, free disk space, and verify the process user has the right permissions."
        }
        FaultCategory::Network => {
            "Validate connectivity to dependent services, update DNS, and increase timeout thresholds."
        }
        FaultCategory::Boot => {
            "Reflash the boot partition with the latest firmware and reset the watchdog configuration."
        }
        FaultCategory::Generic => {
            "Review the failing module logs and rerun the scenario with verbose instrumentation enabled."
        }
    }
}

// ── Reproduction steps ────────────────────────────────────────

pub const NO_ERROR_ROOT_CAUSE: &str = "No critical errors detected in the provided log.";

pub const NO_ERROR_STEPS: [&str; 2] = [
    "Increase log verbosity to DEBUG.",
    "Reproduce the scenario and re-upload the latest log bundle.",
];

fn category_step(category: FaultCategory) -> Option<&'static str> {
    match category {
        FaultCategory::Memory => Some(
            "Use a leak detector (valgrind/asan) while running the firmware update sequence.",
        ),
        FaultCategory::Network => {
            Some("Simulate degraded network conditions with tc/netem to reproduce the timeout.")
        }
        FaultCategory::Boot => Some(
            "Flash the previous known-good image, then apply the latest firmware to observe the boot panic.",
        ),
        FaultCategory::Io | FaultCategory::Generic => None,
    }
}

/// Build the ordered reproduction steps for a dominant category.
///
/// `last_error` must already be trimmed.
pub fn reproduction_steps(category: FaultCategory, last_error: &str) -> Vec<String> {
    let mut steps = vec![
        "Collect full log output with DEBUG verbosity enabled.".to_string(),
        "Restart the service with instrumentation and reproduce the failing workflow.".to_string(),
        format!("Capture system metrics (CPU, memory, IO) while the issue manifests ({category})."),
    ];
    if let Some(step) = category_step(category) {
        steps.insert(1, step.to_string());
    }
    steps.push(format!("Verify the failing log line: \"{last_error}\"."));
    steps
}
