use serde::{Deserialize, Serialize};

/// Fault category assigned to an error-bearing log line.
///
/// Variant declaration order matters: it is the order in which categories
/// are tested against a line and the tie-break order when two categories
/// have the same count. `ALL` mirrors it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultCategory {
    Memory,
    Io,
    Network,
    Boot,
    /// No pattern matched.
    Generic,
}

impl FaultCategory {
    /// Every category in declaration order.
    pub const ALL: [FaultCategory; 5] = [
        Self::Memory,
        Self::Io,
        Self::Network,
        Self::Boot,
        Self::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Io => "io",
            Self::Network => "network",
            Self::Boot => "boot",
            Self::Generic => "generic",
        }
    }

    /// Category name with the first letter upper-cased ("Io", "Memory").
    pub fn title(&self) -> &'static str {
        match self {
            Self::Memory => "Memory",
            Self::Io => "Io",
            Self::Network => "Network",
            Self::Boot => "Boot",
            Self::Generic => "Generic",
        }
    }

    /// Position in `ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnosis produced for one uploaded log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    /// One-line statement of the suspected root cause.
    pub root_cause: String,
    /// Ordered steps to reproduce the fault.
    pub reproduction_steps: Vec<String>,
    /// Fix advice for the dominant category.
    pub suggested_fix: String,
    /// Heuristic score in 0–100.
    pub confidence: u8,
    /// Dominant fault category.
    pub category: FaultCategory,
}
