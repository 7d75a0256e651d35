//! The stats snapshot payload received from the endpoint.
//!
//! One snapshot is fetched per poll cycle. The component never mutates it;
//! fields are projected verbatim onto display rows, with the numeric prefix
//! of the percentage labels driving the gauge widths.

use serde::{Deserialize, Serialize};

/// One fetched payload describing current system metrics.
///
/// All metric fields arrive pre-formatted by the producer (e.g. `"37.5%"`,
/// `"2.1GB"`); the dashboard displays them verbatim and only parses the
/// numeric prefix where a gauge width is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Human-readable temperature label, e.g. `"45.2°C"` or `"N/A"`.
    pub cpu_temp: String,
    /// Human-readable CPU percentage label, e.g. `"37.5%"`.
    pub cpu_usage: String,
    /// Human-readable memory percentage label, e.g. `"60.0%"`.
    pub memory_percent: String,
    /// Human-readable used-memory quantity, e.g. `"2.1GB"`.
    pub memory_used: String,
    /// Human-readable total-memory quantity, e.g. `"8.0GB"`.
    pub memory_total: String,
    /// Producer hostname, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Producer OS/platform description, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Producer CPU architecture, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

impl StatsSnapshot {
    /// The memory readout shown next to the memory gauge:
    /// `memory_used + " / " + memory_total`.
    pub fn memory_display(&self) -> String {
        format!("{} / {}", self.memory_used, self.memory_total)
    }
}

/// Parse the leading numeric portion of a label like `"37.5%"`.
///
/// Accepts an optional sign, integer digits, and a fractional part, and
/// ignores whatever follows. Returns `None` when the label has no leading
/// number at all.
pub fn parse_numeric_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let bytes = s.as_bytes();

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    // A bare sign or a bare dot is not a number.
    if end == digits_start || !s[digits_start..end].bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    s[..end].parse().ok()
}
