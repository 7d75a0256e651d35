//! Local system probes for serve mode.
//!
//! Produces the same pre-formatted snapshot the dashboard consumes: CPU and
//! memory from sysinfo, CPU temperature from the thermal sysfs node
//! (millicelsius, Raspberry Pi style). Formatting matches the wire contract
//! exactly: one decimal place, `"N/A"` when the temperature is unreadable.

use std::path::Path;

use sysinfo::System;

use crate::models::StatsSnapshot;

/// Thermal sysfs node carrying the CPU temperature in millicelsius.
const THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// Collects system statistics from the local machine.
///
/// Keeps one `sysinfo::System` alive across collections; CPU usage is
/// meaningful from the second collection onward (sysinfo derives it from
/// the delta between refreshes).
pub struct StatsCollector {
    system: System,
}

impl StatsCollector {
    /// Create a collector with all system information loaded.
    pub fn new() -> Self {
        Self {
            system: System::new_all(),
        }
    }

    /// Refresh probes and produce a snapshot.
    pub fn collect(&mut self) -> StatsSnapshot {
        self.system.refresh_cpu();
        self.system.refresh_memory();

        let cpu_percent = self.system.global_cpu_info().cpu_usage() as f64;
        let used_bytes = self.system.used_memory();
        let total_bytes = self.system.total_memory();
        let memory_percent = if total_bytes > 0 {
            used_bytes as f64 / total_bytes as f64 * 100.0
        } else {
            0.0
        };

        StatsSnapshot {
            cpu_temp: format_cpu_temp(read_cpu_temp(Path::new(THERMAL_ZONE))),
            cpu_usage: format_percent(cpu_percent),
            memory_percent: format_percent(memory_percent),
            memory_used: format_gb(used_bytes as f64 / BYTES_PER_GB),
            memory_total: format_gb(total_bytes as f64 / BYTES_PER_GB),
            hostname: hostname::get()
                .ok()
                .map(|h| h.to_string_lossy().into_owned()),
            platform: System::long_os_version(),
            architecture: Some(std::env::consts::ARCH.to_string()),
        }
    }
}

impl Default for StatsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a thermal sysfs node and convert millicelsius to celsius.
///
/// Returns `None` when the node is missing or unparseable (non-Linux
/// hosts, containers without sysfs, boards without the zone).
pub fn read_cpu_temp(path: &Path) -> Option<f64> {
    let raw = std::fs::read_to_string(path).ok()?;
    let millicelsius: f64 = raw.trim().parse().ok()?;
    Some(millicelsius / 1000.0)
}

/// `"45.2°C"`, or `"N/A"` when the probe failed.
pub fn format_cpu_temp(celsius: Option<f64>) -> String {
    match celsius {
        Some(c) => format!("{:.1}°C", c),
        None => "N/A".to_string(),
    }
}

/// `"37.5%"`
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// `"2.1GB"`
pub fn format_gb(gb: f64) -> String {
    format!("{:.1}GB", gb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_numeric_prefix;
    use std::io::Write;

    #[test]
    fn test_format_cpu_temp() {
        assert_eq!(format_cpu_temp(Some(45.23)), "45.2°C");
        assert_eq!(format_cpu_temp(Some(45.28)), "45.3°C");
        assert_eq!(format_cpu_temp(None), "N/A");
    }

    #[test]
    fn test_format_percent_and_gb() {
        assert_eq!(format_percent(37.52), "37.5%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_gb(2.125), "2.1GB");
        assert_eq!(format_gb(8.0), "8.0GB");
    }

    #[test]
    fn test_read_cpu_temp_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "45200").unwrap();

        let temp = read_cpu_temp(file.path()).unwrap();
        assert!((temp - 45.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_read_cpu_temp_missing_node() {
        assert_eq!(
            read_cpu_temp(Path::new("/nonexistent/thermal_zone0/temp")),
            None
        );
    }

    #[test]
    fn test_read_cpu_temp_garbage_node() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not a number").unwrap();
        assert_eq!(read_cpu_temp(file.path()), None);
    }

    #[test]
    fn test_collect_produces_conforming_snapshot() {
        let mut collector = StatsCollector::new();
        let snapshot = collector.collect();

        // Percentage labels must carry a numeric prefix
        let cpu = parse_numeric_prefix(&snapshot.cpu_usage).unwrap();
        assert!((0.0..=100.0).contains(&cpu));
        let mem = parse_numeric_prefix(&snapshot.memory_percent).unwrap();
        assert!((0.0..=100.0).contains(&mem));

        // Quantities parse and total covers used
        let used = parse_numeric_prefix(&snapshot.memory_used).unwrap();
        let total = parse_numeric_prefix(&snapshot.memory_total).unwrap();
        assert!(total > 0.0);
        assert!(used <= total);

        // Temperature is either formatted or the N/A fallback
        assert!(snapshot.cpu_temp == "N/A" || snapshot.cpu_temp.ends_with("°C"));
        assert!(snapshot.architecture.is_some());
    }

    #[test]
    fn test_collect_twice() {
        let mut collector = StatsCollector::new();
        let _ = collector.collect();
        let second = collector.collect();
        assert!(parse_numeric_prefix(&second.cpu_usage).is_some());
    }
}
