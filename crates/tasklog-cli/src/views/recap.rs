use crate::record::{TaskRecord, TaskStatus};
use owo_colors::OwoColorize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
struct RecapCounters {
    ok: usize,
    changed: usize,
    unreachable: usize,
    failures: usize,
    skipped: usize,
}

/// Per-host tallies accumulated over a result stream, printed once the
/// stream ends. Hosts come out sorted (BTreeMap order).
#[derive(Debug, Default)]
pub struct PlayRecap {
    hosts: BTreeMap<String, RecapCounters>,
}

impl PlayRecap {
    pub fn add(&mut self, record: &TaskRecord) {
        let counters = self.hosts.entry(record.host.clone()).or_default();
        match record.status {
            TaskStatus::Ok => counters.ok += 1,
            TaskStatus::Changed => {
                counters.ok += 1;
                counters.changed += 1;
            }
            TaskStatus::Failed => counters.failures += 1,
            TaskStatus::Unreachable => counters.unreachable += 1,
            TaskStatus::Skipped => counters.skipped += 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn format_lines(&self, enable_color: bool) -> Vec<String> {
        let mut lines = vec!["-- Play recap --".to_string()];

        for (host, counters) in &self.hosts {
            let host_display = if !enable_color {
                host.clone()
            } else if counters.failures > 0 || counters.unreachable > 0 {
                host.red().to_string()
            } else {
                host.green().to_string()
            };

            lines.push(format!(
                "{} : {} {} {} {} {}",
                host_display,
                tally("ok", counters.ok, |s| s.green().to_string(), enable_color),
                tally("changed", counters.changed, |s| s.yellow().to_string(), enable_color),
                tally(
                    "unreachable",
                    counters.unreachable,
                    |s| s.yellow().to_string(),
                    enable_color,
                ),
                tally("failed", counters.failures, |s| s.red().to_string(), enable_color),
                tally("skipped", counters.skipped, |s| s.cyan().to_string(), enable_color),
            ));
        }

        lines
    }
}

/// A `label=count` cell, highlighted only when the count is non-zero.
fn tally(label: &str, count: usize, color: fn(&str) -> String, enable_color: bool) -> String {
    let text = format!("{}={}", label, count);
    if enable_color && count > 0 {
        color(&text)
    } else {
        text
    }
}
