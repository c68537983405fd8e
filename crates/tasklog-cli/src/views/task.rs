use crate::duration::format_duration;
use crate::record::{TaskRecord, TaskStatus};
use owo_colors::OwoColorize;
use tasklog_render::serialize;

/// Options for per-task line rendering
#[derive(Debug, Clone)]
pub struct TaskDisplayOpts {
    pub enable_color: bool,
    pub verbose: bool,
}

impl Default for TaskDisplayOpts {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose: false,
        }
    }
}

fn status_color(status: TaskStatus) -> fn(&str) -> String {
    match status {
        TaskStatus::Ok => |s: &str| s.green().to_string(),
        TaskStatus::Changed | TaskStatus::Unreachable => |s: &str| s.yellow().to_string(),
        TaskStatus::Failed => |s: &str| s.red().to_string(),
        TaskStatus::Skipped => |s: &str| s.cyan().to_string(),
    }
}

fn status_caption(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Ok => "SUCCESS",
        TaskStatus::Changed => "CHANGED",
        TaskStatus::Failed => "FAILED",
        TaskStatus::Skipped => "SKIPPED",
        TaskStatus::Unreachable => "UNREACHABLE!",
    }
}

/// Format one task record into display lines: a status line, then the
/// serialized result tree when the record calls for it.
pub fn format_task_lines(record: &TaskRecord, opts: &TaskDisplayOpts) -> Vec<String> {
    let color = status_color(record.status);
    let mut lines = Vec::new();

    let mut status_line = format!(
        "{} | {}",
        record.host_string(),
        status_caption(record.status)
    );
    if record.status == TaskStatus::Unreachable {
        if let Some(msg) = record
            .result
            .as_ref()
            .and_then(|r| r.get("msg"))
            .and_then(|m| m.as_str())
        {
            status_line.push_str(&format!(": {}", msg));
        }
    }
    if let Some(duration_ms) = record.duration_ms {
        status_line.push_str(&format!(" | {}", format_duration(duration_ms)));
    }
    lines.push(if opts.enable_color {
        color(&status_line)
    } else {
        status_line
    });

    if record.wants_result_body(opts.verbose) {
        if let Some(tree) = record.result_tree() {
            for line in serialize(&tree, 0).lines() {
                lines.push(if opts.enable_color {
                    color(line)
                } else {
                    line.to_string()
                });
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> TaskDisplayOpts {
        TaskDisplayOpts {
            enable_color: false,
            verbose: false,
        }
    }

    fn record(status: TaskStatus) -> TaskRecord {
        TaskRecord {
            host: "web01".to_string(),
            task: None,
            status,
            duration_ms: None,
            delegated_to: None,
            result: None,
        }
    }

    #[test]
    fn test_success_line() {
        let mut r = record(TaskStatus::Ok);
        r.duration_ms = Some(150);
        assert_eq!(format_task_lines(&r, &opts()), vec!["web01 | SUCCESS | 150ms"]);
    }

    #[test]
    fn test_changed_line_without_duration() {
        let r = record(TaskStatus::Changed);
        assert_eq!(format_task_lines(&r, &opts()), vec!["web01 | CHANGED"]);
    }

    #[test]
    fn test_unreachable_line_carries_message() {
        let mut r = record(TaskStatus::Unreachable);
        r.result = Some(serde_json::json!({"msg": "timed out"}));
        assert_eq!(
            format_task_lines(&r, &opts()),
            vec!["web01 | UNREACHABLE!: timed out"]
        );
    }

    #[test]
    fn test_failed_record_prints_result_tree() {
        let mut r = record(TaskStatus::Failed);
        r.duration_ms = Some(1000);
        r.result = Some(serde_json::json!({"rc": 1, "stdout": ""}));
        let lines = format_task_lines(&r, &opts());
        assert_eq!(
            lines,
            vec![
                "web01 | FAILED | 1.00s",
                "{",
                "  - stdout: \"\"",
                "  - rc: 1",
                "}"
            ]
        );
    }

    #[test]
    fn test_ok_record_hides_result_unless_verbose() {
        let mut r = record(TaskStatus::Ok);
        r.result = Some(serde_json::json!({"rc": 0}));
        assert_eq!(format_task_lines(&r, &opts()).len(), 1);

        let verbose = TaskDisplayOpts {
            enable_color: false,
            verbose: true,
        };
        assert!(format_task_lines(&r, &verbose).len() > 1);
    }
}
