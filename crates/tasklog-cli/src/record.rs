use serde::Deserialize;
use tasklog_render::Value;

/// One task execution outcome, as parsed from a JSON record.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    pub host: String,
    #[serde(default)]
    pub task: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub delegated_to: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Ok,
    Changed,
    Failed,
    Skipped,
    Unreachable,
}

impl TaskRecord {
    /// Host label, showing delegation as `host -> target` when present.
    pub fn host_string(&self) -> String {
        match &self.delegated_to {
            Some(target) => format!("{} -> {}", self.host, target),
            None => self.host.clone(),
        }
    }

    /// The structured result as a renderable tree.
    pub fn result_tree(&self) -> Option<Value> {
        self.result.clone().map(Value::from)
    }

    /// Whether the serialized result body should be printed.
    ///
    /// Failures always show their result. Successful tasks show it only in
    /// verbose mode or when the result asks for it via a truthy
    /// `_ansible_verbose_always`, and `_ansible_verbose_override` silences
    /// that path.
    pub fn wants_result_body(&self, verbose: bool) -> bool {
        let Some(result) = &self.result else {
            return false;
        };
        match self.status {
            TaskStatus::Failed => true,
            TaskStatus::Ok | TaskStatus::Changed => {
                if result.get("_ansible_verbose_override").is_some() {
                    return false;
                }
                verbose
                    || result
                        .get("_ansible_verbose_always")
                        .is_some_and(|marker| Value::from(marker.clone()).is_truthy())
            }
            TaskStatus::Skipped | TaskStatus::Unreachable => false,
        }
    }
}
