use crate::value::Value;

/// Fields we would like to see before the others, in this order.
pub const PRIORITY_FIELDS: &[&str] = &["stdout", "rc", "stderr", "start", "end", "msg"];

/// Bookkeeping fields excluded from the "remaining entries" pass, so they
/// never show up twice or at all once surfaced via the priority pass.
pub const NOISE_FIELDS: &[&str] = &[
    "stdout",
    "stdout_lines",
    "rc",
    "stderr",
    "start",
    "end",
    "msg",
    "_ansible_verbose_always",
    "_ansible_no_log",
    "invocation",
    "_ansible_parsed",
    "_ansible_item_result",
    "_ansible_ignore_errors",
    "_ansible_item_label",
];

/// Marker key that forces a whole map to render as a withheld-output notice.
pub const REDACTION_MARKER: &str = "_ansible_no_log";

const REDACTION_NOTICE: &str = "the output has been hidden due to the fact that \
'no_log: true' was specified for this result";

/// Field handling rules applied once per map node during serialization.
///
/// Decided at the map level before recursing; the serializer never infers
/// redaction implicitly deeper in the tree.
#[derive(Debug, Clone)]
pub struct FieldPolicy {
    pub priority: &'static [&'static str],
    pub noise: &'static [&'static str],
    pub redaction_marker: &'static str,
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            priority: PRIORITY_FIELDS,
            noise: NOISE_FIELDS,
            redaction_marker: REDACTION_MARKER,
        }
    }
}

impl FieldPolicy {
    pub fn is_noise(&self, key: &str) -> bool {
        self.noise.contains(&key)
    }

    /// True when the map carries a truthy redaction marker.
    pub fn is_redacted(&self, entries: &[(String, Value)]) -> bool {
        entries
            .iter()
            .any(|(key, value)| key == self.redaction_marker && value.is_truthy())
    }

    /// The synthetic one-entry map substituted for a redacted map.
    pub fn censored_entries(&self) -> Vec<(String, Value)> {
        vec![("censored".to_string(), Value::scalar(REDACTION_NOTICE))]
    }
}
