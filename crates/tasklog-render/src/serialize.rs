use crate::policy::FieldPolicy;
use crate::value::Value;

const INDENT_WIDTH: usize = 2;

/// Render a value tree into its indented textual form using the default
/// field policy. See [`serialize_with`].
pub fn serialize(value: &Value, indent: usize) -> String {
    serialize_with(value, indent, &FieldPolicy::default())
}

/// Render a value tree into its indented textual form.
///
/// Pure and deterministic: same tree in, same string out, and the input is
/// never mutated (redaction and noise removal work through substitution and
/// exclusion, not deletion). The output is meant for terminal display, not
/// for parsing back.
///
/// Layout rules:
/// - scalars use their natural string form; the empty string renders as `""`
///   so empty stdout/stderr fields stay visible
/// - an empty list is `[]`; a single-element list inlines as `[ item ]`,
///   with multi-line items re-indented to line up under the opening bracket
/// - a multi-element list puts one `- ` item per line, one level deeper
/// - a map opens with `{`, emits priority fields first, then remaining
///   fields in natural order minus noise, one `- key: value` line each,
///   multi-line values re-indented under the value's start column
pub fn serialize_with(value: &Value, indent: usize, policy: &FieldPolicy) -> String {
    let padding = " ".repeat(indent * INDENT_WIDTH);

    match value {
        Value::Scalar(text) => {
            if text.is_empty() {
                "\"\"".to_string()
            } else {
                text.clone()
            }
        }

        Value::List(items) => match items.as_slice() {
            [] => "[]".to_string(),

            [item] => {
                let mut out = String::from("[ ");
                append_aligned(&mut out, &serialize_with(item, 0, policy), &padding);
                out.push_str(" ]");
                out
            }

            items => {
                let item_padding = " ".repeat((indent + 1) * INDENT_WIDTH);
                let mut out = String::from("[ ");
                for item in items {
                    out.push('\n');
                    out.push_str(&item_padding);
                    out.push_str("- ");
                    out.push_str(&serialize_with(item, indent, policy));
                }
                out.push('\n');
                out.push_str(&padding);
                out.push_str(" ]");
                out
            }
        },

        Value::Map(entries) => {
            // Redaction replaces the whole map before any field, priority
            // fields included, is even looked at.
            let censored;
            let entries: &[(String, Value)] = if policy.is_redacted(entries) {
                censored = policy.censored_entries();
                &censored
            } else {
                entries
            };

            let field_padding = " ".repeat((indent + 1) * INDENT_WIDTH);
            let mut out = String::from("{\n");
            let mut emitted: Vec<&str> = Vec::new();

            for &key in policy.priority {
                if let Some((_, value)) = entries.iter().find(|(k, _)| k == key) {
                    append_field(&mut out, &field_padding, key, value, indent, policy);
                    emitted.push(key);
                }
            }

            for (key, value) in entries {
                if emitted.iter().any(|k| k == key) || policy.is_noise(key) {
                    continue;
                }
                append_field(&mut out, &field_padding, key, value, indent, policy);
            }

            out.push_str(&padding);
            out.push('}');
            out
        }
    }
}

/// Emit one `- key: value` map field line, with the continuation lines of a
/// multi-line value re-indented to align under the value's start column.
fn append_field(
    out: &mut String,
    field_padding: &str,
    key: &str,
    value: &Value,
    indent: usize,
    policy: &FieldPolicy,
) {
    let prefix = format!("{}- {}: ", field_padding, key);
    let continuation = " ".repeat(prefix.chars().count());
    out.push_str(&prefix);
    append_aligned(out, &serialize_with(value, indent, policy), &continuation);
    out.push('\n');
}

/// Append a rendering, prefixing every line after the first with `padding`.
fn append_aligned(out: &mut String, rendered: &str, padding: &str) {
    for (i, line) in rendered.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(padding);
        }
        out.push_str(line);
    }
}
