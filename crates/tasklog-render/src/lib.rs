pub mod policy;
pub mod serialize;
pub mod value;

pub use policy::{FieldPolicy, NOISE_FIELDS, PRIORITY_FIELDS, REDACTION_MARKER};
pub use serialize::{serialize, serialize_with};
pub use value::Value;
