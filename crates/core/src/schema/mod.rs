mod object;
mod violation;

pub use object::{FieldKind, ObjectSchema};
pub use violation::Violation;

use serde_json::{Map, Value};

/// A record as stored: attribute names mapped to scalar or nested values.
pub type Record = Map<String, Value>;

/// Validation seam for records.
///
/// Implementations are pure: the same candidate always yields the same
/// outcome, and neither path performs I/O. The accessor calls `validate`
/// on full records (saves and decoded reads) and `validate_partial` on
/// update patches.
pub trait Schema: Send + Sync {
    /// Validates a full record, returning its validated form.
    fn validate(&self, candidate: &Value) -> Result<Record, Vec<Violation>>;

    /// Validates a partial record against the declared attributes present
    /// in it. Empty candidates are rejected; absent attributes are not.
    fn validate_partial(&self, candidate: &Value) -> Result<Record, Vec<Violation>>;
}
