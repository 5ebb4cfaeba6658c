//! Three-way optional input for sparse updates.

/// A requested change to an optional field.
///
/// Distinguishes "leave it alone" from "remove the value" from
/// "replace the value", which a plain `Option` cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Clear,
    Set(T),
}

impl Patch<String> {
    /// Normalizes raw wire input: missing is `Absent`, the empty string is
    /// `Clear`, anything else is `Set`.
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            None => Patch::Absent,
            Some(s) if s.is_empty() => Patch::Clear,
            Some(s) => Patch::Set(s),
        }
    }
}
