use thiserror::Error;

use crate::domain::history::History;

/// Integer identifier shared by students and teachers.
pub type RecordId = u32;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> RecordId;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Entities that own an append-only history.
pub trait Chronicled {
    fn history(&self) -> &History;
}

/// Allocates the next identifier as `max(existing) + 1`, or `1` when empty.
/// Gaps below the current maximum are never filled.
pub fn next_id<T: Identifiable>(records: &[T]) -> RecordId {
    records
        .iter()
        .map(Identifiable::id)
        .max()
        .map_or(1, |max| max + 1)
}

/// Raised when a textual key (month, obligation, payment method) cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot parse {kind} from `{input}`")]
pub struct ParseError {
    pub kind: &'static str,
    pub input: String,
}

impl ParseError {
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub(RecordId);

    impl Identifiable for Stub {
        fn id(&self) -> RecordId {
            self.0
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        let empty: Vec<Stub> = Vec::new();
        assert_eq!(next_id(&empty), 1);
    }

    #[test]
    fn next_id_follows_highest_not_gaps() {
        let records = vec![Stub(2), Stub(7), Stub(3)];
        assert_eq!(next_id(&records), 8);
    }
}
