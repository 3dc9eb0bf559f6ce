//! The tri-state result of the most recent upload.

/// Result of the most recently completed upload attempt.
///
/// Exactly one variant is active at a time. A new completion replaces
/// the whole value; nothing accumulates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome<T> {
    /// No upload has completed yet.
    #[default]
    Pending,
    /// The last upload failed. Holds the failure detail (the HTTP status
    /// text for status failures).
    Failed(String),
    /// The last upload succeeded with the given value.
    Succeeded(T),
}

impl<T> Outcome<T> {
    /// Total three-way eliminator: exactly one branch runs.
    pub fn fold<R>(
        &self,
        on_pending: impl FnOnce() -> R,
        on_failed: impl FnOnce(&str) -> R,
        on_succeeded: impl FnOnce(&T) -> R,
    ) -> R {
        match self {
            Self::Pending => on_pending(),
            Self::Failed(message) => on_failed(message),
            Self::Succeeded(value) => on_succeeded(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(outcome: &Outcome<u32>) -> String {
        outcome.fold(
            || "pending".to_owned(),
            |msg| format!("failed: {msg}"),
            |v| format!("ok: {v}"),
        )
    }

    #[test]
    fn fold_selects_exactly_one_branch() {
        assert_eq!(describe(&Outcome::Pending), "pending");
        assert_eq!(describe(&Outcome::Failed("500".into())), "failed: 500");
        assert_eq!(describe(&Outcome::Succeeded(7)), "ok: 7");
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(Outcome::<u32>::default(), Outcome::Pending);
        assert_eq!(describe(&Outcome::default()), "pending");
    }
}
