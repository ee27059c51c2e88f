//! Link id generation.
//!
//! The store never invents ids on its own; it asks an injected
//! [`IdGenerator`], so tests and the CLI can use deterministic ids while the
//! server uses random ones.

use std::sync::atomic::{AtomicU64, Ordering};

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Source of unique link ids.
pub trait IdGenerator: Send + Sync {
    /// Returns an id not returned before by this generator.
    fn next_id(&self) -> String;
}

/// Hands out `"1"`, `"2"`, `"3"`, ...
///
/// Use [`SequentialIdGenerator::starting_after`] when resuming from persisted
/// links so new ids do not collide with loaded ones.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    last: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues after the largest numeric id in `existing`. Non-numeric ids
    /// are ignored.
    pub fn starting_after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            last: AtomicU64::new(last),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        (self.last.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

/// Generates 12-character URL-safe ids from OS randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        generate_id()
    }
}

/// Generates a cryptographically secure random id.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character id.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new();

        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
        assert_eq!(ids.next_id(), "3");
    }

    #[test]
    fn test_sequential_resumes_after_existing() {
        let ids = SequentialIdGenerator::starting_after(["4", "abc", "11", "2"]);

        assert_eq!(ids.next_id(), "12");
    }

    #[test]
    fn test_sequential_with_no_numeric_ids() {
        let ids = SequentialIdGenerator::starting_after(["x", "y"]);

        assert_eq!(ids.next_id(), "1");
    }

    #[test]
    fn test_generate_id_has_correct_length() {
        assert_eq!(generate_id().len(), 12);
    }

    #[test]
    fn test_generate_id_url_safe_characters() {
        let id = generate_id();
        assert!(
            id.chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_random_ids_are_unique() {
        let generator = RandomIdGenerator;
        let ids: HashSet<String> = (0..1000).map(|_| generator.next_id()).collect();

        assert_eq!(ids.len(), 1000);
    }
}
