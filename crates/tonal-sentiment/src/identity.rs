//! Identity sources for scored results.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Length of generated result ids.
pub const ID_LEN: usize = 9;

/// Supplies the creation timestamp of a result.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Supplies the id of a result.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random lowercase base-36 ids of [`ID_LEN`] characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        let mut rng = rand::rng();
        (0..ID_LEN)
            .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_base36_and_fixed_length() {
        let id = RandomIdGenerator.next_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn random_ids_differ() {
        let ids: std::collections::HashSet<String> =
            (0..50).map(|_| RandomIdGenerator.next_id()).collect();
        assert!(ids.len() > 45, "expected mostly unique ids, got {}", ids.len());
    }
}
