//! Transaction identifiers
//!
//! Ids are integers derived from the creation time in milliseconds. The
//! generator never hands out a value less than or equal to the last one it
//! issued, so several transactions created within the same millisecond still
//! get distinct ids.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

const DISPLAY_PREFIX: &str = "txn-";

/// Unique, immutable identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TransactionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    /// Accepts "1771718400000" as well as the "txn-" prefixed form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Hands out strictly increasing, time-based transaction ids
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator that will never issue an id at or below `floor`
    ///
    /// The tracker seeds this with the largest id already loaded from
    /// storage.
    pub fn starting_after(floor: Option<TransactionId>) -> Self {
        Self {
            last: floor.map(|id| id.0).unwrap_or(0),
        }
    }

    /// The next id, or `None` once `u64::MAX` has been issued
    pub fn next_id(&mut self) -> Option<TransactionId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.checked_add(1)?);
        Some(TransactionId(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = IdGenerator::default();
        let issued: Vec<_> = (0..1000).map(|_| ids.next_id().unwrap()).collect();

        assert!(issued.windows(2).all(|w| w[0] < w[1]));
        let unique: HashSet<_> = issued.iter().collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn test_generator_respects_floor() {
        let far_future = TransactionId::from_raw(u64::MAX / 2);
        let mut ids = IdGenerator::starting_after(Some(far_future));
        assert_eq!(ids.next_id().unwrap().as_u64(), u64::MAX / 2 + 1);
    }

    #[test]
    fn test_generator_exhausted_at_max() {
        let mut ids = IdGenerator::starting_after(Some(TransactionId::from_raw(u64::MAX - 1)));
        assert_eq!(ids.next_id(), Some(TransactionId::from_raw(u64::MAX)));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn test_id_is_time_based() {
        let before = Utc::now().timestamp_millis() as u64;
        let id = IdGenerator::default().next_id().unwrap();
        assert!(id.as_u64() >= before);
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<TransactionId>().unwrap(), TransactionId::from_raw(42));
        assert_eq!("txn-42".parse::<TransactionId>().unwrap(), TransactionId::from_raw(42));
        assert!("txn-abc".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let id = TransactionId::from_raw(1_771_718_400_000);
        assert_eq!(serde_json::to_string(&id).unwrap(), "1771718400000");
    }
}
