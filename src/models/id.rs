//! ID generation utilities
//!
//! This module provides functions for generating identifiers:
//! - session ids for transfers, legs, main transports and additional travel
//! - prefixed segment ids for flat segments created from legacy records
//!
//! Both combine the wall-clock time in milliseconds with a random base-36
//! suffix taken from a v4 UUID, so ids stay unique within an editing session without a
//! shared counter.

use crate::constants::{ID_SUFFIX_LEN, SEGMENT_ID_PREFIX, SEGMENT_ID_SUFFIX_LEN};

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random base-36 suffix drawn from the bits of a v4 UUID
fn random_suffix(len: usize) -> String {
    let mut bits = uuid::Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(len);
    for _ in 0..len {
        // Index is always < 36
        #[allow(clippy::cast_possible_truncation)]
        let digit = (bits % 36) as usize;
        suffix.push(char::from(BASE36_DIGITS[digit]));
        bits /= 36;
    }
    suffix
}

/// Generate a new id for an entity created in the editing session
#[must_use]
pub fn generate_id() -> String {
    format!(
        "{}-{}",
        chrono::Utc::now().timestamp_millis(),
        random_suffix(ID_SUFFIX_LEN)
    )
}

/// Generate a new id for a flat travel segment
#[must_use]
pub fn generate_segment_id() -> String {
    format!(
        "{SEGMENT_ID_PREFIX}-{}-{}",
        chrono::Utc::now().timestamp_millis(),
        random_suffix(SEGMENT_ID_SUFFIX_LEN)
    )
}

/// Keep an existing id, or generate one if it is missing or blank
#[must_use]
pub fn id_or_generate(existing: Option<&str>) -> String {
    match existing {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => generate_id(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_produces_different_values() {
        let id1 = generate_id();
        let id2 = generate_id();
        let id3 = generate_id();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        let (millis, suffix) = id.split_once('-').expect("has separator");
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
    }

    #[test]
    fn test_generate_segment_id_prefix() {
        let id = generate_segment_id();
        assert!(id.starts_with("segment-"));
        let suffix = id.rsplit('-').next().expect("has suffix");
        assert_eq!(suffix.len(), SEGMENT_ID_SUFFIX_LEN);
    }

    #[test]
    fn test_generate_many_unique_ids() {
        let mut ids = HashSet::new();
        let count = 1_000;

        for _ in 0..count {
            ids.insert(generate_id());
        }

        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_id_or_generate_keeps_existing() {
        assert_eq!(id_or_generate(Some("abc")), "abc");
        assert_ne!(id_or_generate(Some("  ")), "  ");
        assert!(!id_or_generate(None).is_empty());
    }
}
