//! Record identifier generation
//!
//! Widget records carry string identifiers derived from the creation
//! timestamp in milliseconds. Uniqueness within a store is an invariant,
//! so a collision (two records created in the same millisecond) bumps
//! the value until it is free.

use chrono::Utc;

/// Generate a fresh identifier, unique among `existing`
pub fn next_record_id<'a>(existing: impl Iterator<Item = &'a str>) -> String {
    let taken: Vec<&str> = existing.collect();
    let mut candidate = Utc::now().timestamp_millis();
    while taken.iter().any(|id| *id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_numeric_string() {
        let id = next_record_id(std::iter::empty());
        assert!(id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_collision_bumps() {
        let now = Utc::now().timestamp_millis();
        // Occupy a wide window around now so the fresh id must be bumped
        // past every taken value.
        let taken: Vec<String> = (now - 5..now + 50).map(|n| n.to_string()).collect();
        let id = next_record_id(taken.iter().map(|s| s.as_str()));
        assert!(!taken.contains(&id));
    }
}
