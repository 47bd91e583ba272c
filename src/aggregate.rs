//! Aggregators that fold extracted records into a lookup table.
//!
//! Each pipeline plugs one `Aggregator` into the shared executor. The
//! aggregator decides which fields a record must carry and how the
//! accumulated values are serialized.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::SkipReason;
use crate::record::Record;

/// Accumulates records one at a time.
pub trait Aggregator {
    /// Serialized form written once the scan is complete.
    type Output: Serialize;

    /// Fold a record in, or say why it contributes nothing.
    fn process(&mut self, record: &Record) -> Result<(), SkipReason>;

    /// Number of distinct entries collected so far.
    fn len(&self) -> usize;

    /// The display name of this aggregator.
    fn name(&self) -> &str;

    /// Consume the aggregator, producing the output value.
    fn finish(self) -> Self::Output;
}

/// Lowercase username -> full name.
///
/// A later record with the same lowercase username replaces the earlier
/// name. Keys serialize in sorted order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UsernameMapping {
    entries: BTreeMap<String, String>,
}

impl UsernameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, username: &str) -> Option<&str> {
        self.entries.get(username).map(String::as_str)
    }
}

impl Aggregator for UsernameMapping {
    type Output = BTreeMap<String, String>;

    fn process(&mut self, record: &Record) -> Result<(), SkipReason> {
        let name = record.name();
        let username = record.username().to_lowercase();
        if username.is_empty() {
            return Err(SkipReason::MissingUsername);
        }
        if name.is_empty() {
            return Err(SkipReason::MissingName);
        }
        self.entries.insert(username, name.to_string());
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn name(&self) -> &str {
        "username mapping"
    }

    fn finish(self) -> Self::Output {
        self.entries
    }
}

/// Unique usernames, case preserved, sorted ascending on output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UsernameSet {
    usernames: BTreeSet<String>,
}

impl UsernameSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for UsernameSet {
    type Output = Vec<String>;

    fn process(&mut self, record: &Record) -> Result<(), SkipReason> {
        let username = record.username();
        if username.is_empty() {
            return Err(SkipReason::MissingUsername);
        }
        self.usernames.insert(username.to_string());
        Ok(())
    }

    fn len(&self) -> usize {
        self.usernames.len()
    }

    fn name(&self) -> &str {
        "username set"
    }

    fn finish(self) -> Self::Output {
        // BTreeSet iterates in ascending order
        self.usernames.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(line: &str) -> Record {
        Record::parse(line).unwrap()
    }

    #[test]
    fn test_mapping_lowercases_key() {
        let mut m = UsernameMapping::new();
        m.process(&rec("101 | Jane Doe | BTech | CSE | HostelA | JDoe123 | F"))
            .unwrap();
        assert_eq!(m.get("jdoe123"), Some("Jane Doe"));
        assert_eq!(m.get("JDoe123"), None);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_mapping_last_write_wins() {
        let mut m = UsernameMapping::new();
        m.process(&rec("1 | First Name | P | D | H | ABC | M")).unwrap();
        m.process(&rec("2 | Second Name | P | D | H | abc | M")).unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("abc"), Some("Second Name"));
    }

    #[test]
    fn test_mapping_requires_name_and_username() {
        let mut m = UsernameMapping::new();
        assert_eq!(
            m.process(&rec("1 |   | P | D | H | abc | M")),
            Err(SkipReason::MissingName)
        );
        assert_eq!(
            m.process(&rec("1 | Name | P | D | H |   | M")),
            Err(SkipReason::MissingUsername)
        );
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn test_set_keeps_case_and_dedups() {
        let mut s = UsernameSet::new();
        for line in [
            "1 | A | P | D | H | zed | M",
            "2 | B | P | D | H | Alpha | F",
            "3 | C | P | D | H | zed | M",
            "4 | D | P | D | H | alpha | F",
        ] {
            s.process(&rec(line)).unwrap();
        }
        assert_eq!(s.len(), 3);
        assert_eq!(s.finish(), vec!["Alpha", "alpha", "zed"]);
    }

    #[test]
    fn test_set_ignores_empty_name() {
        let mut s = UsernameSet::new();
        s.process(&rec("1 |   | P | D | H | jd | M")).unwrap();
        assert_eq!(
            s.process(&rec("1 | Name | P | D | H |    | M")),
            Err(SkipReason::MissingUsername)
        );
        assert_eq!(s.finish(), vec!["jd"]);
    }

    #[test]
    fn test_mapping_output_sorted_by_key() {
        let mut m = UsernameMapping::new();
        m.process(&rec("1 | Zoe | P | D | H | zoe | F")).unwrap();
        m.process(&rec("2 | Adam | P | D | H | adam | M")).unwrap();
        let keys: Vec<_> = m.finish().into_keys().collect();
        assert_eq!(keys, vec!["adam", "zoe"]);
    }
}
