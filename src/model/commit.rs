use std::fmt;
use std::str::FromStr;

/// Length of a commit hash in bytes (SHA-1)
pub const HASH_LEN: usize = 20;

/// Number of hex characters shown for abbreviated hashes
pub const SHORT_LEN: usize = 7;

/// Fixed-size commit hash.
///
/// Ordering is bytewise, which matches lexicographic order of the hex form.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CommitId([u8; HASH_LEN]);

impl CommitId {
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Full lowercase hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Abbreviated hex form used in list rows
    pub fn short(&self) -> String {
        let mut s = self.to_hex();
        s.truncate(SHORT_LEN);
        s
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for CommitId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; HASH_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl From<git2::Oid> for CommitId {
    fn from(oid: git2::Oid) -> Self {
        let mut bytes = [0u8; HASH_LEN];
        let raw = oid.as_bytes();
        let n = raw.len().min(HASH_LEN);
        bytes[..n].copy_from_slice(&raw[..n]);
        Self(bytes)
    }
}

/// Committer time: an instant plus the offset it was recorded in
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct CommitTime {
    /// Seconds since the Unix epoch
    pub seconds: i64,
    /// Offset from UTC in minutes (display only)
    pub offset_minutes: i32,
}

impl CommitTime {
    pub fn new(seconds: i64, offset_minutes: i32) -> Self {
        Self { seconds, offset_minutes }
    }
}

/// A commit as read from the history source. Immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitNode {
    pub id: CommitId,
    /// Empty for roots, two or more for merges
    pub parents: Vec<CommitId>,
    pub author: String,
    /// First line of the message, trimmed
    pub subject: String,
    pub message: String,
    pub time: CommitTime,
}

impl CommitNode {
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Extract the subject line from a commit message
pub fn subject_line(message: &str) -> String {
    message.split('\n').next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let hex = "0123456789abcdef0123456789abcdef01234567";
        let id: CommitId = hex.parse().unwrap();
        assert_eq!(id.to_hex(), hex);
        assert_eq!(id.to_string(), hex);
        assert_eq!(id.short(), "0123456");
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!("xyz".parse::<CommitId>().is_err());
        assert!("abcd".parse::<CommitId>().is_err());
    }

    #[test]
    fn test_ordering_matches_hex_order() {
        let a: CommitId = "0f00000000000000000000000000000000000000".parse().unwrap();
        let b: CommitId = "a000000000000000000000000000000000000000".parse().unwrap();
        assert!(a < b);
        assert!(a.to_hex() < b.to_hex());
    }

    #[test]
    fn test_from_git_oid() {
        let oid = git2::Oid::from_str("89e5a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7").unwrap();
        let id = CommitId::from(oid);
        assert_eq!(id.to_hex(), oid.to_string());
    }

    #[test]
    fn test_subject_line() {
        assert_eq!(subject_line("Fix bug\n\nLong body"), "Fix bug");
        assert_eq!(subject_line("  padded  \r\nrest"), "padded");
        assert_eq!(subject_line(""), "");
    }
}
