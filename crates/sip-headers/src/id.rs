//! Unique-token source used for branches, tags and initial sequence numbers.
//!
//! All functions are safe to call from any thread: `uuid` draws from the OS
//! generator and `rand::thread_rng` is thread-local.

use rand::Rng;
use uuid::Uuid;

use crate::defaults::MAGIC_COOKIE;

/// Returns `prefix` followed by 32 lowercase hex digits of a fresh v4 UUID.
pub fn new_token(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}

/// Returns a random integer in `1..=i32::MAX`.
pub fn new_positive_i32() -> i32 {
    rand::thread_rng().gen_range(1..=i32::MAX)
}

/// Initial CSeq value. RFC 3261 Section 8.1.1.5 requires it to be below 2**31.
pub fn new_sequence() -> u32 {
    new_positive_i32() as u32
}

/// A branch parameter carrying the RFC 3261 magic cookie.
pub fn new_branch() -> String {
    new_token(MAGIC_COOKIE)
}

/// A dialog tag for To/From headers.
pub fn new_tag() -> String {
    // RFC 3261 Section 19.3 asks for at least 32 random bits
    let mut tag = new_token("");
    tag.truncate(16);
    tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::is_token;
    use std::collections::HashSet;

    #[test]
    fn test_branch_has_magic_cookie() {
        let branch = new_branch();
        assert!(branch.starts_with("z9hG4bK"));
        assert!(is_token(&branch));
        assert_eq!(branch.len(), MAGIC_COOKIE.len() + 32);
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<String> = (0..256).map(|_| new_token("x")).collect();
        assert_eq!(tokens.len(), 256);
    }

    #[test]
    fn test_sequence_range() {
        for _ in 0..1000 {
            let seq = new_sequence();
            assert!(seq >= 1 && seq <= i32::MAX as u32);
        }
    }

    #[test]
    fn test_tag_is_token() {
        let tag = new_tag();
        assert_eq!(tag.len(), 16);
        assert!(is_token(&tag));
    }
}
