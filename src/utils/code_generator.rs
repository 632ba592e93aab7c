//! Short code generation.

use rand::{Rng, distr::Alphanumeric};

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Path segments served by fixed routes; a code equal to one would never resolve.
const RESERVED_CODES: &[&str] = &["health", "ping", "links"];

/// Returns `true` if `code` collides with a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Generates a random alphanumeric short code of [`CODE_LENGTH`] characters.
///
/// Each call draws independently; uniqueness is enforced by the store, not here.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    loop {
        let code: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(CODE_LENGTH)
            .map(char::from)
            .collect();

        if !is_reserved(&code) {
            return code;
        }
    }
}
