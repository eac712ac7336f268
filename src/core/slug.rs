//! Identity slugs and random tokens.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::core::types::Slug;

/// Minimum letter count of a [`random_token`].
pub const TOKEN_MIN_LETTERS: usize = 10;

/// Maximum letter count of a [`random_token`].
pub const TOKEN_MAX_LETTERS: usize = 30;

/// Derive the registry file stem for a key owner.
///
/// Lowercases both parts, collapses whitespace and `-` runs into a single
/// `-`, and keeps `[a-z0-9@._+]`. Any other character is replaced with `-`
/// and marks the slug lossy; lossy slugs get an 8-digit hash suffix of the
/// normalized identity so that e.g. `Zoë` and `Zoé` stay apart.
///
/// ```
/// use openpaas_secrets::core::slug::slug;
///
/// assert_eq!(slug("John Doe", "john@doe.com"), "john-doe-john@doe.com");
/// assert_eq!(slug("john  DOE ", "John@Doe.com"), "john-doe-john@doe.com");
/// ```
pub fn slug(name: &str, email: &str) -> Slug {
    let normalized = format!("{} {}", name.trim(), email.trim()).to_lowercase();

    let mut out = String::with_capacity(normalized.len());
    let mut lossy = false;
    let mut pending_dash = false;

    for ch in normalized.chars() {
        let keep = match ch {
            'a'..='z' | '0'..='9' | '@' | '.' | '_' | '+' => true,
            c if c.is_whitespace() || c == '-' => false,
            _ => {
                lossy = true;
                false
            }
        };

        if keep {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }

    if lossy {
        let digest = Sha256::digest(normalized.as_bytes());
        let hex = format!("{:x}", digest);
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(&hex[..8]);
    }

    out
}

/// Produce a disposable, human-readable name.
///
/// Lowercase words separated by single spaces; the letter count (spaces
/// excluded) is between [`TOKEN_MIN_LETTERS`] and [`TOKEN_MAX_LETTERS`].
pub fn random_token() -> String {
    let mut rng = rand::thread_rng();
    let letters = rng.gen_range(TOKEN_MIN_LETTERS..=TOKEN_MAX_LETTERS);

    let mut token = String::with_capacity(letters + letters / 4);
    let mut word_len = 0;
    let mut next_break = rng.gen_range(4..=8);

    for i in 0..letters {
        if word_len == next_break && i + 1 < letters {
            token.push(' ');
            word_len = 0;
            next_break = rng.gen_range(4..=8);
        }
        token.push(rng.gen_range(b'a'..=b'z') as char);
        word_len += 1;
    }

    token
}
