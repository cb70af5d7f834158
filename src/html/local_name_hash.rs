//! All known tag names contain only ASCII alpha characters
//! and digits from 1 to 6 (in numbered header tags, i.e. <h1> - <h6>).
//! Considering that tag names are case insensitive we have only
//! 26 + 6 = 32 characters. Thus, single character can be encoded in
//! 5 bits and we can fit up to 64 / 5 ≈ 12 characters in a 64-bit
//! integer. This is enough to encode all known tag names, so
//! we can look up tag kinds by an integer instead of hashing and
//! comparing case-folded strings.
//!
//! Numbers from 0 to 5 are reserved for digits from 1 to 6 and numbers
//! from 6 to 31 for ASCII alphas. Otherwise, if we use numbers from 0 to 25
//! for ASCII alphas we'll have an ambiguity for repetitive `a` characters:
//! both `a`, `aaa` and even `aaaaa` will give us 0 as a hash. It's still a case
//! for digits, so names that start with a digit (e.g. `<1li>`) invalidate the
//! hash. No known tag name starts with a digit.
//!
//! Custom component names (`<svelte:head>`, `<my-widget>`) that
//! contain characters outside of this alphabet can't be hashed and, thus, are
//! never looked up in the known tag table.

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct LocalNameHash(Option<u64>);

impl LocalNameHash {
    #[inline]
    pub fn new() -> Self {
        LocalNameHash(Some(0))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Appends a character to the hash. Characters outside of the hash
    /// alphabet, as well as names that don't fit into 64 bits, invalidate it.
    #[inline]
    pub fn update(&mut self, ch: char) {
        self.0 = self.0.and_then(|h| {
            // NOTE: a leading `1` is encoded as 0b00000 and would leave no
            // trace in the hash.
            if h == 0 && ch.is_ascii_digit() {
                return None;
            }

            // NOTE: the first character is never encoded as zero, so a non-zero
            // top 5 bits mean that there is no room left.
            if h >> (64 - 5) != 0 {
                return None;
            }

            char_code(ch).map(|code| (h << 5) | code)
        });
    }
}

#[inline]
fn char_code(ch: char) -> Option<u64> {
    match ch {
        // NOTE: the 0x1F mask maps both cases of an ASCII alpha to 1..=26,
        // the codes for alphas start right after the 6 digit codes.
        'a'..='z' | 'A'..='Z' => Some((u64::from(ch) & 0x1F) + 5),
        // NOTE: the 0x0F mask maps digits to 1..=6, which become 0..=5.
        '1'..='6' => Some((u64::from(ch) & 0x0F) - 1),
        _ => None,
    }
}

impl From<&str> for LocalNameHash {
    #[inline]
    fn from(string: &str) -> Self {
        let mut hash = LocalNameHash::new();

        for ch in string.chars() {
            hash.update(ch);
        }

        hash
    }
}
