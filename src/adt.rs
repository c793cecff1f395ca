//! L0: the capability every container in this crate shares.
//!
//! A handle is a plain `usize` in `1..=n`. `0` is the universal "none" handle:
//! it's always valid to pass, and containers return it to mean "no such handle".

use core::fmt::Write;

/// Base capability shared by every handle-indexed container.
///
/// `resize` is the destructive reallocation: contents are discarded. `expand` is
/// the content-preserving variant, a no-op when the requested size doesn't grow
/// the container. Implementers get `valid` for free from `n`.
pub trait Adt {
    /// Current handle capacity. Valid handles are `1..=n()`.
    fn n(&self) -> usize;

    /// True iff `h` is `0` (the none handle) or in `1..=n()`.
    fn valid(&self, h: usize) -> bool {
        h <= self.n()
    }

    /// Drop all contents and reallocate for capacity `size`.
    fn resize(&mut self, size: usize);

    /// Reallocate preserving contents, iff `size > n()`. No-op otherwise.
    fn expand(&mut self, size: usize);

    /// Return to the initial/empty state without changing `n`.
    fn clear(&mut self);
}

/// Render a handle the way every container's `to_string` does: lower-case
/// letters `a..z` when the whole space fits (`n <= 26`), decimal otherwise.
pub fn handle_to_string(h: usize, n: usize) -> alloc::string::String {
    let mut s = alloc::string::String::new();
    if h == 0 {
        s.push('-');
    } else if n <= 26 {
        let _ = write!(s, "{}", (b'a' + (h - 1) as u8) as char);
    } else {
        let _ = write!(s, "{}", h);
    }
    s
}

/// Parse a handle previously rendered by [`handle_to_string`]. Accepts either a
/// single lower-case letter (`a..z`) or a decimal integer.
pub fn handle_from_str(tok: &str) -> Option<usize> {
    let tok = tok.trim();
    if tok.is_empty() {
        return None;
    }
    if tok.len() == 1 {
        let c = tok.chars().next().unwrap();
        if c.is_ascii_lowercase() {
            return Some((c as u8 - b'a') as usize + 1);
        }
    }
    tok.parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_letters_under_27() {
        assert_eq!(handle_to_string(1, 12), "a");
        assert_eq!(handle_to_string(12, 12), "l");
    }

    #[test]
    fn renders_decimal_over_26() {
        assert_eq!(handle_to_string(27, 30), "27");
    }

    #[test]
    fn round_trips() {
        assert_eq!(handle_from_str("a"), Some(1));
        assert_eq!(handle_from_str("27"), Some(27));
        assert_eq!(handle_from_str(""), None);
    }
}
