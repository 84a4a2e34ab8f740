//! Reverse-order key comparator for the Niihau reverse trie.
//!
//! Keys are compared from the tail end: the two primitives below are the only
//! place in the crate that know how to order and how to match byte strings.
//! Both model a DNS-like suffix structure, where `"example.com"` and
//! `"www.example.com"` share ancestry because they share a tail.

use std::cmp::Ordering;

/// Sentinel used to conceptually left-pad the shorter of two keys so that a
/// total order is well defined even when the keys differ in length.
const PAD: u8 = b' ';

/// Default maximum length a single key (the full, reconstructed string) may
/// have. Individual trie instances may configure a different ceiling via
/// [`crate::config::capacity::CapacityConfig::max_key_len`].
pub const DEFAULT_MAX_KEY: usize = 64;

/// Defines the total order over keys used to sort sibling lists.
///
/// The shorter of `a`/`b` is conceptually left-padded with ASCII space up to
/// `max(a.len(), b.len())`, then the two equal-length strings are compared
/// from their last byte back to their first. Returns the comparison result
/// along with the padded length `L` that was compared over.
///
/// # Panics
///
/// Debug-asserts that neither input is empty; both are undefined on empty
/// slices per the comparator's contract.
pub fn compare(a: &[u8], b: &[u8]) -> (Ordering, usize) {
    debug_assert!(!a.is_empty(), "compare() is undefined on an empty key");
    debug_assert!(!b.is_empty(), "compare() is undefined on an empty key");

    let len = a.len().max(b.len());
    let mut ord = Ordering::Equal;
    for i in 0..len {
        let av = byte_from_tail(a, len, i).unwrap_or(PAD);
        let bv = byte_from_tail(b, len, i).unwrap_or(PAD);
        if av != bv {
            ord = av.cmp(&bv);
            break;
        }
    }
    (ord, len)
}

/// Returns the length of the longest common right-aligned substring of `a`
/// and `b`, and whether that common substring spans the *entire* shorter
/// operand (`Ordering::Equal`) or differs somewhere within it.
///
/// `L = min(a.len(), b.len())`; the two operands' last `L` bytes are compared
/// right-to-left. `Ordering::Equal` means one is a right-suffix of the other
/// over `L` bytes (the most common case while descending the trie); a
/// non-equal ordering reports the byte-wise sign of the first mismatch found,
/// scanning from the tail inward, purely so callers can distinguish "matched"
/// from "did not match" without a second pass.
pub fn suffix_match(a: &[u8], b: &[u8]) -> (Ordering, usize) {
    debug_assert!(!a.is_empty(), "suffix_match() is undefined on an empty key");
    debug_assert!(!b.is_empty(), "suffix_match() is undefined on an empty key");

    let len = a.len().min(b.len());
    let a_tail = &a[a.len() - len..];
    let b_tail = &b[b.len() - len..];

    let mut ord = Ordering::Equal;
    for i in (0..len).rev() {
        if a_tail[i] != b_tail[i] {
            ord = a_tail[i].cmp(&b_tail[i]);
            break;
        }
    }
    (ord, len)
}

/// Length of the longest common right-aligned (tail) run shared by `a` and
/// `b`. Unlike [`suffix_match`], this does not stop at `min(a.len(), b.len())`
/// expecting a full match — it simply counts matching trailing bytes and
/// stops at the first mismatch (or when one operand is exhausted). Used by
/// the insert path to find a partial shared suffix worth splitting out into
/// its own node, even when the two keys don't match over their entire
/// overlap.
pub fn common_suffix_len(a: &[u8], b: &[u8]) -> usize {
    let max = a.len().min(b.len());
    let mut n = 0;
    while n < max && a[a.len() - 1 - n] == b[b.len() - 1 - n] {
        n += 1;
    }
    n
}

/// Reads the byte at position `i` counting from the tail of a conceptually
/// `padded_len`-byte string, where `slice` is right-aligned within that
/// padded length. Returns `None` for positions that fall in the padding.
fn byte_from_tail(slice: &[u8], padded_len: usize, i: usize) -> Option<u8> {
    // Position from the tail: index 0 is the last byte of the padded string.
    let tail_index = padded_len - 1 - i;
    let pad = padded_len - slice.len();
    if tail_index < pad {
        None
    } else {
        Some(slice[tail_index - pad])
    }
}
