//! Greedy character wrapping
//!
//! Splits text into lines that fit a pixel budget. Breaks may fall anywhere
//! between two characters; there is no word-boundary handling and no
//! hyphenation.
//!
//! Each line is the longest prefix of the remaining text whose measured
//! width fits, looking up to [`OVERFLOW_LOOKAHEAD`] characters past an
//! overflowing prefix in case a longer one kerns back into the budget. A
//! single character that is wider than the budget on its own is still
//! emitted as a line of its own, so wrapping always makes progress.

use core::iter::FusedIterator;

/// Consecutive overflowing prefixes measured before a line is closed
pub const OVERFLOW_LOOKAHEAD: usize = 4;

/// Wrap `text` into lines no wider than `max_width` pixels
///
/// `width_of` measures a candidate line. The returned iterator is lazy and
/// borrows `text`; clone it to walk the lines again.
///
/// # Panics
///
/// Panics if `max_width` is zero.
pub fn wrap<F>(text: &str, max_width: u32, width_of: F) -> Wrap<'_, F>
where
    F: Fn(&str) -> u32,
{
    assert!(max_width > 0, "wrap width must be positive");
    Wrap {
        rest: text,
        max_width,
        width_of,
    }
}

/// Iterator over wrapped lines, see [`wrap`]
#[derive(Clone)]
pub struct Wrap<'a, F> {
    rest: &'a str,
    max_width: u32,
    width_of: F,
}

impl<'a, F> Wrap<'a, F>
where
    F: Fn(&str) -> u32,
{
    /// Byte length of the next line
    ///
    /// Widths under kerning are not assumed to grow monotonically with
    /// length, so a few prefixes past the first overflow are still measured.
    /// Costs at most line length plus [`OVERFLOW_LOOKAHEAD`] measurements.
    fn next_break(&self) -> usize {
        let mut chars = self.rest.char_indices();
        let first = match chars.next() {
            Some((_, ch)) => ch.len_utf8(),
            None => return 0,
        };

        let mut end = first;
        let mut overflowing = 0;
        for (idx, ch) in chars {
            let candidate = idx + ch.len_utf8();
            if (self.width_of)(&self.rest[..candidate]) <= self.max_width {
                end = candidate;
                overflowing = 0;
            } else {
                overflowing += 1;
                if overflowing == OVERFLOW_LOOKAHEAD {
                    break;
                }
            }
        }
        end
    }
}

impl<'a, F> Iterator for Wrap<'a, F>
where
    F: Fn(&str) -> u32,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (line, rest) = self.rest.split_at(self.next_break());
        self.rest = rest;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (1, Some(self.rest.chars().count()))
        }
    }
}

impl<'a, F> FusedIterator for Wrap<'a, F> where F: Fn(&str) -> u32 {}
