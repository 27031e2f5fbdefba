//! Value-to-text coercion used by `Printer::print`.

use std::fmt::{self, Display, Write};

/// A sequence of Unicode code points, rendered as the string it spells.
///
/// ```
/// use latchprint::Chars;
///
/// let word = ['r', 'u', 's', 't'];
/// assert_eq!(Chars::from(&word[..]).to_string(), "rust");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chars<'a>(pub &'a [char]);

impl<'a> From<&'a [char]> for Chars<'a> {
    fn from(chars: &'a [char]) -> Self {
        Chars(chars)
    }
}

impl<'a> From<&'a Vec<char>> for Chars<'a> {
    fn from(chars: &'a Vec<char>) -> Self {
        Chars(chars.as_slice())
    }
}

impl Display for Chars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            f.write_char(*c)?;
        }
        Ok(())
    }
}

/// Render a value the way `print` writes it.
///
/// A `char` renders as the character itself, never its numeric code; wrap a
/// code point sequence in [`Chars`] to render the string it forms; every
/// other value uses its `Display` representation.
pub fn to_text(value: &dyn Display) -> String {
    value.to_string()
}
