//! Turn raw bytes into the literal fragment of the header.
//!
//! Both modes are single-pass pure transformations: identical input
//! always produces identical output.

use std::fmt::Write;
use std::str;

use crate::options::Mode;

/// Escape sequences required inside a C++ string literal.
///
/// Covers the full simple-escape set. `?` is included so that the
/// literal can never form a trigraph before C++17.
const ESCAPES: [(char, &str); 11] = [
    ('\'', "\\'"),
    ('"', "\\\""),
    ('?', "\\?"),
    ('\\', "\\\\"),
    ('\x07', "\\a"),
    ('\x08', "\\b"),
    ('\x0c', "\\f"),
    ('\n', "\\n"),
    ('\r', "\\r"),
    ('\t', "\\t"),
    ('\x0b', "\\v"),
];

/// Errors from [`encode`].
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("Input is not valid UTF-8: {0}")]
    InvalidText(#[from] str::Utf8Error),
}

/// The literal-syntax fragment for one header.
///
/// For binary mode it carries the element count, needed for the
/// fixed-size array declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum EncodedBody {
    /// Contents of a string literal, without the surrounding quotes.
    Text(String),

    /// A brace-enclosed list of decimal byte values.
    Binary { initializer: String, len: usize },
}

/// Encode `bytes` according to `mode`.
///
/// In text mode the bytes must be valid UTF-8; characters from the
/// escape table are replaced by their backslash sequences, and
/// unescaping the result recovers the input byte-for-byte. In binary
/// mode every byte is emitted as a decimal value, in order.
///
/// # Examples
///
/// ```
/// # use cpp_embed::*;
/// let body = encode(b"a\tb", Mode::Text).unwrap();
/// assert_eq!(body, EncodedBody::Text("a\\tb".into()));
///
/// let body = encode(b"a\tb", Mode::Binary).unwrap();
/// assert_eq!(
///     body,
///     EncodedBody::Binary { initializer: "{97, 9, 98}".into(), len: 3 },
/// );
/// ```
pub fn encode(bytes: &[u8], mode: Mode) -> Result<EncodedBody, EncodeError> {
    match mode {
        Mode::Text => Ok(EncodedBody::Text(escape(str::from_utf8(bytes)?))),

        Mode::Binary => {
            let mut initializer = String::with_capacity(bytes.len() * 5 + 2);
            initializer.push('{');

            for (n, byte) in bytes.iter().enumerate() {
                if n > 0 {
                    initializer.push_str(", ");
                }
                let _ = write!(&mut initializer, "{byte}");
            }

            initializer.push('}');

            Ok(EncodedBody::Binary {
                initializer,
                len: bytes.len(),
            })
        }
    }
}

/// Escape `text` for use inside a C++ string literal.
fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for c in text.chars() {
        match ESCAPES.iter().find(|(raw, _)| *raw == c) {
            Some((_, sequence)) => output.push_str(sequence),
            None => output.push(c),
        }
    }

    output
}
