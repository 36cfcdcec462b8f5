//! Options resolved once per invocation, before any encoding work.

/// How the input bytes are rendered in the header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// A null-terminated `constexpr char[]` string literal.
    Text,

    /// A fixed-size `std::array<uint8_t, N>`.
    Binary,
}

/// Errors from [`EncodingOptions::new`].
#[derive(thiserror::Error, Debug)]
pub enum OptionsError {
    #[error("Identifier name must not be empty.")]
    EmptyIdentifier,
}

/// Settings for a single header generation.
///
/// Built once from the resolved CLI flags and never mutated afterwards.
///
/// The identifier is not checked for being a legal C++ identifier; it
/// is emitted as-is, both as the constant name and (upper-cased) as the
/// header guard. Only the empty string is rejected.
///
/// # Examples
///
/// ```
/// # use cpp_embed::*;
/// let options = EncodingOptions::new("data", Mode::Binary, true).unwrap();
/// assert_eq!(options.identifier(), "data");
/// assert_eq!(options.mode(), Mode::Binary);
/// assert!(options.use_header_guard());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EncodingOptions {
    identifier: String,
    mode: Mode,
    use_header_guard: bool,
}

impl EncodingOptions {
    pub fn new(
        identifier: impl Into<String>,
        mode: Mode,
        use_header_guard: bool,
    ) -> Result<Self, OptionsError> {
        let identifier = identifier.into();

        if identifier.is_empty() {
            return Err(OptionsError::EmptyIdentifier);
        }

        Ok(EncodingOptions {
            identifier,
            mode,
            use_header_guard,
        })
    }

    /// Name of the generated constant.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// `true` for an `#ifndef` guard, `false` for `#pragma once`.
    pub fn use_header_guard(&self) -> bool {
        self.use_header_guard
    }
}

#[test]
fn reject_empty_identifier() {
    assert!(matches!(
        EncodingOptions::new("", Mode::Text, false),
        Err(OptionsError::EmptyIdentifier),
    ));
}

#[test]
fn pass_through_unusual_identifiers() {
    // Not valid C++, but validation is out of scope.
    let options = EncodingOptions::new("1 bad name", Mode::Text, false).unwrap();
    assert_eq!(options.identifier(), "1 bad name");
}
