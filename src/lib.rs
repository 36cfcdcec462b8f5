mod encode;
mod header;

pub mod options;

pub use encode::{encode, EncodeError, EncodedBody};
pub use header::assemble;
pub use options::{EncodingOptions, Mode, OptionsError};

/// Encode `bytes` and wrap the result in a complete header document.
///
/// This is the whole pipeline: the returned string is what the CLI
/// writes verbatim to its output.
///
/// # Examples
///
/// ```
/// # use cpp_embed::*;
/// let options = EncodingOptions::new("test_name", Mode::Text, false).unwrap();
/// let header = render(b"abcdef", &options).unwrap();
///
/// assert_eq!(
///     header,
///     "#pragma once\n\nconstexpr char test_name[] = \"abcdef\";\n",
/// );
/// ```
pub fn render(bytes: &[u8], options: &EncodingOptions) -> Result<String, EncodeError> {
    let body = encode(bytes, options.mode())?;
    Ok(assemble(options, &body))
}
