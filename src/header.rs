//! Wrap an encoded body in a complete header document.

use std::fmt::Write;

use crate::encode::EncodedBody;
use crate::options::EncodingOptions;

/// Assemble the final header text.
///
/// The preamble is either an `#ifndef`/`#define` pair on the
/// upper-cased identifier, or `#pragma once`. Binary bodies pull in
/// `<array>` and `<cstdint>` for the declaration. The output is
/// byte-identical across calls with the same inputs.
///
/// # Examples
///
/// ```
/// # use cpp_embed::*;
/// let options = EncodingOptions::new("test_name", Mode::Text, true).unwrap();
/// let body = encode(b"abcdef", Mode::Text).unwrap();
///
/// assert_eq!(
///     assemble(&options, &body),
///     "#ifndef TEST_NAME\n#define TEST_NAME\n\n\
///      constexpr char test_name[] = \"abcdef\";\n\n#endif\n",
/// );
/// ```
pub fn assemble(options: &EncodingOptions, body: &EncodedBody) -> String {
    let identifier = options.identifier();
    let mut output = String::new();

    if options.use_header_guard() {
        let guard = identifier.to_uppercase();
        let _ = write!(output, "#ifndef {guard}\n#define {guard}\n\n");
    } else {
        output.push_str("#pragma once\n\n");
    }

    match body {
        EncodedBody::Text(literal) => {
            let _ = writeln!(output, "constexpr char {identifier}[] = \"{literal}\";");
        }

        EncodedBody::Binary { initializer, len } => {
            output.push_str("#include <array>\n#include <cstdint>\n\n");
            let _ = writeln!(
                output,
                "constexpr std::array<uint8_t, {len}> {identifier}{initializer};"
            );
        }
    }

    if options.use_header_guard() {
        output.push_str("\n#endif\n");
    }

    output
}
