use cpp_embed::{assemble, encode, render, EncodedBody, EncodingOptions, Mode};

fn options(mode: Mode, use_header_guard: bool) -> EncodingOptions {
    EncodingOptions::new("test_name", mode, use_header_guard).unwrap()
}

#[test]
fn text_header_without_guard() {
    let header = render(b"abcdef", &options(Mode::Text, false)).unwrap();
    assert_eq!(
        header,
        "#pragma once\n\nconstexpr char test_name[] = \"abcdef\";\n",
    );
}

#[test]
fn text_header_with_guard() {
    let header = render(b"abcdef", &options(Mode::Text, true)).unwrap();
    assert_eq!(
        header,
        "#ifndef TEST_NAME\n#define TEST_NAME\n\n\
         constexpr char test_name[] = \"abcdef\";\n\n#endif\n",
    );
}

#[test]
fn binary_header_with_guard() {
    let header = render(b"abcdef", &options(Mode::Binary, true)).unwrap();
    assert_eq!(
        header,
        "#ifndef TEST_NAME\n#define TEST_NAME\n\n\
         #include <array>\n#include <cstdint>\n\n\
         constexpr std::array<uint8_t, 6> test_name{97, 98, 99, 100, 101, 102};\n\
         \n#endif\n",
    );
}

#[test]
fn binary_header_without_guard() {
    let header = render(b"abcdef", &options(Mode::Binary, false)).unwrap();
    assert_eq!(
        header,
        "#pragma once\n\n\
         #include <array>\n#include <cstdint>\n\n\
         constexpr std::array<uint8_t, 6> test_name{97, 98, 99, 100, 101, 102};\n",
    );
}

#[test]
fn control_characters_appear_escaped() {
    let header = render(b"a\tb\tcde\tfg", &options(Mode::Text, false)).unwrap();

    assert_eq!(
        header,
        "#pragma once\n\nconstexpr char test_name[] = \"a\\tb\\tcde\\tfg\";\n",
    );

    // The backslash sequence is in the output; the raw byte is not.
    assert!(!header.contains('\t'));

    let header = render(b"one line\ntwo lines", &options(Mode::Text, false)).unwrap();
    assert_eq!(
        header,
        "#pragma once\n\nconstexpr char test_name[] = \"one line\\ntwo lines\";\n",
    );
}

#[test]
fn deterministic_output() {
    let bytes = b"some \"quoted\" input\nwith two lines";

    for opts in [options(Mode::Text, true), options(Mode::Binary, false)] {
        assert_eq!(render(bytes, &opts).unwrap(), render(bytes, &opts).unwrap());
    }
}

#[test]
fn text_mode_rejects_invalid_utf8() {
    let err = render(b"\xc3\x28", &options(Mode::Text, false)).unwrap_err();
    assert!(err.to_string().contains("UTF-8"));

    // The same bytes are fine in binary mode.
    render(b"\xc3\x28", &options(Mode::Binary, false)).unwrap();
}

#[test]
fn binary_element_count_matches_declared_size() {
    for len in [0usize, 1, 2, 255, 4096] {
        let bytes: Vec<u8> = (0..len).map(|n| n as u8).collect();

        let EncodedBody::Binary { initializer, len: count } =
            encode(&bytes, Mode::Binary).unwrap()
        else {
            unreachable!();
        };

        assert_eq!(count, len);

        let entries = initializer
            .trim_start_matches('{')
            .trim_end_matches('}')
            .split(", ")
            .filter(|e| !e.is_empty())
            .count();
        assert_eq!(entries, len);

        let body = EncodedBody::Binary { initializer, len: count };
        let header = assemble(&options(Mode::Binary, false), &body);
        assert!(header.contains(&format!("std::array<uint8_t, {len}>")));
    }
}
