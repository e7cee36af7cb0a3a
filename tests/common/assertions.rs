//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// Parse the array bytes out of a generated header
pub fn header_bytes(text: &str) -> Vec<u8> {
    text.lines()
        .skip_while(|l| !l.starts_with("const unsigned char"))
        .skip(1)
        .take_while(|l| *l != "};")
        .flat_map(|l| l.split(','))
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(|cell| {
            let hex = cell.strip_prefix("0x").expect("byte literal must start with 0x");
            u8::from_str_radix(hex, 16).expect("byte literal must be hex")
        })
        .collect()
}

/// Value of `#define <name> <value>` in a generated header
pub fn header_define(text: &str, name: &str) -> Option<u32> {
    let prefix = format!("#define {name} ");
    text.lines()
        .find_map(|l| l.strip_prefix(&prefix))
        .and_then(|v| v.trim().parse().ok())
}

/// Assert the header at `path` declares `name` with the given size and a
/// byte array of exactly ceil(width * height / 8) bytes.
pub fn assert_header(path: &Path, name: &str, width: u32, height: u32) -> Vec<u8> {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected header at {}: {e}", path.display()));
    let upper = name.to_ascii_uppercase();

    assert!(
        text.starts_with("#if defined(__AVR)\n"),
        "Header should start with the PROGMEM guard:\n{text}"
    );
    assert_eq!(header_define(&text, &format!("{upper}_WIDTH")), Some(width));
    assert_eq!(header_define(&text, &format!("{upper}_HEIGHT")), Some(height));
    assert!(
        text.contains(&format!("const unsigned char {name}[] PROGMEM = {{")),
        "Header should declare {name}:\n{text}"
    );

    let bytes = header_bytes(&text);
    assert_eq!(bytes.len(), (width * height).div_ceil(8) as usize);
    bytes
}

/// Assert `path` is a 1-bit PNG of the given size
pub fn assert_preview(path: &Path, width: u32, height: u32) {
    let data = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected preview at {}: {e}", path.display()));
    assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n", "Expected PNG signature");

    let decoded = image::load_from_memory(&data).unwrap().to_luma8();
    assert_eq!(decoded.dimensions(), (width, height));
    assert!(
        decoded.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255),
        "Preview should only contain black and white"
    );
}
