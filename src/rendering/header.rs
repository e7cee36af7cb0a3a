//! C header emission for packed bitmaps.
//!
//! The generated header is usable from AVR sketches (data lands in flash via
//! `PROGMEM`) and from any other C or C++ toolchain, where `PROGMEM` expands
//! to nothing.

use mono_dither::Bitmap;
use std::io::{self, Write};
use std::path::Path;

const BYTES_PER_LINE: usize = 16;

/// Name used when nothing usable remains after sanitizing
const FALLBACK_IDENTIFIER: &str = "image";

/// Turn an arbitrary name into a valid C identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_` and a leading digit gets a
/// `_` prefix.
pub fn sanitize_identifier(raw: &str) -> String {
    let mut ident: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Array name for an input file: its stem, sanitized
pub fn identifier_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    sanitize_identifier(&stem)
}

/// Write `bitmap` as a C header declaring the array `name`.
///
/// `name` must already be a valid identifier (see [`sanitize_identifier`]).
pub fn write_header<W: Write>(bitmap: &Bitmap, name: &str, writer: &mut W) -> io::Result<()> {
    let upper = name.to_ascii_uppercase();

    writeln!(writer, "#if defined(__AVR)")?;
    writeln!(writer, "  #include <avr/pgmspace.h>")?;
    writeln!(writer, "#else")?;
    writeln!(writer, "  #define PROGMEM")?;
    writeln!(writer, "#endif")?;
    writeln!(writer)?;
    writeln!(writer, "#define {upper}_WIDTH {}", bitmap.width())?;
    writeln!(writer, "#define {upper}_HEIGHT {}", bitmap.height())?;
    writeln!(writer)?;
    writeln!(writer, "const unsigned char {name}[] PROGMEM = {{")?;
    for line in bitmap.bytes().chunks(BYTES_PER_LINE) {
        let cells: Vec<String> = line.iter().map(|b| format!("0x{b:02x},")).collect();
        writeln!(writer, "  {}", cells.join(" "))?;
    }
    writeln!(writer, "}};")?;
    Ok(())
}
