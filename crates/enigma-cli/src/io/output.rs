// crates/enigma-cli/src/io/output.rs

use std::io::{self, Write};

/// Write and flush, no newline.
pub fn write<W: Write>(stream: &mut W, s: &str) -> io::Result<()> {
    stream.write_all(s.as_bytes())?;
    stream.flush()
}

/// Write the bytes (if any) and a newline, then flush.
pub fn write_line_bytes<W: Write>(stream: &mut W, s: Option<&[u8]>) -> io::Result<()> {
    if let Some(b) = s {
        stream.write_all(b)?;
    }
    stream.write_all(b"\n")?;
    stream.flush()
}

pub fn write_line<W: Write>(stream: &mut W, s: Option<&str>) -> io::Result<()> {
    write_line_bytes(stream, s.map(str::as_bytes))
}
