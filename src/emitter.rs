//! Single-line JSON output
//!
//! Results are written as one compact line with `", "` and `": "`
//! separators and every non-ASCII character escaped as `\uXXXX`, the
//! layout consumers of the mock already parse.

use crate::backend::ResultSource;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};
use tracing::debug;

/// Compact, ASCII-only JSON with a space after every separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                // Astral characters become a surrogate pair.
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

fn serialize_into<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    let mut serializer = serde_json::Serializer::with_formatter(writer, SpacedFormatter);
    value.serialize(&mut serializer).map_err(|e| {
        if e.is_io() {
            Error::Io(e.into())
        } else {
            Error::Serialization(e)
        }
    })
}

pub fn to_line<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    serialize_into(&mut buf, value)?;

    String::from_utf8(buf)
        .map_err(|e| Error::Serialization(<serde_json::Error as serde::ser::Error>::custom(e)))
}

/// Writes `value` followed by a newline and flushes.
pub fn write_line<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    serialize_into(writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn emit<S: ResultSource, W: Write>(source: &S, writer: &mut W) -> Result<()> {
    let result = source.produce();
    debug!(
        "Emitting {} result from {} backend",
        if result.is_ok() { "success" } else { "error" },
        source.name()
    );
    write_line(writer, &result)
}
