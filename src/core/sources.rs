//! Best-effort reading of project source files
//!
//! Sources feed prompt templates only, so a missing or unreadable file is
//! replaced with a placeholder instead of aborting the consultation.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

use crate::utils::format::truncate_chars;

pub const MISSING_FILE_PLACEHOLDER: &str = "Fichier non trouvé";

pub const LIQUID_PARTICLES: &str = "src/components/LiquidParticles.jsx";
pub const LIQUID_MORPHING: &str = "src/components/LiquidMorphing.jsx";
pub const APP_COMPONENT: &str = "src/App.jsx";
pub const APP_STYLESHEET: &str = "src/App.css";

/// Read `relative` under `root`, keeping at most `limit` characters
///
/// Line endings are normalised to `\n` before truncating.
pub fn read_source(root: &Path, relative: &str, limit: Option<usize>) -> String {
    let path = root.join(relative);
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let content = normalize_newlines(content);
            match limit {
                Some(max) => truncate_chars(&content, max).to_string(),
                None => content,
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "source file unavailable, using placeholder");
            MISSING_FILE_PLACEHOLDER.to_string()
        }
    }
}

fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// File name to content, serialised in insertion order
#[derive(Debug, Default, Clone)]
pub struct CodeFiles {
    entries: Vec<(String, String)>,
}

impl CodeFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.entries.push((name.into(), content.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Two-space indented JSON with every non-ASCII character escaped as `\uXXXX`
    pub fn to_pretty_json(&self) -> String {
        let formatter = AsciiPrettyFormatter(PrettyFormatter::with_indent(b"  "));
        let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), formatter);
        // A map of strings cannot fail to serialise, and the output is pure ASCII
        if self.serialize(&mut serializer).is_err() {
            return String::new();
        }
        String::from_utf8(serializer.into_inner()).unwrap_or_default()
    }
}

/// Pretty printing with non-ASCII escaped as UTF-16 code units
struct AsciiPrettyFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

impl Serialize for CodeFiles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, content) in &self.entries {
            map.serialize_entry(name, content)?;
        }
        map.end()
    }
}
