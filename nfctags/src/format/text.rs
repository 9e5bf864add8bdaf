// nfctags/src/format/text.rs

use crate::format::traits::Container;
use crate::utils::{bytes_to_hex_spaced, parse_hex};
use crate::{Error, Result};

/// In-memory implementation of [`Container`] over the textual
/// `Key: value` / `# comment` form.
///
/// Values are stored untyped, exactly as they appear on disk; the typed
/// `read_*` accessors parse on demand. This mirrors the external format, where
/// the file carries no type information and the reader decides how to
/// interpret each value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextContainer {
    lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Comment(String),
    Pair { key: String, value: String },
}

impl TextContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the textual form. Unrecognized lines fail the whole parse.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = Vec::new();
        for raw in text.lines() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix('#') {
                lines.push(Line::Comment(comment.trim().to_string()));
            } else if let Some((key, value)) = trimmed.split_once(':') {
                lines.push(Line::Pair {
                    key: key.trim().to_string(),
                    value: value.trim().to_string(),
                });
            } else {
                return Err(Error::Format(format!("malformed line \"{}\"", trimmed)));
            }
        }
        Ok(Self { lines })
    }

    /// Render back to the textual form.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Comment(text) => {
                    out.push_str("# ");
                    out.push_str(text);
                }
                Line::Pair { key, value } => {
                    out.push_str(key);
                    out.push_str(": ");
                    out.push_str(value);
                }
            }
            out.push('\n');
        }
        out
    }

    fn find(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Pair { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    fn get(&self, key: &str) -> Result<&str> {
        self.find(key)
            .ok_or_else(|| Error::Format(format!("missing key \"{}\"", key)))
    }

    fn push_pair(&mut self, key: &str, value: String) {
        self.lines.push(Line::Pair {
            key: key.to_string(),
            value,
        });
    }
}

impl Container for TextContainer {
    fn key_exists(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    fn read_hex(&self, key: &str, out: &mut [u8]) -> Result<()> {
        let bytes = parse_hex(self.get(key)?)?;
        if bytes.len() != out.len() {
            return Err(Error::InvalidLength {
                expected: out.len(),
                actual: bytes.len(),
            });
        }
        out.copy_from_slice(&bytes);
        Ok(())
    }

    fn read_hex_any(&self, key: &str) -> Result<Vec<u8>> {
        parse_hex(self.get(key)?)
    }

    fn read_bool(&self, key: &str) -> Result<bool> {
        match self.get(key)? {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(Error::Format(format!(
                "key \"{}\": expected bool, got \"{}\"",
                key, other
            ))),
        }
    }

    fn read_u32(&self, key: &str) -> Result<u32> {
        let value = self.get(key)?;
        value
            .parse::<u32>()
            .map_err(|_| Error::Format(format!("key \"{}\": expected u32, got \"{}\"", key, value)))
    }

    fn write_hex(&mut self, key: &str, data: &[u8]) -> Result<()> {
        self.push_pair(key, bytes_to_hex_spaced(data));
        Ok(())
    }

    fn write_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.push_pair(key, if value { "true" } else { "false" }.to_string());
        Ok(())
    }

    fn write_u32(&mut self, key: &str, value: u32) -> Result<()> {
        self.push_pair(key, value.to_string());
        Ok(())
    }

    fn write_comment(&mut self, text: &str) -> Result<()> {
        self.lines.push(Line::Comment(text.to_string()));
        Ok(())
    }
}
