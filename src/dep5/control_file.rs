//! Parser for RFC2822-style Debian control files.
//!
//! A control file is a sequence of stanzas separated by blank lines. Each
//! stanza is a list of `Key: value` fields; a line starting with whitespace
//! continues the value of the previous field, and a line starting with `#`
//! is a comment.

use crate::error::FormatError;

/// A single `Key: value` pair. Continued values hold embedded `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub value: String,
}

/// An ordered list of fields. Duplicate keys are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stanza {
    pub fields: Vec<Field>,
}

impl Stanza {
    /// Value of the last field named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    /// Values of every field named `key`, in declaration order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.key == key)
            .map(|f| f.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlFile {
    pub stanzas: Vec<Stanza>,
}

impl ControlFile {
    /// Parse the full text of a control file in a single pass.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let text = text.replace("\r\n", "\n").replace('\r', "\n");

        let mut stanzas = Vec::new();
        let mut current: Option<Stanza> = None;

        for (idx, line) in text.split('\n').enumerate() {
            let line_no = idx + 1;

            if line.starts_with('#') {
                continue;
            }

            if line.trim().is_empty() {
                flush(&mut stanzas, current.take());
                continue;
            }

            if line.starts_with(char::is_whitespace) {
                let trimmed = line.trim();
                // An open stanza always holds at least one field.
                let field = current
                    .as_mut()
                    .and_then(|s| s.fields.last_mut())
                    .ok_or_else(|| FormatError::NoStanza {
                        line: line_no,
                        text: trimmed.to_string(),
                    })?;
                field.value.push('\n');
                field.value.push_str(trimmed);
                continue;
            }

            let (key, value) = line.split_once(':').ok_or_else(|| FormatError::MissingSeparator {
                line: line_no,
                text: line.to_string(),
            })?;

            current.get_or_insert_with(Stanza::default).fields.push(Field {
                key: key.to_string(),
                value: value.trim().to_string(),
            });
        }

        flush(&mut stanzas, current);

        Ok(ControlFile { stanzas })
    }
}

fn flush(stanzas: &mut Vec<Stanza>, stanza: Option<Stanza>) {
    if let Some(stanza) = stanza.filter(|s| !s.fields.is_empty()) {
        stanzas.push(stanza);
    }
}
