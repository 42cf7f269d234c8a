use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::{bytes::ByteUnitSystem, ok_or};

/// JSON insignificant whitespace.
const WS: &str = r"[ \t\n\r\x0C]*";

struct FieldPatterns {
    name: String,
    /// `"name": "value"`
    quoted: Regex,
    /// `"name": 123` followed by a delimiter, captured separately
    unquoted: Regex,
}

impl FieldPatterns {
    fn new(name: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(name);
        let quoted = Regex::new(&format!(r#""{escaped}"{WS}:{WS}"([^"]+)""#))?;
        let unquoted = Regex::new(&format!(
            r#""{escaped}"{WS}:{WS}([0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?)([, \t\n\r\x0C}}])"#
        ))?;

        Ok(Self {
            name: name.to_string(),
            quoted,
            unquoted,
        })
    }
}

/// Rewrites the values of selected JSON fields into formatted byte
/// quantities, leaving every other byte of the document untouched.
///
/// Matching is textual: no JSON parse happens, so whitespace, key order and
/// number formatting outside the targeted values survive as-is. Values that
/// are not quantities are skipped.
///
/// An unquoted number is only recognised when followed by `,`, `}` or
/// whitespace; a number closing an array (`]`) is left alone.
pub struct FieldRewriter {
    fields: Vec<FieldPatterns>,
    unit_system: ByteUnitSystem,
}

impl FieldRewriter {
    pub fn new<I, S>(fields: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = fields
            .into_iter()
            .filter(|name| !name.as_ref().is_empty())
            .map(|name| FieldPatterns::new(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            fields,
            unit_system: ByteUnitSystem::Binary,
        })
    }

    pub fn with_unit_system(mut self, unit_system: ByteUnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn rewrite(&self, text: &str) -> String {
        let mut result = text.to_string();

        for field in &self.fields {
            result = field
                .quoted
                .replace_all(&result, |caps: &Captures| self.replace(&field.name, caps, ""))
                .into_owned();

            result = field
                .unquoted
                .replace_all(&result, |caps: &Captures| {
                    self.replace(&field.name, caps, &caps[2])
                })
                .into_owned();
        }

        result
    }

    fn replace(&self, name: &str, caps: &Captures, delimiter: &str) -> String {
        let value = &caps[1];
        let formatted = ok_or!(self.unit_system.format_token(value), err => {
            debug!(field = name, value, %err, "leaving non-quantity value unchanged");
            return caps[0].to_string();
        });
        format!(r#""{name}": "{formatted}"{delimiter}"#)
    }
}

/// Rewrites `fields` in `text` using binary units. Never fails: anything
/// that cannot be rewritten is returned unchanged.
pub fn rewrite_fields<S: AsRef<str>>(text: &str, fields: &[S]) -> String {
    match FieldRewriter::new(fields) {
        Ok(rewriter) => rewriter.rewrite(text),
        Err(err) => {
            warn!(%err, "could not build field patterns; leaving input unchanged");
            text.to_string()
        }
    }
}
