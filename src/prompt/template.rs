//! Template engine for named-slot substitution.
//!
//! A [`Template`] is parsed once from its source text and a list of declared
//! slot names, then rendered any number of times against a variables map.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of slot `name`, where `name` is an
//!   identifier (`[A-Za-z_][A-Za-z0-9_]*`)
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Any other brace is literal text. A `{` followed by whitespace, a quote or
//! a newline never starts a placeholder, so Terraform blocks, JSON bodies and
//! Mermaid labels pass through untouched.
//!
//! # Error Handling
//!
//! Undeclared placeholders and unused slots are rejected at parse time.
//! At render time every declared slot must have a value; nothing is
//! substituted with an empty or default string.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

/// Error type for template parsing and rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A declared slot had no value in the variables map.
    #[error("missing required parameter '{name}'")]
    MissingParameter {
        /// The name of the slot without a value.
        name: String,
    },

    /// The template references a placeholder that was not declared.
    #[error("undeclared placeholder '{{{name}}}' at position {position} in template")]
    UndeclaredPlaceholder {
        /// The placeholder name as written in the template.
        name: String,
        /// Byte offset of the opening `{`.
        position: usize,
    },

    /// A declared slot never occurs in the template.
    #[error("slot '{name}' is declared but never used in template")]
    UnusedSlot {
        /// The declared slot name.
        name: String,
    },

    /// The same slot name was declared twice.
    #[error("slot '{name}' is declared more than once")]
    DuplicateSlot {
        /// The repeated slot name.
        name: String,
    },
}

impl TemplateError {
    /// Returns true for errors caused by a malformed template rather than
    /// by the caller's parameters.
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self, TemplateError::MissingParameter { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// Index into `Template::slots`.
    Slot(usize),
}

/// A parsed template with a fixed set of named slots.
///
/// Rendering only reads the template, so a single instance can be shared
/// across threads by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    slots: Vec<String>,
    segments: Vec<Segment>,
    literal_len: usize,
}

impl Template {
    /// Parse `source`, accepting exactly the placeholders listed in `slots`.
    ///
    /// # Errors
    ///
    /// * `DuplicateSlot` - `slots` names the same slot twice
    /// * `UndeclaredPlaceholder` - `source` contains `{name}` for a name not in `slots`
    /// * `UnusedSlot` - a declared slot never occurs in `source`
    ///
    /// # Examples
    ///
    /// ```
    /// use archprompt::prompt::{Template, vars};
    ///
    /// let template = Template::parse("Hello {name}, use {{braces}}.", &["name"]).unwrap();
    /// let result = template.render(&vars([("name", "Alice")])).unwrap();
    /// assert_eq!(result, "Hello Alice, use {braces}.");
    /// ```
    pub fn parse(source: &str, slots: &[&str]) -> Result<Self, TemplateError> {
        let mut declared: Vec<String> = Vec::with_capacity(slots.len());
        for slot in slots {
            if declared.iter().any(|d| d == slot) {
                return Err(TemplateError::DuplicateSlot {
                    name: slot.to_string(),
                });
            }
            declared.push(slot.to_string());
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut literal_len = 0;
        let mut chars = source.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => {
                    // Escape sequence {{
                    if let Some((_, '{')) = chars.peek() {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let Some(name) = placeholder_at(source, pos) else {
                        literal.push('{');
                        continue;
                    };

                    let index = declared.iter().position(|d| d == name).ok_or_else(|| {
                        TemplateError::UndeclaredPlaceholder {
                            name: name.to_string(),
                            position: pos,
                        }
                    })?;

                    if !literal.is_empty() {
                        literal_len += literal.len();
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(index));

                    // Identifiers are ASCII: skip the name and the closing brace.
                    for _ in 0..=name.len() {
                        chars.next();
                    }
                }
                '}' => {
                    // Escape sequence }}; a lone } is a regular character
                    if let Some((_, '}')) = chars.peek() {
                        chars.next();
                    }
                    literal.push('}');
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            literal_len += literal.len();
            segments.push(Segment::Literal(literal));
        }

        for (index, name) in declared.iter().enumerate() {
            if !segments.contains(&Segment::Slot(index)) {
                return Err(TemplateError::UnusedSlot { name: name.clone() });
            }
        }

        debug!(
            slots = declared.len(),
            segments = segments.len(),
            "parsed template"
        );

        Ok(Self {
            slots: declared,
            segments,
            literal_len,
        })
    }

    /// Declared slot names, in declaration order.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// Number of times `name` occurs in the template. Zero for unknown names.
    pub fn occurrences(&self, name: &str) -> usize {
        let Some(index) = self.slots.iter().position(|s| s == name) else {
            return 0;
        };
        self.segments
            .iter()
            .filter(|segment| **segment == Segment::Slot(index))
            .count()
    }

    /// Render the template by substituting every slot from `variables`.
    ///
    /// All slots are checked before any output is produced. Values are
    /// inserted verbatim and never re-scanned for placeholders. Keys in
    /// `variables` that are not slots are ignored.
    ///
    /// # Errors
    ///
    /// `MissingParameter` naming the first slot, in declaration order, that
    /// has no value.
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String, TemplateError> {
        let values = self
            .slots
            .iter()
            .map(|slot| {
                variables
                    .get(slot)
                    .map(String::as_str)
                    .ok_or_else(|| TemplateError::MissingParameter { name: slot.clone() })
            })
            .collect::<Result<Vec<&str>, _>>()?;

        for key in variables.keys() {
            if !self.slots.contains(key) {
                debug!(key = %key, "ignoring variable with no matching slot");
            }
        }

        let mut result = String::with_capacity(self.literal_len);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Slot(index) => result.push_str(values[*index]),
            }
        }

        debug!(bytes = result.len(), "rendered template");
        Ok(result)
    }
}

/// Return the identifier between the `{` at `open` and a directly following
/// `}`, if the text there forms a placeholder.
///
/// The scan stops at the first byte that cannot belong to an identifier, so
/// each `{` costs at most the length of one identifier.
fn placeholder_at(source: &str, open: usize) -> Option<&str> {
    let rest = &source[open + 1..];
    let end = rest
        .bytes()
        .position(|b| !(b.is_ascii_alphanumeric() || b == b'_'))?;
    if rest.as_bytes()[end] != b'}' {
        return None;
    }
    let name = &rest[..end];
    is_identifier(name).then_some(name)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
