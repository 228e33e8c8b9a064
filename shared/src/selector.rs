//! A small CSS selector engine for the in-memory document.
//!
//! Supports what the page behaviors query with: type, universal, `#id`,
//! `.class`, `[attr]` and `[attr=value]` simple selectors, descendant and
//! child (`>`) combinators, and comma-separated lists.

use thiserror::Error;

/// Selector parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector (or one of its comma-separated parts) is empty.
    #[error("empty selector")]
    Empty,
    /// A character that cannot start or continue a selector.
    #[error("unexpected `{ch}` at offset {position}")]
    Unexpected {
        /// Offending character.
        ch: char,
        /// Character offset into the selector.
        position: usize,
    },
    /// `#`, `.` or `[` was not followed by a name.
    #[error("expected a name at offset {position}")]
    MissingName {
        /// Character offset into the selector.
        position: usize,
    },
    /// An attribute selector or quoted value was never closed.
    #[error("unterminated attribute selector")]
    Unterminated,
}

/// Element view the matcher walks over.
pub trait SelectorNode: Sized {
    /// Tag name of the element.
    fn tag_name(&self) -> &str;
    /// Attribute value, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
    /// Parent element; `None` at the top of the tree.
    fn parent_element(&self) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrTest {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

impl Compound {
    fn matches<N: SelectorNode>(&self, node: &N) -> bool {
        if let Some(tag) = &self.tag {
            if !node.tag_name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let class_attr = node.attribute("class").unwrap_or_default();
            let has_all = self
                .classes
                .iter()
                .all(|class| class_attr.split_whitespace().any(|c| c == class));
            if !has_all {
                return false;
            }
        }
        self.attrs.iter().all(|test| match (node.attribute(&test.name), &test.value) {
            (Some(actual), Some(expected)) => actual == expected,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }
}

/// One complex selector, stored left to right. Each compound carries the
/// combinator that joins it to the compound before it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    parts: Vec<(Combinator, Compound)>,
}

fn matches_parts<N: SelectorNode>(parts: &[(Combinator, Compound)], node: &N) -> bool {
    let Some(((combinator, compound), rest)) = parts.split_last() else {
        return true;
    };
    if !compound.matches(node) {
        return false;
    }
    if rest.is_empty() {
        return true;
    }
    match combinator {
        Combinator::Child => node
            .parent_element()
            .map(|parent| matches_parts(rest, &parent))
            .unwrap_or(false),
        Combinator::Descendant => {
            let mut ancestor = node.parent_element();
            while let Some(current) = ancestor {
                if matches_parts(rest, &current) {
                    return true;
                }
                ancestor = current.parent_element();
            }
            false
        },
    }
}

/// A parsed, comma-separated selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

impl Selector {
    /// Parse a selector list.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        Parser::new(input).parse_list()
    }

    /// Whether `node` matches any alternative of the list.
    pub fn matches<N: SelectorNode>(&self, node: &N) -> bool {
        self.alternatives
            .iter()
            .any(|complex| matches_parts(&complex.parts, node))
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii()
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn unexpected(&self) -> SelectorError {
        match self.peek() {
            Some(ch) => SelectorError::Unexpected {
                ch,
                position: self.pos,
            },
            None => SelectorError::Empty,
        }
    }

    fn parse_list(mut self) -> Result<Selector, SelectorError> {
        let mut alternatives = Vec::new();
        loop {
            self.skip_whitespace();
            alternatives.push(self.parse_complex()?);
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some(',') => self.pos += 1,
                Some(_) => return Err(self.unexpected()),
            }
        }
        Ok(Selector {
            alternatives,
        })
    }

    fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
        let mut parts = Vec::new();
        let mut combinator = Combinator::Descendant;
        loop {
            let compound = self.parse_compound()?;
            parts.push((combinator, compound));
            let had_space = self.skip_whitespace();
            match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    combinator = Combinator::Child;
                },
                Some(_) if had_space => combinator = Combinator::Descendant,
                Some(_) => return Err(self.unexpected()),
            }
        }
        Ok(Complex {
            parts,
        })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let start = self.pos;
        let mut compound = Compound::default();
        match self.peek() {
            Some('*') => self.pos += 1,
            Some(ch) if is_name_char(ch) => compound.tag = Some(self.parse_name()?),
            _ => {},
        }
        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    compound.id = Some(self.parse_name()?);
                },
                Some('.') => {
                    self.pos += 1;
                    compound.classes.push(self.parse_name()?);
                },
                Some('[') => {
                    self.pos += 1;
                    compound.attrs.push(self.parse_attribute()?);
                },
                _ => break,
            }
        }
        if self.pos == start {
            return Err(self.unexpected());
        }
        Ok(compound)
    }

    fn parse_name(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(SelectorError::MissingName {
                position: start,
            });
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_attribute(&mut self) -> Result<AttrTest, SelectorError> {
        self.skip_whitespace();
        let name = self.parse_name()?;
        self.skip_whitespace();
        let value = match self.peek() {
            Some(']') => None,
            Some('=') => {
                self.pos += 1;
                self.skip_whitespace();
                let value = match self.peek() {
                    Some(quote @ ('"' | '\'')) => self.parse_quoted(quote)?,
                    Some(_) => self.parse_name()?,
                    None => return Err(SelectorError::Unterminated),
                };
                self.skip_whitespace();
                Some(value)
            },
            None => return Err(SelectorError::Unterminated),
            Some(_) => return Err(self.unexpected()),
        };
        if self.peek() != Some(']') {
            return Err(SelectorError::Unterminated);
        }
        self.pos += 1;
        Ok(AttrTest {
            name,
            value,
        })
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String, SelectorError> {
        self.pos += 1;
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch == quote {
                let value = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                return Ok(value);
            }
            self.pos += 1;
        }
        Err(SelectorError::Unterminated)
    }
}
