//! CSS selector subset used by the page contract.
//!
//! Supports compound selectors made of a tag name (or `*`), `.class`, `#id`
//! and attribute tests (`[attr]`, `[attr="v"]`, `[attr^="v"]`), joined by
//! the descendant combinator. That covers every selector in `SiteConfig`
//! defaults; anything else is rejected with [`SelectorError::Unsupported`].

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use crate::error::SelectorError;

/// Attribute test inside `[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrMatch {
    pub name: String,
    pub op: AttrOp,
}

/// One compound selector such as `a.nav-link[href^="#"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrMatch>,
}

/// Read-only view of an element, as needed for matching.
pub trait ElementView {
    fn tag(&self) -> &str;
    fn attr(&self, name: &str) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
}

impl Compound {
    #[must_use]
    pub fn matches<E: ElementView + ?Sized>(&self, el: &E) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|test| match (&test.op, el.attr(&test.name)) {
            (_, None) => false,
            (AttrOp::Exists, Some(_)) => true,
            (AttrOp::Equals(want), Some(got)) => got == want,
            (AttrOp::Prefix(want), Some(got)) => got.starts_with(want.as_str()),
        })
    }
}

/// A parsed descendant-combinator chain, outermost compound first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    /// Parse `raw` into a selector.
    pub fn parse(raw: &str) -> Result<Self, SelectorError> {
        let mut parser = Parser { src: raw, chars: raw.char_indices().peekable() };
        let mut parts = Vec::new();
        loop {
            parser.skip_ws();
            if parser.chars.peek().is_none() {
                break;
            }
            parts.push(parser.compound()?);
        }
        if parts.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { parts })
    }

    #[must_use]
    pub fn parts(&self) -> &[Compound] {
        &self.parts
    }

    /// Match `el` whose ancestors (nearest first) are yielded by `ancestors`.
    ///
    /// The rightmost compound must match `el` itself; the remaining ones must
    /// match ancestors in order. Greedy nearest-first matching is exact for a
    /// descendant-only chain.
    pub fn matches<'a, E, I>(&self, el: &E, ancestors: I) -> bool
    where
        E: ElementView + ?Sized + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let Some((last, rest)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(el) {
            return false;
        }
        let mut pending = rest.iter().rev().peekable();
        for ancestor in ancestors {
            let Some(next) = pending.peek() else {
                break;
            };
            if next.matches(ancestor) {
                pending.next();
            }
        }
        pending.peek().is_none()
    }
}

struct Parser<'a> {
    src: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl Parser<'_> {
    fn skip_ws(&mut self) {
        while self.chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn unsupported(&self, found: char) -> SelectorError {
        SelectorError::Unsupported { selector: self.src.to_owned(), found }
    }

    fn ident(&mut self) -> String {
        let mut out = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                out.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        out
    }

    fn required_ident(&mut self, after: char) -> Result<String, SelectorError> {
        let name = self.ident();
        if name.is_empty() {
            let found = self.chars.peek().map_or(after, |&(_, c)| c);
            return Err(self.unsupported(found));
        }
        Ok(name)
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let mut out = Compound::default();
        if self.chars.peek().is_some_and(|&(_, c)| c == '*') {
            self.chars.next();
        } else {
            let tag = self.ident();
            if !tag.is_empty() {
                out.tag = Some(tag);
            }
        }
        while let Some(&(_, c)) = self.chars.peek() {
            match c {
                '.' => {
                    self.chars.next();
                    out.classes.push(self.required_ident('.')?);
                }
                '#' => {
                    self.chars.next();
                    out.id = Some(self.required_ident('#')?);
                }
                '[' => {
                    self.chars.next();
                    out.attrs.push(self.attribute()?);
                }
                c if c.is_whitespace() => break,
                other => return Err(self.unsupported(other)),
            }
        }
        Ok(out)
    }

    fn attribute(&mut self) -> Result<AttrMatch, SelectorError> {
        self.skip_ws();
        let name = self.required_ident('[')?;
        self.skip_ws();
        let op = match self.chars.next() {
            Some((_, ']')) => return Ok(AttrMatch { name, op: AttrOp::Exists }),
            Some((_, '=')) => AttrOp::Equals(self.value()?),
            Some((_, '^')) => match self.chars.next() {
                Some((_, '=')) => AttrOp::Prefix(self.value()?),
                Some((_, other)) => return Err(self.unsupported(other)),
                None => return Err(SelectorError::UnterminatedAttribute(self.src.to_owned())),
            },
            Some((_, other)) => return Err(self.unsupported(other)),
            None => return Err(SelectorError::UnterminatedAttribute(self.src.to_owned())),
        };
        self.skip_ws();
        match self.chars.next() {
            Some((_, ']')) => Ok(AttrMatch { name, op }),
            Some((_, other)) => Err(self.unsupported(other)),
            None => Err(SelectorError::UnterminatedAttribute(self.src.to_owned())),
        }
    }

    fn value(&mut self) -> Result<String, SelectorError> {
        self.skip_ws();
        let Some(&(_, quote)) = self.chars.peek() else {
            return Err(SelectorError::UnterminatedAttribute(self.src.to_owned()));
        };
        if quote != '"' && quote != '\'' {
            return Ok(self.ident());
        }
        self.chars.next();
        let mut out = String::new();
        for (_, c) in self.chars.by_ref() {
            if c == quote {
                return Ok(out);
            }
            out.push(c);
        }
        Err(SelectorError::UnterminatedAttribute(self.src.to_owned()))
    }
}
