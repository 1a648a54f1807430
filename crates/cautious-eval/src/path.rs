//! Navigation paths: `name`, `a.b.c.hello`, `params[:foo]`, `list[-1].size`.
//!
//! Grammar:
//!
//! ```text
//! path    := ident segment*
//! segment := '.' member ['()'] | '[' key ']'
//! member  := ident ['?']
//! key     := ':' ident | '"' text '"' | '\'' text '\'' | ['-'] digits
//! ```
//!
//! Whitespace is allowed between tokens.

use crate::scope::Scope;
use cautious_types::{LookupError, LookupResult, Value};
use std::fmt;

/// One navigation step after the root name.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// `.name` — a record field or built-in member.
    Member(String),
    /// `[key]` — a lenient index; missing keys yield `nil`.
    Index(Value),
}

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub root: String,
    pub segments: Vec<Segment>,
}

impl Path {
    /// Parse a path expression.
    pub fn parse(source: &str) -> LookupResult<Self> {
        Parser::new(source).parse()
    }

    /// Look up the root name in `scope`, then walk the segments.
    pub fn resolve(&self, scope: &Scope) -> LookupResult<Value> {
        let root = scope.lookup(&self.root)?;
        self.walk(root)
    }

    /// Walk the segments starting from an already-resolved root value.
    pub fn walk(&self, root: Value) -> LookupResult<Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| match segment {
                Segment::Member(name) => current.member(name),
                Segment::Index(key) => current.index(key),
            })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for segment in &self.segments {
            match segment {
                Segment::Member(name) => write!(f, ".{name}")?,
                Segment::Index(key) => write!(f, "[{}]", key.inspect())?,
            }
        }
        Ok(())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Parser
// ══════════════════════════════════════════════════════════════════════════════

/// Single-pass scanner over the path source bytes.
struct Parser<'src> {
    source: &'src str,
    bytes: &'src [u8],
    /// Current byte offset into `bytes`.
    pos: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    fn parse(mut self) -> LookupResult<Path> {
        self.skip_whitespace();
        let root = self.ident("a name")?;
        let mut segments = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some(b'.') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    segments.push(Segment::Member(self.member()?));
                }
                Some(b'[') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    let key = self.key()?;
                    self.skip_whitespace();
                    self.expect(b']')?;
                    segments.push(Segment::Index(key));
                }
                Some(other) => {
                    return Err(LookupError::syntax(
                        self.pos,
                        format!("unexpected '{}'", other as char),
                    ))
                }
            }
        }

        Ok(Path { root, segments })
    }

    // ── Tokens ───────────────────────────────────────────────────────────

    fn ident(&mut self, what: &str) -> LookupResult<String> {
        let start = self.pos;
        match self.peek() {
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => self.pos += 1,
            _ => return Err(LookupError::syntax(start, format!("expected {what}"))),
        }
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            self.pos += 1;
        }
        Ok(self.source[start..self.pos].to_string())
    }

    /// A member name, optionally ending in `?` and followed by `()`.
    fn member(&mut self) -> LookupResult<String> {
        let mut name = self.ident("a member name")?;
        if self.peek() == Some(b'?') {
            self.pos += 1;
            name.push('?');
        }
        if self.peek() == Some(b'(') {
            self.pos += 1;
            self.skip_whitespace();
            self.expect(b')')?;
        }
        Ok(name)
    }

    fn key(&mut self) -> LookupResult<Value> {
        match self.peek() {
            Some(b':') => {
                self.pos += 1;
                Ok(Value::Symbol(self.ident("a symbol name")?))
            }
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let start = self.pos;
                while let Some(b) = self.peek() {
                    if b == quote {
                        let text = self.source[start..self.pos].to_string();
                        self.pos += 1;
                        return Ok(Value::String(text));
                    }
                    self.pos += 1;
                }
                Err(LookupError::syntax(start - 1, "unterminated string key"))
            }
            Some(b) if b == b'-' || b.is_ascii_digit() => {
                let start = self.pos;
                self.pos += 1;
                while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                    self.pos += 1;
                }
                self.source[start..self.pos]
                    .parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| LookupError::syntax(start, "invalid integer key"))
            }
            _ => Err(LookupError::syntax(self.pos, "expected a key")),
        }
    }

    // ── Scanning helpers ─────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> LookupResult<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(LookupError::syntax(
                self.pos,
                format!("expected '{}'", byte as char),
            ))
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }
}
