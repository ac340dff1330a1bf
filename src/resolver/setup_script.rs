//! Structural setup.py reader
//!
//! Extracts the `name` keyword argument from a `setup(...)` call without
//! executing any build code: a restricted walk over the source that skips
//! strings and comments, finds a call to the bare identifier `setup`, and
//! accepts only a literal string value for `name`. Anything else (variables,
//! f-strings, bytes, concatenation) yields no name.

/// Extract the literal `name` argument of the first `setup(...)` call that
/// carries one
pub fn package_name(source: &str) -> Option<String> {
    Scanner::new(source).find_setup_name()
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn find_setup_name(&mut self) -> Option<String> {
        let mut prev_significant: Option<char> = None;
        let mut prev_was_def = false;

        while let Some(c) = self.peek() {
            if c == '#' {
                self.skip_line_comment();
                continue;
            }
            if c == '"' || c == '\'' {
                self.skip_string();
                prev_significant = Some('"');
                continue;
            }
            if is_identifier_start(c) {
                let before = prev_significant;
                let was_def = prev_was_def;
                let ident = self.read_identifier();

                if self.at_quote() && is_string_prefix(&ident) {
                    self.skip_string();
                    prev_significant = Some('"');
                    prev_was_def = false;
                    continue;
                }

                prev_was_def = ident == "def" || ident == "class";

                if ident == "setup" && before != Some('.') && !was_def {
                    self.skip_insignificant();
                    if self.peek() == Some('(') {
                        self.bump();
                        if let Some(decision) = self.scan_call_for_name() {
                            return decision;
                        }
                        prev_significant = Some(')');
                        continue;
                    }
                }

                prev_significant = ident.chars().last();
                continue;
            }

            self.bump();
            if !c.is_whitespace() {
                prev_significant = Some(c);
                prev_was_def = false;
            }
        }

        None
    }

    /// Scan one call's argument list for a top-level `name=` keyword.
    ///
    /// Returns `Some(decision)` when the keyword is present (the decision is
    /// the literal value, or `None` for a non-literal), and `None` when the
    /// call carries no `name` keyword at all.
    fn scan_call_for_name(&mut self) -> Option<Option<String>> {
        let mut depth: usize = 1;

        while let Some(c) = self.peek() {
            match c {
                '#' => self.skip_line_comment(),
                '"' | '\'' => self.skip_string(),
                '(' | '[' | '{' => {
                    depth += 1;
                    self.bump();
                }
                ')' | ']' | '}' => {
                    depth -= 1;
                    self.bump();
                    if depth == 0 {
                        return None;
                    }
                }
                c if is_identifier_start(c) => {
                    let ident = self.read_identifier();
                    if self.at_quote() && is_string_prefix(&ident) {
                        self.skip_string();
                        continue;
                    }
                    if depth == 1 && ident == "name" {
                        self.skip_insignificant();
                        if self.peek() == Some('=') && self.peek_at(1) != Some('=') {
                            self.bump();
                            self.skip_insignificant();
                            return Some(self.parse_string_literal());
                        }
                    }
                }
                _ => {
                    self.bump();
                }
            }
        }

        None
    }

    /// Parse a plain string literal at the cursor, or nothing
    fn parse_string_literal(&mut self) -> Option<String> {
        let mut prefix = String::new();
        if self.peek().map(is_identifier_start).unwrap_or(false) {
            prefix = self.read_identifier();
            if !is_string_prefix(&prefix) {
                return None;
            }
        }

        if !self.at_quote() {
            return None;
        }

        // Bytes and f-strings are not string constants
        let lower = prefix.to_lowercase();
        if lower.contains('b') || lower.contains('f') {
            return None;
        }

        Some(self.read_string(lower.contains('r')))
    }

    fn at_quote(&self) -> bool {
        matches!(self.peek(), Some('"') | Some('\''))
    }

    fn read_identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                ident.push(c);
                self.bump();
            } else {
                break;
            }
        }
        ident
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Skip whitespace, comments and line continuations
    fn skip_insignificant(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '\\' {
                self.bump();
            } else if c == '#' {
                self.skip_line_comment();
            } else {
                break;
            }
        }
    }

    fn skip_string(&mut self) {
        // Raw read: escape handling only matters for content, not for
        // finding the closing quote
        let _ = self.read_string(true);
    }

    /// Consume a string literal at the opening quote and return its content
    fn read_string(&mut self, raw: bool) -> String {
        let quote = self.bump().unwrap_or('"');
        let triple = self.peek() == Some(quote) && self.peek_at(1) == Some(quote);
        if triple {
            self.bump();
            self.bump();
        }

        let mut out = String::new();
        while let Some(c) = self.bump() {
            if c == '\\' {
                // A backslash always shields the next character from closing
                // the literal, raw or not
                if let Some(escaped) = self.bump() {
                    if raw {
                        out.push('\\');
                        out.push(escaped);
                    } else {
                        match escaped {
                            'n' => out.push('\n'),
                            't' => out.push('\t'),
                            'r' => out.push('\r'),
                            '\\' | '\'' | '"' => out.push(escaped),
                            other => {
                                out.push('\\');
                                out.push(other);
                            }
                        }
                    }
                }
                continue;
            }

            if c == quote {
                if !triple {
                    break;
                }
                if self.peek() == Some(quote) && self.peek_at(1) == Some(quote) {
                    self.bump();
                    self.bump();
                    break;
                }
                out.push(c);
                continue;
            }

            out.push(c);
        }
        out
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Whether `ident` is a string literal prefix (r/b/f/u, single or paired)
fn is_string_prefix(ident: &str) -> bool {
    !ident.is_empty()
        && ident.len() <= 2
        && ident
            .chars()
            .all(|c| matches!(c.to_ascii_lowercase(), 'r' | 'b' | 'f' | 'u'))
}
