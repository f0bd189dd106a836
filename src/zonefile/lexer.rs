// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Line tokenizer for master file entries.
//!
//! Splits a physical line into tokens, dropping `;` comments and tracking
//! parentheses so that an entry may continue over several lines.

use crate::errors::ZoneFileError;

/// A single token of a zone file entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text; quotes removed and `\"`/`\\` unescaped for quoted tokens
    pub text: String,
    /// True if the token was written as a quoted string
    pub quoted: bool,
}

impl Token {
    /// Bare (unquoted) token.
    #[must_use]
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: false,
        }
    }

    /// Quoted token.
    #[must_use]
    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: true,
        }
    }
}

/// Tokenizer state carried between physical lines.
#[derive(Debug, Default)]
pub struct Lexer {
    depth: usize,
}

impl Lexer {
    /// Returns true while an opening parenthesis is still unmatched.
    #[must_use]
    pub fn in_group(&self) -> bool {
        self.depth > 0
    }

    /// Tokenize one physical line, appending tokens to `out`.
    ///
    /// # Errors
    ///
    /// Returns `ZoneFileError::Syntax` for unbalanced closing parentheses and
    /// unterminated quoted strings.
    pub fn tokenize_line(
        &mut self,
        line: &str,
        line_no: usize,
        out: &mut Vec<Token>,
    ) -> Result<(), ZoneFileError> {
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                ';' => break,
                '(' => self.depth += 1,
                ')' => {
                    if self.depth == 0 {
                        return Err(ZoneFileError::Syntax {
                            line: line_no,
                            reason: "unbalanced ')'".to_string(),
                        });
                    }
                    self.depth -= 1;
                }
                '"' => {
                    let mut text = String::new();
                    loop {
                        match chars.next() {
                            Some('"') => break,
                            Some('\\') => match chars.next() {
                                Some(escaped @ ('"' | '\\')) => text.push(escaped),
                                Some(other) => {
                                    text.push('\\');
                                    text.push(other);
                                }
                                None => {
                                    return Err(unterminated(line_no));
                                }
                            },
                            Some(ch) => text.push(ch),
                            None => return Err(unterminated(line_no)),
                        }
                    }
                    out.push(Token::quoted(text));
                }
                c if c.is_whitespace() => {}
                _ => {
                    let mut text = String::from(c);
                    if c == '\\' {
                        if let Some(escaped) = chars.next() {
                            text.push(escaped);
                        }
                    }
                    while let Some(&next) = chars.peek() {
                        if next.is_whitespace() || matches!(next, ';' | '(' | ')' | '"') {
                            break;
                        }
                        chars.next();
                        text.push(next);
                        if next == '\\' {
                            if let Some(escaped) = chars.next() {
                                text.push(escaped);
                            }
                        }
                    }
                    out.push(Token::bare(text));
                }
            }
        }

        Ok(())
    }
}

fn unterminated(line_no: usize) -> ZoneFileError {
    ZoneFileError::Syntax {
        line: line_no,
        reason: "unterminated quoted string".to_string(),
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod lexer_tests;
