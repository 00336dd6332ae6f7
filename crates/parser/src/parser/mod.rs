/*
 * Copyright (c) 2026. Mikhail Kulik.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

mod binop;
mod decl;
mod expr;
mod postfix;
mod statement;

use logos::Span;
use std::iter::Peekable;

use ast::op::*;
use ast::stmt::Stmt;
use ast::types::{ArrayType, Basic, InvalidArrayBound, Type};
use ast::*;
use log::{debug, trace};

use crate::env::Env;
use crate::lexer::{LineMap, SpannedToken, Token};

type ParseResult<T> = Result<T, CompileError>;

/// Single-token-lookahead recursive-descent parser.
///
/// Besides the token cursor it threads the state the grammar depends on:
/// the scope chain for name resolution, the running storage offset for
/// declarations, and how many loops enclose the current statement.
pub struct Parser<I: Iterator<Item = SpannedToken>> {
    tokens: Peekable<I>,
    current_span: Span,
    /// Stores the source text for slicing identifiers / literals
    source: String,
    lines: LineMap,
    env: Env,
    /// Next free storage offset in the current function's frame
    used: u64,
    loop_depth: usize,
}

impl<I: Iterator<Item = SpannedToken>> Parser<I> {
    pub fn new(source: &str, iterator: I) -> Self {
        Self {
            tokens: iterator.peekable(),
            current_span: 0..0,
            source: source.to_string(),
            lines: LineMap::new(source),
            env: Env::new(),
            used: 0,
            loop_depth: 0,
        }
    }

    /// Peek at the token, returning a copy (avoids borrow issues).
    fn peek_token(&mut self) -> Token {
        self.tokens
            .peek()
            .map(|(t, _)| *t)
            .unwrap_or(Token::Eof)
    }

    /// Peek at the span of the next token.
    fn peek_span(&mut self) -> Span {
        let end = self.source.len();
        self.tokens
            .peek()
            .map(|(_, s)| s.clone())
            .unwrap_or(end..end)
    }

    /// Advances to the next token and returns it, updating the current span.
    fn advance(&mut self) -> Option<Token> {
        if let Some((token, span)) = self.tokens.next() {
            self.current_span = span;
            Some(token)
        } else {
            None
        }
    }

    /// Returns the source text for a span.
    fn text(&self, span: &Span) -> &str {
        &self.source[span.start..span.end]
    }

    /// Returns the source text of the last consumed token.
    fn last_text(&self) -> &str {
        self.text(&self.current_span)
    }

    /// Line of the lookahead token.
    fn line(&mut self) -> usize {
        let span = self.peek_span();
        self.lines.line_of(span.start)
    }

    fn syntax_error(&mut self, message: impl Into<String>) -> CompileError {
        CompileError::syntax(self.line(), message)
    }

    /// Describes the lookahead for error messages.
    fn describe_lookahead(&mut self) -> String {
        match self.peek_token() {
            Token::Eof => "end of input".to_string(),
            token => {
                let span = self.peek_span();
                format!("{:?} `{}`", token, self.text(&span))
            }
        }
    }

    /// Consumes the next token if it matches `expected`, else returns an error.
    fn expect(&mut self, expected: Token) -> ParseResult<Span> {
        if self.peek_token() == expected {
            self.advance();
            Ok(self.current_span.clone())
        } else {
            let found = self.describe_lookahead();
            Err(self.syntax_error(format!("expected {:?}, found {}", expected, found)))
        }
    }

    /// Consume an identifier and return its text.
    fn expect_name(&mut self) -> ParseResult<String> {
        self.expect(Token::Id)?;
        Ok(self.last_text().to_string())
    }

    /// Consume an unsigned integer literal and return its value.
    fn expect_num(&mut self) -> ParseResult<i64> {
        self.expect(Token::Num)?;
        let text = self.last_text().to_string();
        text.parse::<i64>().map_err(|_| {
            CompileError::syntax(
                self.lines.line_of(self.current_span.start),
                format!("integer literal {} out of range", text),
            )
        })
    }

    /// Checks if the next token matches, consuming it if so.
    fn eat(&mut self, expected: Token) -> bool {
        if self.peek_token() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Look `name` up in the scope chain.
    fn resolve(&self, name: &str, line: usize) -> ParseResult<Symbol> {
        self.env
            .lookup(name)
            .cloned()
            .ok_or_else(|| CompileError::UndeclaredIdentifier {
                line,
                name: name.to_string(),
            })
    }

    /// Assign the next storage offset to `name` and install it in the current scope.
    ///
    /// A frame that no longer fits the offset space is reported against the
    /// outermost bound of the declaration on `line`.
    fn declare(&mut self, name: String, ty: Type, line: usize) -> ParseResult<Symbol> {
        let symbol = Symbol::new(name, ty, self.used);
        self.used = self
            .used
            .checked_add(symbol.ty.width())
            .filter(|&used| i64::try_from(used).is_ok())
            .ok_or_else(|| CompileError::InvalidArrayBound {
                line,
                bound: match &symbol.ty {
                    Type::Array(array) => array.size() as i64,
                    Type::Basic(_) => 1,
                },
            })?;
        trace!(
            "declare {}: {} at offset {}",
            symbol.name,
            symbol.ty,
            symbol.offset
        );
        self.env.declare(symbol.clone());
        Ok(symbol)
    }
}
