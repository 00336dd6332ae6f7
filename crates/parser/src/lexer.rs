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

use logos::{Logos, Span};

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
pub enum Token {
    // Keywords
    #[token("if")] If,
    #[token("else")] Else,
    #[token("while")] While,
    #[token("do")] Do,
    #[token("break")] Break,
    #[token("return")] Return,
    #[token("true")] True,
    #[token("false")] False,

    /// Primitive type keyword; the parser reads which one from the source text.
    #[token("int")]
    #[token("float")]
    #[token("char")]
    #[token("bool")]
    Basic,

    // Multi-char operators
    #[token("&&")] And,
    #[token("||")] Or,
    #[token("==")] Eq,
    #[token("!=")] NotEq,
    #[token("<=")] Le,
    #[token(">=")] Ge,

    // Single-char operators
    #[token("<")] Lt,
    #[token(">")] Gt,
    #[token("=")] Assign,
    #[token("!")] Not,
    #[token("+")] Plus,
    #[token("-")] Minus,
    #[token("*")] Star,
    #[token("/")] Slash,
    #[token(",")] Comma,
    #[token(";")] Semicolon,
    #[token("(")] LParen,
    #[token(")")] RParen,
    #[token("[")] LBracket,
    #[token("]")] RBracket,
    #[token("{")] LBrace,
    #[token("}")] RBrace,

    // Literals and identifiers
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Id,

    #[regex(r"[0-9]+")]
    Num,

    #[regex(r"[0-9]+\.[0-9]*")]
    Real,

    /// Synthesised by the parser once the token stream is exhausted.
    Eof,

    /// Any character the scanner does not recognise
    Error,
}

pub type SpannedToken = (Token, Span);

/// Wraps the Logos lexer, folding scan failures into [`Token::Error`] so the
/// parser reports them as ordinary syntax errors.
pub struct Lexer<'src> {
    inner: logos::SpannedIter<'src, Token>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: Token::lexer(source).spanned(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(token, span)| match token {
            Ok(token) => (token, span),
            Err(_) => (Token::Error, span),
        })
    }
}

/// Maps byte offsets back to 1-based line numbers for diagnostics.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset at which each line starts; always begins with `0`.
    starts: Vec<usize>,
}

impl LineMap {
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .char_indices()
                .filter(|&(_, c)| c == '\n')
                .map(|(i, _)| i + 1),
        );
        Self { starts }
    }

    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset)
    }
}
