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

use logos::Logos;

use crate::lexer::{Lexer, LineMap, Token};

fn kinds(source: &str) -> Vec<Token> {
    Lexer::new(source).map(|(token, _)| token).collect()
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        kinds("while whiley int integer do"),
        vec![Token::While, Token::Id, Token::Basic, Token::Id, Token::Do]
    );
}

#[test]
fn test_two_char_operators_win() {
    assert_eq!(
        kinds("<= < == = != ! && ||"),
        vec![
            Token::Le,
            Token::Lt,
            Token::Eq,
            Token::Assign,
            Token::NotEq,
            Token::Not,
            Token::And,
            Token::Or
        ]
    );
}

#[test]
fn test_numbers_and_reals() {
    let source = "42 3.14 7.";
    let tokens: Vec<_> = Lexer::new(source).collect();
    assert_eq!(tokens[0].0, Token::Num);
    assert_eq!(tokens[1].0, Token::Real);
    assert_eq!(&source[tokens[1].1.clone()], "3.14");
    assert_eq!(tokens[2].0, Token::Real);
}

#[test]
fn test_comments_and_whitespace_skipped() {
    assert_eq!(
        kinds("a // trailing comment\n\t b"),
        vec![Token::Id, Token::Id]
    );
}

#[test]
fn test_unknown_character_becomes_error_token() {
    assert_eq!(kinds("a @ b"), vec![Token::Id, Token::Error, Token::Id]);
    assert!(Token::lexer("#").next().is_some_and(|t| t.is_err()));
}

#[test]
fn test_line_map() {
    let source = "a\nbb\n\nccc";
    let lines = LineMap::new(source);
    assert_eq!(lines.line_of(0), 1);
    assert_eq!(lines.line_of(2), 2);
    assert_eq!(lines.line_of(5), 3);
    assert_eq!(lines.line_of(6), 4);
    assert_eq!(lines.line_of(source.len()), 4);
}
