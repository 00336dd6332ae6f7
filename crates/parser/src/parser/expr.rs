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

use super::*;

impl<I: Iterator<Item = SpannedToken>> Parser<I> {
    // Unary: -x, !x (right-associative)
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Expr> {
        match self.peek_token() {
            Token::Minus => {
                self.advance();
                let operand = self.parse_unary()?;
                Ok(Expr::neg(operand))
            }
            Token::Not => {
                self.advance();
                let operand = self.parse_unary()?;
                Ok(Expr::Not(Box::new(operand)))
            }
            _ => self.parse_factor(),
        }
    }

    /// Literals, parenthesised expressions, and identifier uses.
    fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.peek_token() {
            Token::LParen => {
                self.advance();
                let inner = self.parse_bool()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::Num => Ok(Expr::int(self.expect_num()?)),
            Token::Real => {
                self.advance();
                Ok(Expr::Constant(Constant::Real(self.last_text().to_string())))
            }
            Token::True => {
                self.advance();
                Ok(Expr::Constant(Constant::Bool(true)))
            }
            Token::False => {
                self.advance();
                Ok(Expr::Constant(Constant::Bool(false)))
            }
            Token::Id => {
                let line = self.line();
                let name = self.expect_name()?;
                let symbol = self.resolve(&name, line)?;
                match self.peek_token() {
                    Token::LParen => Ok(Expr::Call(self.parse_call(symbol)?)),
                    Token::LBracket => Ok(Expr::Access(self.parse_offset(symbol)?)),
                    _ => Ok(Expr::Id(symbol)),
                }
            }
            _ => {
                let found = self.describe_lookahead();
                Err(self.syntax_error(format!("expected an expression, found {}", found)))
            }
        }
    }
}
