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
    /// `'(' (bool (',' bool)*)? ')'` following an already-resolved function name.
    pub(crate) fn parse_call(&mut self, function: Symbol) -> ParseResult<Call> {
        self.expect(Token::LParen)?;
        let mut args = Vec::new();
        if self.peek_token() != Token::RParen {
            loop {
                args.push(self.parse_bool()?);
                if !self.eat(Token::Comma) {
                    break;
                }
            }
        }
        self.expect(Token::RParen)?;
        Ok(Call { function, args })
    }

    /// `('[' bool ']')+` following an array name.
    ///
    /// Builds the byte offset left to right: the first subscript times its
    /// stride, then `+ i * stride` for every further subscript, where each
    /// stride is the width of the type one level down.
    pub(crate) fn parse_offset(&mut self, array: Symbol) -> ParseResult<Access> {
        let mut ty = array.ty.clone();
        let mut offset: Option<Expr> = None;

        loop {
            let line = self.line();
            self.expect(Token::LBracket)?;
            let index = self.parse_bool()?;
            self.expect(Token::RBracket)?;

            ty = match ty.element() {
                Some(element) => element.clone(),
                None if offset.is_none() => {
                    return Err(CompileError::syntax(
                        line,
                        format!("{} is not an array", array.name),
                    ))
                }
                None => {
                    return Err(CompileError::syntax(
                        line,
                        format!("too many subscripts for {}", array.name),
                    ))
                }
            };

            let stride = Expr::int(ty.width() as i64);
            let term = Expr::arith(ArithOp::Mul, index, stride);
            offset = Some(match offset {
                Some(prev) => Expr::arith(ArithOp::Add, prev, term),
                None => term,
            });

            if self.peek_token() != Token::LBracket {
                break;
            }
        }

        // The loop runs at least once, so `offset` is always set here.
        let index = offset.unwrap_or_else(|| Expr::int(0));
        Ok(Access {
            array,
            index: Box::new(index),
            ty,
        })
    }
}
