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
    /// `stmt*` up to the closing brace, chained left to right onto `Null`.
    pub(crate) fn parse_stmts(&mut self) -> ParseResult<Stmt> {
        let mut stmts = Stmt::Null;
        while self.peek_token() != Token::RBrace {
            let stmt = self.parse_stmt()?;
            stmts = Stmt::seq(stmts, stmt);
        }
        Ok(stmts)
    }

    pub(crate) fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        match self.peek_token() {
            Token::Semicolon => {
                self.advance();
                Ok(Stmt::Null)
            }
            Token::Break => self.parse_break(),
            Token::While => self.parse_while(),
            Token::Do => self.parse_do(),
            Token::If => self.parse_if(),
            Token::LBrace => self.parse_block(),
            Token::Return => self.parse_return(),
            _ => self.parse_assign(),
        }
    }

    fn parse_break(&mut self) -> ParseResult<Stmt> {
        let line = self.line();
        self.advance(); // consume `break`
        self.expect(Token::Semicolon)?;
        if self.loop_depth == 0 {
            return Err(CompileError::BreakOutsideLoop { line });
        }
        Ok(Stmt::Break { line })
    }

    /// Parse a loop body one loop deeper than the current statement.
    fn parse_loop_body(&mut self) -> ParseResult<Stmt> {
        self.loop_depth += 1;
        let body = self.parse_stmt();
        self.loop_depth -= 1;
        body
    }

    fn parse_while(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `while`
        self.expect(Token::LParen)?;
        let cond = self.parse_bool()?;
        self.expect(Token::RParen)?;
        let body = self.parse_loop_body()?;
        Ok(Stmt::While {
            cond,
            body: Box::new(body),
        })
    }

    fn parse_do(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `do`
        let body = self.parse_loop_body()?;
        self.expect(Token::While)?;
        self.expect(Token::LParen)?;
        let cond = self.parse_bool()?;
        self.expect(Token::RParen)?;
        self.expect(Token::Semicolon)?;
        Ok(Stmt::Do {
            body: Box::new(body),
            cond,
        })
    }

    fn parse_if(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `if`
        self.expect(Token::LParen)?;
        let cond = self.parse_bool()?;
        self.expect(Token::RParen)?;
        let then_branch = self.parse_stmt()?;
        if !self.eat(Token::Else) {
            return Ok(Stmt::If {
                cond,
                body: Box::new(then_branch),
            });
        }
        let else_branch = self.parse_stmt()?;
        Ok(Stmt::Else {
            cond,
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    fn parse_return(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `return`
        let value = if self.peek_token() != Token::Semicolon {
            Some(self.parse_bool()?)
        } else {
            None
        };
        self.expect(Token::Semicolon)?;
        Ok(Stmt::Return(value))
    }

    /// `ID '=' bool ';'`, `ID offset '=' bool ';'` or `ID '(' args ')' ';'`.
    /// The name must resolve before the form is chosen.
    fn parse_assign(&mut self) -> ParseResult<Stmt> {
        let line = self.line();
        let name = self.expect_name()?;
        let symbol = self.resolve(&name, line)?;

        let stmt = match self.peek_token() {
            Token::LParen => Stmt::Call(self.parse_call(symbol)?),
            Token::LBracket => {
                let target = self.parse_offset(symbol)?;
                self.expect(Token::Assign)?;
                let value = self.parse_bool()?;
                Stmt::SetElem { target, value }
            }
            _ => {
                self.expect(Token::Assign)?;
                let value = self.parse_bool()?;
                Stmt::Set {
                    target: symbol,
                    value,
                }
            }
        };
        self.expect(Token::Semicolon)?;
        Ok(stmt)
    }
}
