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
    // --- Top-level ---

    /// Parse a complete program: `function* block?`, then end of input.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut functions = Vec::new();
        while self.peek_token() == Token::Basic {
            functions.push(self.parse_function()?);
        }

        let main = if self.peek_token() == Token::LBrace {
            let start = self.peek_span();
            self.used = 0;
            let body = self.parse_block()?;
            Some(Spanned::new(body, start.start..self.current_span.end))
        } else {
            None
        };

        if self.peek_token() != Token::Eof {
            let found = self.describe_lookahead();
            return Err(self.syntax_error(format!(
                "expected a function or block, found {}",
                found
            )));
        }

        debug!(
            "parsed {} function(s), entry block: {}",
            functions.len(),
            main.is_some()
        );
        Ok(Program { functions, main })
    }

    /// `type ID '(' params? ')' block`
    ///
    /// The function name goes into the global scope before the parameters
    /// are read, so the body may call the function recursively. Each
    /// function gets its own frame: parameters take offsets from 0 and the
    /// body's locals continue after them.
    fn parse_function(&mut self) -> ParseResult<Spanned<Function>> {
        let start = self.peek_span();
        let return_type = self.parse_type()?;
        let name = self.expect_name()?;
        self.env.declare(Symbol::new(name.clone(), return_type.clone(), 0));

        self.expect(Token::LParen)?;
        self.env.enter();
        self.used = 0;
        let params = self.parse_params()?;
        self.expect(Token::RParen)?;
        let body = self.parse_block()?;
        self.env.exit();

        let end = self.current_span.end;
        Ok(Spanned::new(
            Function {
                name,
                return_type,
                params,
                body,
            },
            start.start..end,
        ))
    }

    /// `(type ID (',' type ID)*)?`
    fn parse_params(&mut self) -> ParseResult<Vec<Symbol>> {
        let mut params = Vec::new();
        if self.peek_token() == Token::RParen {
            return Ok(params);
        }
        loop {
            let line = self.line();
            let ty = self.parse_type()?;
            let name = self.expect_name()?;
            params.push(self.declare(name, ty, line)?);
            if !self.eat(Token::Comma) {
                break;
            }
        }
        Ok(params)
    }

    // --- Blocks and declarations ---

    /// `'{' decls stmts '}'`, in a fresh scope.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Stmt> {
        self.expect(Token::LBrace)?;
        self.env.enter();
        self.parse_decls()?;
        let body = self.parse_stmts()?;
        self.expect(Token::RBrace)?;
        self.env.exit();
        Ok(body)
    }

    /// `(type ID ';')*`
    fn parse_decls(&mut self) -> ParseResult<()> {
        while self.peek_token() == Token::Basic {
            let line = self.line();
            let ty = self.parse_type()?;
            let name = self.expect_name()?;
            self.expect(Token::Semicolon)?;
            self.declare(name, ty, line)?;
        }
        Ok(())
    }

    /// `BASIC ('[' NUM ']')*`
    ///
    /// Dimensions nest to the right: `int[2][3]` is an array of two rows,
    /// each an array of three ints.
    pub(crate) fn parse_type(&mut self) -> ParseResult<Type> {
        self.expect(Token::Basic)?;
        let keyword = self.last_text().to_string();
        let basic = match Basic::from_keyword(&keyword) {
            Some(basic) => basic,
            None => {
                return Err(CompileError::syntax(
                    self.lines.line_of(self.current_span.start),
                    format!("unknown type {}", keyword),
                ))
            }
        };

        let mut bounds = Vec::new();
        while self.peek_token() == Token::LBracket {
            self.advance();
            let line = self.line();
            let bound = self.expect_num()?;
            self.expect(Token::RBracket)?;
            bounds.push((bound, line));
        }

        bounds
            .into_iter()
            .rev()
            .try_fold(Type::Basic(basic), |of, (bound, line)| {
                ArrayType::new(bound, of)
                    .map(Type::Array)
                    .map_err(|InvalidArrayBound(bound)| CompileError::InvalidArrayBound {
                        line,
                        bound,
                    })
            })
    }
}
