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
    /// Entry point for expression parsing: `join ('||' join)*`.
    pub fn parse_bool(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_join()?;
        while self.eat(Token::Or) {
            let right = self.parse_join()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    // &&
    fn parse_join(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;
        while self.eat(Token::And) {
            let right = self.parse_equality()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    // == !=
    fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_rel()?;
        loop {
            let op = match self.peek_token() {
                Token::Eq => RelOp::Eq,
                Token::NotEq => RelOp::NotEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_rel()?;
            left = Expr::rel(op, left, right);
        }
        Ok(left)
    }

    // < <= > >=
    fn parse_rel(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_arith()?;
        loop {
            let op = match self.peek_token() {
                Token::Lt => RelOp::Lt,
                Token::Le => RelOp::LtE,
                Token::Gt => RelOp::Gt,
                Token::Ge => RelOp::GtE,
                _ => break,
            };
            self.advance();
            let right = self.parse_arith()?;
            left = Expr::rel(op, left, right);
        }
        Ok(left)
    }

    // + -
    fn parse_arith(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek_token() {
                Token::Plus => ArithOp::Add,
                Token::Minus => ArithOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = Expr::arith(op, left, right);
        }
        Ok(left)
    }

    // * /
    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_token() {
                Token::Star => ArithOp::Mul,
                Token::Slash => ArithOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::arith(op, left, right);
        }
        Ok(left)
    }
}
