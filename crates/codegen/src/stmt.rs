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

use ast::stmt::Stmt;
use ast::CompileError;

use crate::emitter::Label;
use crate::generator::Generator;

impl Generator<'_> {
    /// Emit code for `stmt`, which starts at label `begin` and continues
    /// at `next`.
    pub fn generate_stmt(
        &mut self,
        stmt: &Stmt,
        begin: Label,
        next: Label,
    ) -> Result<(), CompileError> {
        match stmt {
            Stmt::Null => {}
            Stmt::Seq(first, second) => {
                if first.is_null() {
                    self.generate_stmt(second, begin, next)?;
                } else if second.is_null() {
                    self.generate_stmt(first, begin, next)?;
                } else {
                    let label = self.new_label();
                    self.generate_stmt(first, begin, label)?;
                    self.emit_label(label);
                    self.generate_stmt(second, label, next)?;
                }
            }
            Stmt::Set { target, value } => {
                let value = self.reduce(value);
                self.emit(&format!("{} = {}", target.name, value));
            }
            Stmt::SetElem { target, value } => {
                let index = self.reduce(&target.index);
                let value = self.reduce(value);
                self.emit(&format!("{} [ {} ] = {}", target.array.name, index, value));
            }
            Stmt::If { cond, body } => {
                let label = self.new_label();
                self.jumping(cond, 0, next);
                self.emit_label(label);
                self.generate_stmt(body, label, next)?;
            }
            Stmt::Else {
                cond,
                then_branch,
                else_branch,
            } => {
                let then_label = self.new_label();
                let else_label = self.new_label();
                self.jumping(cond, 0, else_label);
                self.emit_label(then_label);
                self.generate_stmt(then_branch, then_label, next)?;
                self.emit(&format!("goto L{}", next));
                self.emit_label(else_label);
                self.generate_stmt(else_branch, else_label, next)?;
            }
            Stmt::While { cond, body } => {
                self.exits.push(next);
                self.jumping(cond, 0, next);
                let label = self.new_label();
                self.emit_label(label);
                let result = self.generate_stmt(body, label, begin);
                self.emit(&format!("goto L{}", begin));
                self.exits.pop();
                result?;
            }
            Stmt::Do { body, cond } => {
                self.exits.push(next);
                let label = self.new_label();
                let result = self.generate_stmt(body, begin, label);
                self.emit_label(label);
                self.jumping(cond, begin, 0);
                self.exits.pop();
                result?;
            }
            Stmt::Break { line } => match self.exits.last() {
                Some(&exit) => self.emit(&format!("goto L{}", exit)),
                None => return Err(CompileError::BreakOutsideLoop { line: *line }),
            },
            Stmt::Return(Some(value)) => {
                let value = self.reduce(value);
                self.emit(&format!("return {}", value));
            }
            Stmt::Return(None) => self.emit("return"),
            Stmt::Call(call) => {
                self.reduce_call(call);
            }
        }
        Ok(())
    }
}
