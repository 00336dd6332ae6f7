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

use ast::types::Type;
use ast::{Access, Call, Constant, Expr};

use crate::emitter::Label;
use crate::generator::Generator;

impl Generator<'_> {
    /// Reduce `expr` to something an instruction can name directly:
    /// a constant, an identifier, or a fresh temporary holding its value.
    pub fn reduce(&mut self, expr: &Expr) -> Expr {
        match expr {
            Expr::Constant(_) | Expr::Id(_) | Expr::Temp(_) => expr.clone(),
            Expr::Arith { op, left, right, ty } => {
                let left = self.reduce(left);
                let right = self.reduce(right);
                let flat = Expr::Arith {
                    op: *op,
                    left: Box::new(left),
                    right: Box::new(right),
                    ty: ty.clone(),
                };
                self.assign_temp(flat)
            }
            Expr::Unary { op, operand, ty } => {
                let operand = self.reduce(operand);
                let flat = Expr::Unary {
                    op: *op,
                    operand: Box::new(operand),
                    ty: ty.clone(),
                };
                self.assign_temp(flat)
            }
            Expr::Access(access) => {
                let flat = Expr::Access(self.reduce_access(access));
                self.assign_temp(flat)
            }
            Expr::Call(call) => self.reduce_call(call),
            Expr::Rel { .. } | Expr::And(..) | Expr::Or(..) | Expr::Not(_) => {
                self.materialize(expr)
            }
        }
    }

    /// The value of `expr` as an operand. Boolean expressions are
    /// materialised through jumping code; everything else is reduced.
    pub fn generate(&mut self, expr: &Expr) -> Expr {
        if expr.is_logical() {
            self.materialize(expr)
        } else {
            self.reduce(expr)
        }
    }

    /// Same array and element type, index reduced to an operand.
    pub(crate) fn reduce_access(&mut self, access: &Access) -> Access {
        Access {
            array: access.array.clone(),
            index: Box::new(self.reduce(&access.index)),
            ty: access.ty.clone(),
        }
    }

    fn assign_temp(&mut self, flat: Expr) -> Expr {
        let temp = self.new_temp(flat.ty());
        self.emit(&format!("{} = {}", temp, flat));
        Expr::Temp(temp)
    }

    /// Arguments are all reduced before the first `param`.
    pub(crate) fn reduce_call(&mut self, call: &Call) -> Expr {
        let args: Vec<Expr> = call.args.iter().map(|arg| self.reduce(arg)).collect();
        for arg in &args {
            self.emit(&format!("param {}", arg));
        }
        let temp = self.new_temp(call.function.ty.clone());
        self.emit(&format!(
            "{} = call {}, {}",
            temp,
            call.function.name,
            args.len()
        ));
        Expr::Temp(temp)
    }

    /// Turn a boolean expression into a value:
    ///
    /// ```text
    ///     <jumping code, false exit to Lf>
    ///     t = true
    ///     goto La
    /// Lf: t = false
    /// La:
    /// ```
    fn materialize(&mut self, expr: &Expr) -> Expr {
        let f = self.new_label();
        let after = self.new_label();
        let temp = self.new_temp(Type::BOOL);
        self.jumping(expr, 0, f);
        self.emit(&format!("{} = true", temp));
        self.emit(&format!("goto L{}", after));
        self.emit_label(f);
        self.emit(&format!("{} = false", temp));
        self.emit_label(after);
        Expr::Temp(temp)
    }

    /// Jumping code for `expr`: control reaches `t` when it is true and `f`
    /// when it is false, where `0` on either side means fall through.
    pub fn jumping(&mut self, expr: &Expr, t: Label, f: Label) {
        match expr {
            Expr::Constant(Constant::Bool(true)) => {
                if t != 0 {
                    self.emit(&format!("goto L{}", t));
                }
            }
            Expr::Constant(Constant::Bool(false)) => {
                if f != 0 {
                    self.emit(&format!("goto L{}", f));
                }
            }
            Expr::Constant(_) | Expr::Id(_) | Expr::Temp(_) => {
                self.emit_jumps(&expr.to_string(), t, f);
            }
            Expr::And(left, right) => {
                let label = if f != 0 { f } else { self.new_label() };
                self.jumping(left, 0, label);
                self.jumping(right, t, f);
                if f == 0 {
                    self.emit_label(label);
                }
            }
            Expr::Or(left, right) => {
                let label = if t != 0 { t } else { self.new_label() };
                self.jumping(left, label, 0);
                self.jumping(right, t, f);
                if t == 0 {
                    self.emit_label(label);
                }
            }
            Expr::Not(operand) => self.jumping(operand, f, t),
            Expr::Rel { op, left, right } => {
                let left = self.reduce(left);
                let right = self.reduce(right);
                self.emit_jumps(&format!("{} {} {}", left, op, right), t, f);
            }
            Expr::Arith { .. } | Expr::Unary { .. } | Expr::Access(_) | Expr::Call(_) => {
                let operand = self.reduce(expr);
                self.emit_jumps(&operand.to_string(), t, f);
            }
        }
    }

    pub(crate) fn emit_jumps(&mut self, test: &str, t: Label, f: Label) {
        match (t, f) {
            (0, 0) => {}
            (t, 0) => self.emit(&format!("if {} goto L{}", test, t)),
            (0, f) => self.emit(&format!("iffalse {} goto L{}", test, f)),
            (t, f) => {
                self.emit(&format!("if {} goto L{}", test, t));
                self.emit(&format!("goto L{}", f));
            }
        }
    }
}
