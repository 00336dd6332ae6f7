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

use std::fmt;

use crate::op::*;
use crate::types::Type;

/// A declared name: variable, parameter or function.
///
/// For functions `ty` is the declared return type and `offset` is unused.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
    pub offset: u64,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: Type, offset: u64) -> Self {
        Self {
            name: name.into(),
            ty,
            offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Int(i64),
    /// Real literals keep their source spelling.
    Real(String),
    Bool(bool),
}

impl Constant {
    pub fn ty(&self) -> Type {
        match self {
            Constant::Int(_) => Type::INT,
            Constant::Real(_) => Type::FLOAT,
            Constant::Bool(_) => Type::BOOL,
        }
    }
}

/// A compiler-generated temporary `tN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Temp {
    pub number: u32,
    pub ty: Type,
}

/// `array [ index ]`, where `index` is already the byte offset
/// (subscripts multiplied by their strides and summed).
#[derive(Debug, Clone, PartialEq)]
pub struct Access {
    pub array: Symbol,
    pub index: Box<Expr>,
    /// Element type reached after the last subscript.
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub function: Symbol,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(Constant),
    Id(Symbol),
    Temp(Temp),

    /// `left op right`
    Arith {
        op: ArithOp,
        left: Box<Expr>,
        right: Box<Expr>,
        ty: Type,
    },

    /// `-operand`
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        ty: Type,
    },

    /// `left op right` with a relational operator; always boolean
    Rel {
        op: RelOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `left && right`
    And(Box<Expr>, Box<Expr>),

    /// `left || right`
    Or(Box<Expr>, Box<Expr>),

    /// `!operand`
    Not(Box<Expr>),

    Access(Access),
    Call(Call),
}

impl Expr {
    pub fn int(value: i64) -> Self {
        Expr::Constant(Constant::Int(value))
    }

    pub fn arith(op: ArithOp, left: Expr, right: Expr) -> Self {
        let ty = Type::max(&left.ty(), &right.ty());
        Expr::Arith {
            op,
            left: Box::new(left),
            right: Box::new(right),
            ty,
        }
    }

    pub fn neg(operand: Expr) -> Self {
        let ty = Type::max(&operand.ty(), &Type::INT);
        Expr::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(operand),
            ty,
        }
    }

    pub fn rel(op: RelOp, left: Expr, right: Expr) -> Self {
        Expr::Rel {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ty(&self) -> Type {
        match self {
            Expr::Constant(c) => c.ty(),
            Expr::Id(symbol) => symbol.ty.clone(),
            Expr::Temp(temp) => temp.ty.clone(),
            Expr::Arith { ty, .. } | Expr::Unary { ty, .. } => ty.clone(),
            Expr::Rel { .. } | Expr::And(..) | Expr::Or(..) | Expr::Not(_) => Type::BOOL,
            Expr::Access(access) => access.ty.clone(),
            Expr::Call(call) => call.function.ty.clone(),
        }
    }

    /// True for names, constants and temporaries: the forms an instruction
    /// may use directly as an operand.
    pub fn is_operand(&self) -> bool {
        matches!(self, Expr::Constant(_) | Expr::Id(_) | Expr::Temp(_))
    }

    /// True for nodes whose value is produced by jumping code.
    pub fn is_logical(&self) -> bool {
        matches!(
            self,
            Expr::Rel { .. } | Expr::And(..) | Expr::Or(..) | Expr::Not(_)
        )
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(value) => write!(f, "{}", value),
            Constant::Real(text) => f.write_str(text),
            Constant::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for Temp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.number)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(c) => write!(f, "{}", c),
            Expr::Id(symbol) => f.write_str(&symbol.name),
            Expr::Temp(temp) => write!(f, "{}", temp),
            Expr::Arith { op, left, right, .. } => write!(f, "{} {} {}", left, op, right),
            Expr::Unary { op, operand, .. } => write!(f, "{} {}", op, operand),
            Expr::Rel { op, left, right } => write!(f, "{} {} {}", left, op, right),
            Expr::And(left, right) => write!(f, "{} && {}", left, right),
            Expr::Or(left, right) => write!(f, "{} || {}", left, right),
            Expr::Not(operand) => write!(f, "! {}", operand),
            Expr::Access(access) => write!(f, "{} [ {} ]", access.array.name, access.index),
            Expr::Call(call) => {
                write!(f, "call {}, {}", call.function.name, call.args.len())
            }
        }
    }
}
