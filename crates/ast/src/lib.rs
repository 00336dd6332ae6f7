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

pub mod error;
pub mod expr;
pub mod op;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;

use logos::Span;
use stmt::Stmt;
use types::Type;

pub use error::CompileError;
pub use expr::{Access, Call, Constant, Expr, Symbol, Temp};

/// Every top-level item carries the source span it was parsed from.
#[derive(Debug, Clone)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A function declaration: `type name(params) { body }`.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub return_type: Type,
    /// Parameters in declaration order, with their frame offsets already assigned.
    pub params: Vec<Symbol>,
    pub body: Stmt,
}

/// A whole translation unit: zero or more functions followed by an optional
/// anonymous entry block.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub functions: Vec<Spanned<Function>>,
    pub main: Option<Spanned<Stmt>>,
}
