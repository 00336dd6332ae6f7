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

use crate::{Access, Call, Expr, Symbol};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Empty statement, also the start of every sequence
    Null,

    /// `first second`
    Seq(Box<Stmt>, Box<Stmt>),

    /// `target = value;`
    Set {
        target: Symbol,
        value: Expr,
    },

    /// `a[i]...[k] = value;`
    SetElem {
        target: Access,
        value: Expr,
    },

    /// `if (cond) body`
    If {
        cond: Expr,
        body: Box<Stmt>,
    },

    /// `if (cond) then_branch else else_branch`
    Else {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Box<Stmt>,
    },

    /// `while (cond) body`
    While {
        cond: Expr,
        body: Box<Stmt>,
    },

    /// `do body while (cond);`
    Do {
        body: Box<Stmt>,
        cond: Expr,
    },

    /// `break;` with the line it appeared on
    Break {
        line: usize,
    },

    /// `return;` / `return expr;`
    Return(Option<Expr>),

    /// Function call evaluated for its side effects: `f(a, b);`
    Call(Call),
}

impl Stmt {
    pub fn seq(first: Stmt, second: Stmt) -> Self {
        Stmt::Seq(Box::new(first), Box::new(second))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Stmt::Null)
    }
}
