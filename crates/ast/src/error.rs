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

use thiserror::Error;

/// Every error the front end can raise. All of them are fatal: the first one
/// aborts the compilation and any partial output must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("near line {line}: syntax error: {message}")]
    Syntax { line: usize, message: String },

    #[error("near line {line}: {name} undeclared")]
    UndeclaredIdentifier { line: usize, name: String },

    #[error("near line {line}: unenclosed break")]
    BreakOutsideLoop { line: usize },

    #[error("near line {line}: invalid array bound {bound}")]
    InvalidArrayBound { line: usize, bound: i64 },
}

impl CompileError {
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        CompileError::Syntax {
            line,
            message: message.into(),
        }
    }

    pub fn line(&self) -> usize {
        match self {
            CompileError::Syntax { line, .. }
            | CompileError::UndeclaredIdentifier { line, .. }
            | CompileError::BreakOutsideLoop { line }
            | CompileError::InvalidArrayBound { line, .. } => *line,
        }
    }
}
