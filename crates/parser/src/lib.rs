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

pub mod env;
pub mod lexer;
pub mod parser;

#[cfg(test)]
mod tests;

use ast::{CompileError, Program};
use lexer::Lexer;
use parser::Parser;

/// Scan and parse a whole program, resolving every name against its scope.
///
/// No code is generated here; the returned tree is handed to the code
/// generator only once the entire source has been accepted.
pub fn parse(source: &str) -> Result<Program, CompileError> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(source, lexer);
    parser.parse_program()
}
