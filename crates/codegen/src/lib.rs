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

mod emitter;
mod expr;
mod generator;
mod stmt;

#[cfg(test)]
mod tests;

use ast::CompileError;

pub use emitter::{Label, Sink, TextSink, WriteSink};
pub use generator::Generator;

/// Parse `source` and write its three-address code to `sink`.
///
/// Parsing finishes before anything is emitted, so on error the sink is
/// left untouched.
pub fn compile(source: &str, sink: &mut dyn Sink) -> Result<(), CompileError> {
    let program = parser::parse(source)?;
    let mut generator = Generator::new(sink);
    generator.generate_program(&program)
}

pub fn compile_to_string(source: &str) -> Result<String, CompileError> {
    let mut sink = TextSink::new();
    compile(source, &mut sink)?;
    Ok(sink.into_string())
}
