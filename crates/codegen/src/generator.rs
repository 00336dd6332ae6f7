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

use std::ops::Range;

use ast::stmt::Stmt;
use ast::types::Type;
use ast::{CompileError, Program, Temp};
use log::debug;

use crate::emitter::{Label, Sink};

/// Per-compilation code generation state.
///
/// Owns the label and temporary counters, so two generators never share
/// numbering, plus the stack of exit labels of the loops being generated.
pub struct Generator<'s> {
    sink: &'s mut dyn Sink,
    labels: Label,
    temps: u32,
    pub(crate) exits: Vec<Label>,
}

impl<'s> Generator<'s> {
    pub fn new(sink: &'s mut dyn Sink) -> Self {
        Self {
            sink,
            labels: 0,
            temps: 0,
            exits: Vec::new(),
        }
    }

    pub fn new_label(&mut self) -> Label {
        self.labels += 1;
        self.labels
    }

    pub fn new_temp(&mut self, ty: Type) -> Temp {
        self.temps += 1;
        Temp {
            number: self.temps,
            ty,
        }
    }

    pub(crate) fn emit(&mut self, instruction: &str) {
        self.sink.emit(instruction);
    }

    pub(crate) fn emit_label(&mut self, label: Label) {
        self.sink.emit_label(label);
    }

    /// Functions in source order, then the entry block as `main`.
    pub fn generate_program(&mut self, program: &Program) -> Result<(), CompileError> {
        for function in &program.functions {
            self.generate_unit(&function.node.name, &function.node.body, &function.span)?;
        }
        if let Some(main) = &program.main {
            self.generate_unit("main", &main.node, &main.span)?;
        }
        Ok(())
    }

    /// ```text
    /// func_<name>:
    /// L<begin>:...body...
    /// L<after>:	return
    /// endfunc_<name>
    /// ```
    fn generate_unit(
        &mut self,
        name: &str,
        body: &Stmt,
        span: &Range<usize>,
    ) -> Result<(), CompileError> {
        debug!("generating {} from source bytes {:?}", name, span);
        self.sink.emit_raw(&format!("func_{}:", name));
        let begin = self.new_label();
        let after = self.new_label();
        self.emit_label(begin);
        self.generate_stmt(body, begin, after)?;
        self.emit_label(after);
        self.emit("return");
        self.sink.emit_raw(&format!("endfunc_{}", name));
        Ok(())
    }
}
