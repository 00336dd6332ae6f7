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

use std::collections::HashMap;

use ast::Symbol;
use log::trace;

/// Lexically scoped symbol table.
///
/// Scopes form a stack; lookups walk from the innermost scope outwards so the
/// nearest declaration wins. The bottom scope is the global one and is never
/// popped.
#[derive(Debug, Clone)]
pub struct Env {
    scopes: Vec<HashMap<String, Symbol>>,
}

impl Env {
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    pub fn enter(&mut self) {
        self.scopes.push(HashMap::new());
        trace!("enter scope, depth {}", self.scopes.len());
    }

    pub fn exit(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
        trace!("exit scope, depth {}", self.scopes.len());
    }

    /// Install `symbol` in the current scope, returning any binding of the
    /// same name it replaced in that scope.
    pub fn declare(&mut self, symbol: Symbol) -> Option<Symbol> {
        self.scopes
            .last_mut()
            .and_then(|scope| scope.insert(symbol.name.clone(), symbol))
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Number of live scopes, counting the global one.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
