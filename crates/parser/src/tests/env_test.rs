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
use ast::Symbol;

use crate::env::Env;

#[test]
fn test_nearest_declaration_wins() {
    let mut env = Env::new();
    env.declare(Symbol::new("x", Type::INT, 0));
    env.enter();
    env.declare(Symbol::new("x", Type::FLOAT, 4));
    assert_eq!(env.lookup("x").map(|s| &s.ty), Some(&Type::FLOAT));
    env.exit();
    assert_eq!(env.lookup("x").map(|s| &s.ty), Some(&Type::INT));
}

#[test]
fn test_lookup_walks_outward() {
    let mut env = Env::new();
    env.declare(Symbol::new("g", Type::INT, 0));
    env.enter();
    env.enter();
    assert_eq!(env.depth(), 3);
    assert!(env.lookup("g").is_some());
    assert!(env.lookup("missing").is_none());
}

#[test]
fn test_exit_discards_scope() {
    let mut env = Env::new();
    env.enter();
    env.declare(Symbol::new("local", Type::CHAR, 0));
    env.exit();
    assert!(env.lookup("local").is_none());
}

#[test]
fn test_global_scope_survives_extra_exit() {
    let mut env = Env::new();
    env.declare(Symbol::new("f", Type::INT, 0));
    env.exit();
    assert_eq!(env.depth(), 1);
    assert!(env.lookup("f").is_some());
}

#[test]
fn test_redeclaration_in_same_scope_replaces() {
    let mut env = Env::new();
    assert!(env.declare(Symbol::new("x", Type::INT, 0)).is_none());
    let previous = env.declare(Symbol::new("x", Type::FLOAT, 4));
    assert_eq!(previous.map(|s| s.ty), Some(Type::INT));
    assert_eq!(env.lookup("x").map(|s| s.offset), Some(4));
}
