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

use crate::op::*;
use crate::types::Type;
use crate::{Access, Call, Constant, Expr, Symbol, Temp};

fn id(name: &str) -> Expr {
    Expr::Id(Symbol::new(name, Type::INT, 0))
}

#[test]
fn test_display_of_composite_nodes() {
    let sum = Expr::arith(ArithOp::Add, id("a"), Expr::int(1));
    assert_eq!(sum.to_string(), "a + 1");
    assert_eq!(Expr::neg(id("x")).to_string(), "minus x");
    assert_eq!(
        Expr::rel(RelOp::LtE, id("i"), Expr::int(10)).to_string(),
        "i <= 10"
    );
    let both = Expr::And(Box::new(id("p")), Box::new(id("q")));
    assert_eq!(both.to_string(), "p && q");
    assert_eq!(Expr::Not(Box::new(id("p"))).to_string(), "! p");
}

#[test]
fn test_display_of_operands() {
    assert_eq!(Expr::Constant(Constant::Bool(true)).to_string(), "true");
    assert_eq!(Expr::Constant(Constant::Real("2.50".into())).to_string(), "2.50");
    let temp = Expr::Temp(Temp { number: 7, ty: Type::INT });
    assert_eq!(temp.to_string(), "t7");
    let access = Expr::Access(Access {
        array: Symbol::new("a", Type::INT, 0),
        index: Box::new(temp),
        ty: Type::INT,
    });
    assert_eq!(access.to_string(), "a [ t7 ]");
}

#[test]
fn test_types_propagate() {
    let real = Expr::Constant(Constant::Real("1.5".into()));
    assert_eq!(Expr::arith(ArithOp::Mul, id("n"), real).ty(), Type::FLOAT);
    assert_eq!(Expr::rel(RelOp::Eq, id("n"), Expr::int(0)).ty(), Type::BOOL);
    let call = Expr::Call(Call {
        function: Symbol::new("f", Type::FLOAT, 0),
        args: vec![],
    });
    assert_eq!(call.ty(), Type::FLOAT);
}

#[test]
fn test_operand_and_logical_classification() {
    assert!(id("x").is_operand());
    assert!(Expr::int(3).is_operand());
    assert!(!Expr::neg(id("x")).is_operand());
    assert!(Expr::Not(Box::new(id("x"))).is_logical());
    assert!(!Expr::arith(ArithOp::Sub, id("x"), id("y")).is_logical());
}
