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


use ast::CompileError;

use crate::{compile, compile_to_string, TextSink};

fn tac(source: &str) -> String {
    compile_to_string(source).unwrap()
}

#[test]
fn test_while_loop() {
    let out = tac("{ int i; i = 0; while (i < 10) { i = i + 1; } }");
    assert_eq!(
        out,
        "func_main:\n\
         L1:\ti = 0\n\
         L3:\tiffalse i < 10 goto L2\n\
         L4:\tt1 = i + 1\n\
         \ti = t1\n\
         \tgoto L3\n\
         L2:\treturn\n\
         endfunc_main\n"
    );
}

#[test]
fn test_function_call() {
    let out = tac("int f(int x) { return x + 1; } { int y; y = f(3); }");
    assert_eq!(
        out,
        "func_f:\n\
         L1:\tt1 = x + 1\n\
         \treturn t1\n\
         L2:\treturn\n\
         endfunc_f\n\
         func_main:\n\
         L3:\tparam 3\n\
         \tt2 = call f, 1\n\
         \ty = t2\n\
         L4:\treturn\n\
         endfunc_main\n"
    );
}

#[test]
fn test_arguments_reduced_before_params() {
    let out = tac("int g(int a, int b) { return a; } { int y; g(y + 1, 2); }");
    assert!(
        out.contains("\tt1 = y + 1\n\tparam t1\n\tparam 2\n\tt2 = call g, 2\n"),
        "{}",
        out
    );
}

#[test]
fn test_and_short_circuits() {
    let out = tac("{ int a; int b; int x; if (a < b && b < 10) x = 1; }");
    assert_eq!(
        out,
        "func_main:\n\
         L1:\tiffalse a < b goto L2\n\
         \tiffalse b < 10 goto L2\n\
         L3:\tx = 1\n\
         L2:\treturn\n\
         endfunc_main\n"
    );
}

#[test]
fn test_or_short_circuits() {
    let out = tac("{ int a; int b; int x; if (a < b || b < 10) x = 1; }");
    assert_eq!(
        out,
        "func_main:\n\
         L1:\tif a < b goto L4\n\
         \tiffalse b < 10 goto L2\n\
         L4:L3:\tx = 1\n\
         L2:\treturn\n\
         endfunc_main\n"
    );
}

#[test]
fn test_not_swaps_targets() {
    let out = tac("{ int a; int b; int x; if (!(a < b)) x = 1; }");
    assert!(out.contains("L1:\tif a < b goto L2\nL3:\tx = 1\n"), "{}", out);
}

#[test]
fn test_if_else() {
    let out = tac("{ int a; if (a == 0) a = 1; else a = 2; }");
    assert_eq!(
        out,
        "func_main:\n\
         L1:\tiffalse a == 0 goto L4\n\
         L3:\ta = 1\n\
         \tgoto L2\n\
         L4:\ta = 2\n\
         L2:\treturn\n\
         endfunc_main\n"
    );
}

#[test]
fn test_do_while() {
    let out = tac("{ int i; do i = i + 1; while (i < 10); }");
    assert_eq!(
        out,
        "func_main:\n\
         L1:\tt1 = i + 1\n\
         \ti = t1\n\
         L3:\tif i < 10 goto L1\n\
         L2:\treturn\n\
         endfunc_main\n"
    );
}

#[test]
fn test_break_leaves_innermost_loop() {
    let out = tac("{ int i; while (true) { while (i < 5) { break; } break; } }");
    assert_eq!(
        out,
        "func_main:\n\
         L1:L3:\tiffalse i < 5 goto L4\n\
         L5:\tgoto L4\n\
         \tgoto L3\n\
         L4:\tgoto L2\n\
         \tgoto L1\n\
         L2:\treturn\n\
         endfunc_main\n"
    );
}

#[test]
fn test_boolean_assignment_materialises() {
    let out = tac("{ bool x; int a; x = a < 1; }");
    assert_eq!(
        out,
        "func_main:\n\
         L1:\tiffalse a < 1 goto L3\n\
         \tt1 = true\n\
         \tgoto L4\n\
         L3:\tt1 = false\n\
         L4:\tx = t1\n\
         L2:\treturn\n\
         endfunc_main\n"
    );
}

#[test]
fn test_array_load_strides() {
    let out = tac("{ int[2][3] m; int i; int j; int x; x = m[i][j]; }");
    assert_eq!(
        out,
        "func_main:\n\
         L1:\tt1 = i * 12\n\
         \tt2 = j * 4\n\
         \tt3 = t1 + t2\n\
         \tt4 = m [ t3 ]\n\
         \tx = t4\n\
         L2:\treturn\n\
         endfunc_main\n"
    );
}

#[test]
fn test_array_store() {
    let out = tac("{ int[2][3] m; int i; int j; int x; m[i][j] = x + 1; }");
    assert!(
        out.contains(
            "L1:\tt1 = i * 12\n\tt2 = j * 4\n\tt3 = t1 + t2\n\tt4 = x + 1\n\tm [ t3 ] = t4\n"
        ),
        "{}",
        out
    );
}

#[test]
fn test_three_dimensional_index_counts() {
    let out = tac("{ int[2][3][4] a; int x; x = a[1][2][3]; }");
    let count = |needle: &str| out.lines().filter(|l| l.contains(needle)).count();
    assert_eq!(count(" * "), 3);
    assert_eq!(count(" + "), 2);
    assert_eq!(count(" [ "), 1);
}

#[test]
fn test_every_instruction_has_at_most_two_operands() {
    let out = tac("{ int a; int b; int c; int d; a = a * b + c * d - (a + b) / c; }");
    for line in out.lines().filter(|l| l.contains(" = ")) {
        let rhs = line.split(" = ").nth(1).unwrap();
        assert!(rhs.split(' ').count() <= 3, "{}", line);
    }
}

#[test]
fn test_unary_minus() {
    let out = tac("{ int a; int b; int x; x = -a * b; }");
    assert!(out.contains("\tt1 = minus a\n\tt2 = t1 * b\n\tx = t2\n"), "{}", out);
}

#[test]
fn test_return_forms() {
    let out = tac("int f(int a) { if (a > 0) return a; return; }");
    assert!(out.contains("\treturn a\n"), "{}", out);
    assert!(out.ends_with("\treturn\nL2:\treturn\nendfunc_f\n"), "{}", out);
}

#[test]
fn test_empty_program_emits_nothing() {
    assert_eq!(tac(""), "");
}

#[test]
fn test_compilation_is_repeatable() {
    let source = "int f(int n) { while (n > 0) n = n - 1; return n; } \
                  { int[3] a; int i; i = f(2); a[i] = i; }";
    assert_eq!(tac(source), tac(source));
}

#[test]
fn test_errors_emit_nothing() {
    let mut sink = TextSink::new();
    let err = compile("{ int a; a = 1; b = 2; }", &mut sink).unwrap_err();
    assert!(matches!(err, CompileError::UndeclaredIdentifier { ref name, .. } if name == "b"));
    assert_eq!(sink.as_str(), "");

    let err = compile("int f() { return; } { break; }", &mut sink).unwrap_err();
    assert!(matches!(err, CompileError::BreakOutsideLoop { .. }));
    assert_eq!(sink.as_str(), "");
}
