//! Tests for `if`, suites and `return` propagation.

use crate::{buffer_handler, Flow, InterpreterBuilder, Value};
use tpy_ir::{BinaryOp, ExprArena, ExprId, SharedInterner};

fn run_lines(interner: &SharedInterner, arena: &ExprArena, root: ExprId) -> Vec<String> {
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(interner, arena)
        .print_handler(handler.clone())
        .build();
    interpreter.run(root).unwrap();
    handler.lines()
}

mod truthiness_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn branch_taken(make_cond: impl FnOnce(&mut ExprArena) -> ExprId) -> String {
        let interner = SharedInterner::default();
        let mut arena = ExprArena::new();
        let cond = make_cond(&mut arena);
        let then_value = arena.int(1);
        let then_branch = arena.print(then_value);
        let else_value = arena.int(0);
        let else_branch = arena.print(else_value);
        let branch = arena.if_else(cond, then_branch, else_branch);
        let root = arena.suite([branch]);
        run_lines(&interner, &arena, root).concat()
    }

    #[test]
    fn zero_int_takes_else() {
        assert_eq!(branch_taken(|a| a.int(0)), "0");
    }

    #[test]
    fn zero_float_takes_else() {
        assert_eq!(branch_taken(|a| a.float(0.0)), "0");
    }

    #[test]
    fn none_takes_else() {
        assert_eq!(branch_taken(ExprArena::none), "0");
    }

    #[test]
    fn nonzero_takes_then() {
        assert_eq!(branch_taken(|a| a.int(-4)), "1");
        assert_eq!(branch_taken(|a| a.float(0.25)), "1");
    }

    #[test]
    fn comparison_result_drives_branch() {
        assert_eq!(
            branch_taken(|a| {
                let l = a.int(2);
                let r = a.int(3);
                a.binary(BinaryOp::Lt, l, r)
            }),
            "1"
        );
    }

    #[test]
    fn missing_else_does_nothing() {
        let interner = SharedInterner::default();
        let mut arena = ExprArena::new();
        let cond = arena.int(0);
        let value = arena.int(1);
        let then_branch = arena.print(value);
        let branch = arena.if_else(cond, then_branch, ExprId::EMPTY);
        let root = arena.suite([branch]);
        assert!(run_lines(&interner, &arena, root).is_empty());
    }

    #[test]
    fn empty_condition_is_malformed() {
        let interner = SharedInterner::default();
        let mut arena = ExprArena::new();
        let branch = arena.if_else(ExprId::EMPTY, ExprId::EMPTY, ExprId::EMPTY);
        let root = arena.suite([branch]);
        let mut interpreter = InterpreterBuilder::new(&interner, &arena)
            .print_handler(crate::silent_handler())
            .build();
        assert_eq!(
            interpreter.run(root).unwrap_err().message,
            "MalformedNode: if condition is empty"
        );
    }
}

mod return_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn return_inside_if_stops_function_body() {
        // def f(): { if 1: { return 1 }; print(99) }; print(f())
        let interner = SharedInterner::default();
        let mut arena = ExprArena::new();
        let f = interner.intern("f");
        let one = arena.int(1);
        let ret = arena.ret(one);
        let then_block = arena.suite([ret]);
        let cond = arena.int(1);
        let branch = arena.if_else(cond, then_block, ExprId::EMPTY);
        let marker = arena.int(99);
        let unreachable = arena.print(marker);
        let body = arena.suite([branch, unreachable]);
        let def = arena.func_def(f, None, body);
        let call = arena.call(f, None);
        let print = arena.print(call);
        let root = arena.suite([def, print]);

        assert_eq!(run_lines(&interner, &arena, root), vec!["1".to_string()]);
    }

    #[test]
    fn bare_return_yields_none() {
        let interner = SharedInterner::default();
        let mut arena = ExprArena::new();
        let f = interner.intern("f");
        let ret = arena.ret(ExprId::EMPTY);
        let body = arena.suite([ret]);
        let def = arena.func_def(f, None, body);
        let call = arena.call(f, None);
        let print = arena.print(call);
        let root = arena.suite([def, print]);

        assert_eq!(run_lines(&interner, &arena, root), vec!["None".to_string()]);
    }

    #[test]
    fn recursion_unwinds_through_returns() {
        // def fact(n): { if n < 2: { return 1 }; return n * fact(n - 1) }
        let interner = SharedInterner::default();
        let mut arena = ExprArena::new();
        let fact = interner.intern("fact");
        let n = interner.intern("n");

        let n1 = arena.ident(n);
        let two = arena.int(2);
        let small = arena.binary(BinaryOp::Lt, n1, two);
        let one = arena.int(1);
        let ret_one = arena.ret(one);
        let base = arena.suite([ret_one]);
        let guard = arena.if_else(small, base, ExprId::EMPTY);

        let n2 = arena.ident(n);
        let n3 = arena.ident(n);
        let one_again = arena.int(1);
        let pred = arena.binary(BinaryOp::Sub, n3, one_again);
        let rec = arena.call(fact, Some(vec![pred]));
        let product = arena.binary(BinaryOp::Mul, n2, rec);
        let ret_product = arena.ret(product);
        let body = arena.suite([guard, ret_product]);
        let def = arena.func_def(fact, Some(&[n]), body);

        let ten = arena.int(10);
        let call = arena.call(fact, Some(vec![ten]));
        let print = arena.print(call);
        let root = arena.suite([def, print]);

        assert_eq!(
            run_lines(&interner, &arena, root),
            vec!["3628800".to_string()]
        );
    }

    #[test]
    fn top_level_return_stops_program() {
        let interner = SharedInterner::default();
        let mut arena = ExprArena::new();
        let seven = arena.int(7);
        let ret = arena.ret(seven);
        let marker = arena.int(1);
        let print = arena.print(marker);
        let root = arena.suite([ret, print]);

        let handler = buffer_handler();
        let mut interpreter = InterpreterBuilder::new(&interner, &arena)
            .print_handler(handler.clone())
            .build();
        assert_eq!(interpreter.run(root).unwrap(), Some(Value::int(7)));
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn flow_value_covers_both_variants() {
        let interner = SharedInterner::default();
        let mut arena = ExprArena::new();
        let three = arena.int(3);
        let ret = arena.ret(three);
        let mut interpreter = InterpreterBuilder::new(&interner, &arena).build();

        let flow = interpreter.eval(ret).unwrap();
        assert!(matches!(flow, Flow::Return(_)));
        assert_eq!(flow.value().map(|v| interpreter.value(v)), Some(Value::int(3)));
        assert!(interpreter.env().has_return_signal());
        assert_eq!(Flow::Normal(None).value(), None);
    }
}
