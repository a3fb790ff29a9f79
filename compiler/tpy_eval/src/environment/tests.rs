use super::*;
use pretty_assertions::assert_eq;
use tpy_ir::SharedInterner;
use tpy_value::{EvalErrorKind, Value, ValueArena};

#[test]
fn test_bind_and_resolve_in_global_frame() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");
    let mut values = ValueArena::new();
    let one = values.alloc(Value::int(1));

    let mut env = Environment::default();
    env.bind_value(x, one);
    assert_eq!(env.resolve_value(x), Ok(one));
    assert_eq!(env.depth(), 0);
}

#[test]
fn test_missing_name_is_not_defined() {
    let interner = SharedInterner::default();
    let y = interner.intern("y");

    let env = Environment::default();
    assert_eq!(env.resolve_value(y), Err(LookupError::NotDefined));
}

#[test]
fn test_inner_frame_sees_caller_bindings() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");
    let mut values = ValueArena::new();
    let one = values.alloc(Value::int(1));
    let two = values.alloc(Value::int(2));

    let mut env = Environment::default();
    env.bind_value(x, one);
    env.push_frame().unwrap();
    assert_eq!(env.resolve_value(x), Ok(one));

    env.bind_value(x, two);
    assert_eq!(env.resolve_value(x), Ok(two));

    env.pop_frame();
    assert_eq!(env.resolve_value(x), Ok(one));
}

#[test]
fn test_unbound_marker_shadows_outer_binding() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");
    let mut values = ValueArena::new();
    let one = values.alloc(Value::int(1));

    let mut env = Environment::default();
    env.bind_value(x, one);
    env.push_frame().unwrap();
    env.mark_unbound(x);
    assert_eq!(env.local_slot(x), Some(Slot::Unbound));
    assert_eq!(env.resolve_value(x), Err(LookupError::Unbound));

    env.bind_value(x, one);
    assert_eq!(env.resolve_value(x), Ok(one));
}

#[test]
fn test_mark_unbound_replaces_existing_local_value() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");
    let mut values = ValueArena::new();
    let one = values.alloc(Value::int(1));

    let mut env = Environment::default();
    env.bind_value(x, one);
    env.mark_unbound(x);
    assert_eq!(env.local_slot(x), Some(Slot::Unbound));
    assert_eq!(env.resolve_value(x), Err(LookupError::Unbound));
}

#[test]
fn test_functions_and_params_resolve_through_stack() {
    let interner = SharedInterner::default();
    let f = interner.intern("f");
    let body = ExprId::new(7);
    let params = ExprId::new(3);

    let mut env = Environment::default();
    env.bind_function(f, body);
    env.bind_params(f, params);
    env.push_frame().unwrap();
    assert_eq!(env.resolve_function(f), Some(body));
    assert_eq!(env.resolve_params(f), Some(params));

    // clearing only touches the top frame
    env.clear_params(f);
    assert_eq!(env.resolve_params(f), Some(params));
    env.pop_frame();
    env.clear_params(f);
    assert_eq!(env.resolve_params(f), None);
}

#[test]
fn test_return_slot_is_per_frame() {
    let mut values = ValueArena::new();
    let five = values.alloc(Value::int(5));

    let mut env = Environment::default();
    env.push_frame().unwrap();
    assert!(!env.has_return_signal());
    env.signal_return(five);
    assert!(env.has_return_signal());
    assert_eq!(env.take_return_value(), Some(five));
    assert!(!env.has_return_signal());
    assert_eq!(env.take_return_value(), None);
}

#[test]
fn test_push_fails_at_limit() {
    let mut env = Environment::new(3);
    for _ in 0..3 {
        env.push_frame().unwrap();
    }
    assert_eq!(env.depth(), 3);

    let err = env.push_frame().unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::RecursionLimitExceeded { limit: 3 });
    assert_eq!(env.depth(), 3);
}

#[test]
fn test_global_frame_survives_extra_pops() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");
    let mut values = ValueArena::new();
    let one = values.alloc(Value::int(1));

    let mut env = Environment::default();
    env.bind_value(x, one);
    env.pop_frame();
    env.pop_frame();
    assert_eq!(env.depth(), 0);
    assert_eq!(env.resolve_value(x), Ok(one));
    assert_eq!(env.recursion_limit(), DEFAULT_RECURSION_LIMIT);
}
