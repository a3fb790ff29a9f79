use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_handler_appends_newline() {
    let handler = buffer_handler();
    handler.println("hello");
    assert_eq!(handler.output(), "hello\n");
}

#[test]
fn buffer_handler_empty_line() {
    let handler = buffer_handler();
    handler.println("");
    handler.println("x");
    assert_eq!(handler.output(), "\nx\n");
    assert_eq!(handler.lines(), vec![String::new(), "x".to_string()]);
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = buffer_handler();
    handler.println("hello");
    assert!(!handler.output().is_empty());
    handler.clear();
    assert!(handler.output().is_empty());
}

#[test]
fn non_capturing_handlers_report_nothing() {
    let silent = silent_handler();
    silent.println("dropped");
    assert_eq!(silent.output(), "");

    assert_eq!(stdout_handler().output(), "");
}

#[test]
fn shared_handler_sees_writes_through_clone() {
    let handler = buffer_handler();
    let writer = Arc::clone(&handler);
    writer.println("1");
    writer.println("2.5");
    assert_eq!(handler.lines(), vec!["1".to_string(), "2.5".to_string()]);
}
