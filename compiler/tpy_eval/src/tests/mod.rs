//! Operator and control-flow tests kept out of the implementation files.

mod control_tests;
mod unary_operators_tests;
