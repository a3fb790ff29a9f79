//! The `run` command: load a program tree and evaluate it.

use tpy_eval::{
    stdout_handler, CallResultBinding, EvalError, InterpreterBuilder, SharedPrintHandler,
    DEFAULT_RECURSION_LIMIT,
};

use crate::Program;

/// Printed after a program finishes without error.
pub const SUCCESS_MESSAGE: &str = "Program executed successfully";

/// Interpreter settings exposed on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub recursion_limit: usize,
    pub call_result_binding: CallResultBinding,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            call_result_binding: CallResultBinding::Enabled,
        }
    }
}

/// Parse `run` flags. Returns the options and the remaining positional
/// arguments, or a message describing the first bad flag.
pub fn parse_run_options(args: &[String]) -> Result<(RunOptions, Vec<String>), String> {
    let mut options = RunOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(limit) = arg.strip_prefix("--recursion-limit=") {
            options.recursion_limit = limit
                .parse()
                .map_err(|_| format!("invalid recursion limit '{limit}'"))?;
        } else if arg == "--no-call-result-binding" {
            options.call_result_binding = CallResultBinding::Disabled;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.clone());
        }
    }
    Ok((options, positional))
}

/// Evaluate a loaded program, writing `print` output to `handler`.
#[tracing::instrument(level = "debug", skip_all, fields(limit = options.recursion_limit))]
pub fn run_program(
    program: &Program,
    options: &RunOptions,
    handler: SharedPrintHandler,
) -> Result<(), EvalError> {
    let mut interpreter = InterpreterBuilder::new(&program.interner, &program.arena)
        .recursion_limit(options.recursion_limit)
        .call_result_binding(options.call_result_binding)
        .print_handler(handler)
        .build();
    interpreter.run(program.root)?;
    Ok(())
}

/// Load and run a program file, then exit: status 0 with the success
/// message, or status 1 with the error on stderr.
pub fn run_file(path: &str, options: &RunOptions) {
    let program = match Program::load(path) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match run_program(&program, options, stdout_handler()) {
        Ok(()) => println!("{SUCCESS_MESSAGE}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
