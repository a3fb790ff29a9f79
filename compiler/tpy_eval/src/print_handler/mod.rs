//! Where `print` output goes.
//!
//! The interpreter writes every rendered line through a shared handler:
//! - `Stdout` for the CLI (default)
//! - `Buffer` for tests and embedders that want the output back
//! - `Silent` to discard output
//!
//! Enum dispatch keeps the per-line path free of vtable calls.

use std::sync::Arc;

use parking_lot::Mutex;

/// Output sink for `print`.
pub enum PrintHandler {
    Stdout,
    /// Captures lines into a string buffer.
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandler {
    /// Write one line followed by a newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far; empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_owned).collect()
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Handler shared between the interpreter and whoever reads the output.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

/// Create a handler that captures output for later inspection.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
mod tests;
