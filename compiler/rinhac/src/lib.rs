//! Rinha driver library.
//!
//! Reads a program in its JSON AST form, evaluates it, and reports failures.
//! The `rinha` binary is a thin argument parser over this crate.

use std::io;
use std::path::Path;
use std::sync::Once;

use rinha_eval::{stdout_handler, EvalError, Interpreter, SharedPrintHandler, Value};
use rinha_ir::File;
use thiserror::Error;

/// Options for a single program run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Limit on nested closure calls. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Print the final value after the program finishes.
    pub print_result: bool,
}

/// Anything that stops a program from running to completion.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{}", describe_io(.path, .source))]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid program: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Eval(#[from] EvalError),
}

fn describe_io(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

/// Read and decode a program file.
pub fn read_program(path: &Path) -> Result<File, RunError> {
    let source = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(File::from_json(&source)?)
}

/// Run a decoded program, sending `print` output to `handler`.
///
/// With `print_result`, the final value goes to the same handler after the
/// program's own output.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file.name))]
pub fn run_program(
    file: &File,
    options: &RunOptions,
    handler: SharedPrintHandler,
) -> Result<Value, RunError> {
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .max_call_depth(options.max_depth)
        .build();
    let value = interpreter.run_file(file)?;
    if options.print_result {
        handler.println(&value.render());
    }
    Ok(value)
}

/// Read, decode, and run the program at `path`, printing to stdout.
pub fn run_path(path: &Path, options: &RunOptions) -> Result<Value, RunError> {
    let file = read_program(path)?;
    run_program(&file, options, stdout_handler())
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Logs go to stderr so they never mix with program output on stdout.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
