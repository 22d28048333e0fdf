use anyhow::Context;
use clap::Parser;

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod outcome;
pub mod trace;

use dispatch::Dispatcher;
use error::FuzzlingError;
use outcome::Outcome;
use trace::{LogTracer, NoopTracer, Session, Tracer};

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate and integration tests.
///
/// Walks the decision tree over the first positional argument and returns
/// the verdict; the fatal verdict is converted into the crate error here so
/// it unwinds to the binary boundary. Process exit is left to the caller.
pub fn run() -> Result<Outcome> {
    let args = cli::Args::parse();
    init_tracing(args.trace);

    let tracer: &dyn Tracer = if args.trace { &LogTracer } else { &NoopTracer };
    let session = Session::begin(tracer);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let outcome = Dispatcher::new(session.tracer(), args.style(), &mut out, &mut err)
        .execute(args.input.as_deref())
        .context("failed to dispatch input")?;

    match outcome {
        Outcome::Fatal => Err(FuzzlingError::Fault.into()),
        outcome => Ok(outcome),
    }
}

fn init_tracing(trace_enabled: bool) {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // --trace lifts the default so LogTracer events show up without
        // RUST_LOG; an explicit RUST_LOG still wins.
        let default_directive = if trace_enabled { "fuzzling=debug" } else { "warn" };
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
