//! The decision tree: three binary choices over the leading characters of
//! the input, routing to one of four terminals.

use std::io::Write;

pub mod terminal;

use crate::error::DispatchResult;
use crate::outcome::Outcome;
use crate::trace::Tracer;

pub use terminal::{IdentifierStyle, Stream, Terminal};

/// Trace tags for the interior decision points.
pub const TRACE_ROOT: u32 = 50_460;
pub const TRACE_NODE_A: u32 = 7_880;
pub const TRACE_NODE_B: u32 = 44_666;

/// Branch pivot: characters strictly below it take the low branch.
const PIVOT: char = 'a';

/// Walks the tree for a single invocation.
///
/// The tracer and both output streams are injected, so the walk has no
/// process-global effects and no say over process termination.
pub struct Dispatcher<'a, O, E> {
    tracer: &'a dyn Tracer,
    style: IdentifierStyle,
    stdout: &'a mut O,
    stderr: &'a mut E,
}

impl<'a, O: Write, E: Write> Dispatcher<'a, O, E> {
    pub fn new(
        tracer: &'a dyn Tracer,
        style: IdentifierStyle,
        stdout: &'a mut O,
        stderr: &'a mut E,
    ) -> Self {
        Self {
            tracer,
            style,
            stdout,
            stderr,
        }
    }

    /// Routes `input` through the tree and reports the terminal's verdict.
    ///
    /// Running out of characters at any depth is the sole non-terminal
    /// path: the walk stops silently with [`Outcome::Success`].
    pub fn execute(&mut self, input: Option<&str>) -> DispatchResult<Outcome> {
        self.tracer.trace(TRACE_ROOT);
        match input.and_then(split_first) {
            None => Ok(Outcome::Success),
            Some((first, rest)) if first < PIVOT => self.node_a(rest),
            Some((_, rest)) => self.node_b(rest),
        }
    }

    /// Low branch of the root.
    fn node_a(&mut self, arg: &str) -> DispatchResult<Outcome> {
        self.tracer.trace(TRACE_NODE_A);
        match split_first(arg) {
            None => Ok(Outcome::Success),
            Some((c, rest)) if c < PIVOT => self.leaf(Terminal::C, rest),
            Some((_, rest)) => self.leaf(Terminal::D, rest),
        }
    }

    /// High branch of the root.
    fn node_b(&mut self, arg: &str) -> DispatchResult<Outcome> {
        self.tracer.trace(TRACE_NODE_B);
        match split_first(arg) {
            None => Ok(Outcome::Success),
            Some((c, rest)) if c < PIVOT => self.leaf(Terminal::E, rest),
            Some((_, rest)) => self.leaf(Terminal::F, rest),
        }
    }

    /// Depth 3: landing on a terminal still consumes a character, so a walk
    /// whose input is exhausted here halts like any other exhausted node.
    fn leaf(&mut self, terminal: Terminal, arg: &str) -> DispatchResult<Outcome> {
        if arg.is_empty() {
            return Ok(Outcome::Success);
        }
        self.arrive(terminal)
    }

    fn arrive(&mut self, terminal: Terminal) -> DispatchResult<Outcome> {
        self.tracer.trace(terminal.trace_id());
        writeln!(self.stdout, "{}", terminal.identifier(self.style))?;
        if let Some((stream, line)) = terminal.announcement() {
            match stream {
                Stream::Stdout => writeln!(self.stdout, "{line}")?,
                Stream::Stderr => writeln!(self.stderr, "{line}")?,
            }
        }
        Ok(terminal.outcome())
    }
}

/// Splits the compared character off the front; `None` once the argument
/// is exhausted.
fn split_first(arg: &str) -> Option<(char, &str)> {
    let mut chars = arg.chars();
    let first = chars.next()?;
    Some((first, chars.as_str()))
}
