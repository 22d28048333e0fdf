use crate::outcome::Outcome;

/// Casing of the printed terminal identifiers.
///
/// The letter itself is the contract; its case is a presentation knob so
/// harness fixtures can be regenerated in either convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentifierStyle {
    #[default]
    Uppercase,
    Lowercase,
}

/// Output stream a terminal announcement is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Leaf of the decision tree, reached after three binary decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    C,
    D,
    E,
    F,
}

impl Terminal {
    /// Stable tag reported to the instrumentation hook on entry.
    pub fn trace_id(self) -> u32 {
        match self {
            Terminal::C => 61_360,
            Terminal::D => 516,
            Terminal::E => 37_587,
            Terminal::F => 29_875,
        }
    }

    /// Identifier printed to stdout on arrival.
    pub fn identifier(self, style: IdentifierStyle) -> &'static str {
        match (self, style) {
            (Terminal::C, IdentifierStyle::Uppercase) => "C",
            (Terminal::D, IdentifierStyle::Uppercase) => "D",
            (Terminal::E, IdentifierStyle::Uppercase) => "E",
            (Terminal::F, IdentifierStyle::Uppercase) => "F",
            (Terminal::C, IdentifierStyle::Lowercase) => "c",
            (Terminal::D, IdentifierStyle::Lowercase) => "d",
            (Terminal::E, IdentifierStyle::Lowercase) => "e",
            (Terminal::F, IdentifierStyle::Lowercase) => "f",
        }
    }

    /// Extra line written after the identifier, if the terminal announces
    /// anything, and the stream it goes to.
    pub fn announcement(self) -> Option<(Stream, &'static str)> {
        match self {
            Terminal::C | Terminal::E => None,
            Terminal::D => Some((Stream::Stdout, "Exiting!")),
            Terminal::F => Some((Stream::Stderr, "Error!")),
        }
    }

    pub fn outcome(self) -> Outcome {
        match self {
            Terminal::C => Outcome::Success,
            Terminal::D => Outcome::SuccessWithExit,
            Terminal::E => Outcome::Fatal,
            Terminal::F => Outcome::Failure,
        }
    }
}
