//! Transition table of the dashed-notation parser.
//!
//! ```text
//!            digit        '-'            '.'               end
//! Begin      StartByte*   Dash  [0]      error             error (empty)
//! StartByte  StartByte    Dash  [tok]    Dot [tok, tok]    accept [tok, tok]
//! Dash       EndByte*     error          Dot [255]         accept [255]
//! EndByte    EndByte      error          Dot [tok]         accept [tok]
//! Dot        StartByte*   Dash  [0]      error             error (dangling dot)
//! ```
//!
//! `*` starts a new token at the current character; brackets list the values
//! emitted before the cursor moves on.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Begin,
    /// Reading the low (or only) value of an octet.
    StartByte,
    /// Reading the high value of an octet.
    EndByte,
    Dash,
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Dash,
    Dot,
    Other(char),
    End,
}

impl CharClass {
    /// Any Unicode numeric character counts as a digit here; the token
    /// validator is what rejects the non-decimal ones.
    pub fn of(c: Option<char>) -> Self {
        match c {
            None => Self::End,
            Some('-') => Self::Dash,
            Some('.') => Self::Dot,
            Some(c) if c.is_numeric() => Self::Digit,
            Some(c) => Self::Other(c),
        }
    }
}

/// A value handed to the validator by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// The token read so far.
    Token,
    /// Omitted low bound.
    Zero,
    /// Omitted high bound.
    Max,
}

impl Emit {
    pub fn text<'a>(self, token: &'a str) -> &'a str {
        match self {
            Self::Token => token,
            Self::Zero => "0",
            Self::Max => "255",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// `None` accepts the input.
    pub next: Option<State>,
    pub start_token: bool,
    pub emits: &'static [Emit],
}

impl Step {
    const fn to(next: State) -> Self {
        Self {
            next: Some(next),
            start_token: false,
            emits: &[],
        }
    }

    const fn accept(emits: &'static [Emit]) -> Self {
        Self {
            next: None,
            start_token: false,
            emits,
        }
    }

    const fn emitting(self, emits: &'static [Emit]) -> Self {
        Self { emits, ..self }
    }

    const fn starting_token(self) -> Self {
        Self {
            start_token: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Unexpected(char),
    Empty,
    DanglingDot,
}

/// Looks up the step taken from `state` on a character of class `class`.
pub fn transition(state: State, class: CharClass) -> Result<Step, Fault> {
    use CharClass as C;
    use Emit::{Max, Token, Zero};

    let step = match (state, class) {
        (_, C::Other(c)) => return Err(Fault::Unexpected(c)),

        (State::Begin | State::Dot, C::Digit) => Step::to(State::StartByte).starting_token(),
        (State::Begin | State::Dot, C::Dash) => Step::to(State::Dash).emitting(&[Zero]),
        (State::Begin | State::Dot, C::Dot) => return Err(Fault::Unexpected('.')),
        (State::Begin, C::End) => return Err(Fault::Empty),
        (State::Dot, C::End) => return Err(Fault::DanglingDot),

        (State::StartByte, C::Digit) => Step::to(State::StartByte),
        (State::StartByte, C::Dash) => Step::to(State::Dash).emitting(&[Token]),
        (State::StartByte, C::Dot) => Step::to(State::Dot).emitting(&[Token, Token]),
        (State::StartByte, C::End) => Step::accept(&[Token, Token]),

        (State::Dash, C::Digit) => Step::to(State::EndByte).starting_token(),
        (State::Dash, C::Dot) => Step::to(State::Dot).emitting(&[Max]),
        (State::Dash, C::End) => Step::accept(&[Max]),

        (State::EndByte, C::Digit) => Step::to(State::EndByte),
        (State::EndByte, C::Dot) => Step::to(State::Dot).emitting(&[Token]),
        (State::EndByte, C::End) => Step::accept(&[Token]),

        (State::Dash | State::EndByte, C::Dash) => return Err(Fault::Unexpected('-')),
    };

    Ok(step)
}
