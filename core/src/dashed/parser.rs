use tracing::{debug, trace};

use super::cursor::Cursor;
use super::expand::OctetRange;
use super::sink::{OctetSink, SinkFull};
use super::state::{CharClass, Emit, Fault, State, transition};
use super::token::parse_octet;
use crate::error::ParseError;

/// Runs the dashed-notation state machine over `expression`.
///
/// Values emitted by a transition are validated and stored before the
/// cursor moves, so the first bad token aborts the parse on the spot.
pub fn parse_ranges(expression: &str) -> Result<[OctetRange; 4], ParseError> {
    let mut cursor = Cursor::new(expression);
    let mut sink = OctetSink::new();
    let mut state = State::Begin;

    trace!(expression, "parsing dashed range");

    loop {
        let index = cursor.position();
        let class = CharClass::of(cursor.peek());
        let step = transition(state, class).map_err(|fault| fault_error(fault, index))?;
        trace!(?state, ?class, next = ?step.next, index, "transition");

        if step.start_token {
            cursor.start_token();
        }

        for emit in step.emits {
            let (text, at) = match emit {
                Emit::Token => (cursor.token(), cursor.token_start()),
                _ => (emit.text(""), index),
            };
            let value = parse_octet(text).map_err(|err| ParseError::from_token(err, at))?;
            sink.push(value).map_err(|SinkFull| ParseError::ExcessInput {
                found: cursor.peek(),
                index,
            })?;
            debug!(token = text, value, filled = sink.len(), "octet value accepted");
        }

        match step.next {
            Some(next) => {
                state = next;
                cursor.advance();
            }
            None => break,
        }
    }

    sink.finish().ok_or(ParseError::Truncated {
        index: cursor.position(),
    })
}

fn fault_error(fault: Fault, index: usize) -> ParseError {
    match fault {
        Fault::Unexpected(found) => ParseError::Syntax { found, index },
        // Both end-of-input faults sit just past the last character.
        Fault::Empty => ParseError::Truncated { index },
        Fault::DanglingDot => ParseError::DanglingDot {
            index: index.saturating_sub(1),
        },
    }
}
