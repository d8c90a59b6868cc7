use std::fmt::Display;

use crate::{
    rt::{Evaluated, Evaluator},
    RpnNumber,
};

/// What the front end should do with one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The line was blank and nothing was evaluated.
    Skip,

    /// The user asked to leave.
    Quit,

    Value(RpnNumber),

    /// The message of the error that aborted the line.
    Error(String),
}

impl Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Skip | Response::Quit => Ok(()),
            Response::Value(value) => write!(f, "= {value}"),
            Response::Error(message) => write!(f, "error: {message}"),
        }
    }
}

/// Line-at-a-time driver shared by the interactive and batch front ends.
#[derive(Debug, Clone, Default)]
pub struct Session {
    evaluator: Evaluator,
}

impl Session {
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::new(),
        }
    }

    pub fn respond(&mut self, line: &str) -> Response {
        if line.trim().is_empty() {
            return Response::Skip;
        }

        match self.evaluator.evaluate(line) {
            Ok(Evaluated::Value(value)) => Response::Value(value),
            Ok(Evaluated::Quit) => Response::Quit,
            Err(error) => Response::Error(error.to_string()),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}
