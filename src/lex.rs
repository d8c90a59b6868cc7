use std::{fmt::Display, str::SplitWhitespace};

use crate::RpnNumber;

/// Splits one input line into words and classifies them on demand.
///
/// Classification is lazy so that the evaluator sees errors in the same order
/// as the words appear on the line.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    words: SplitWhitespace<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            words: source.split_whitespace(),
        }
    }

    fn classify(word: &'src str) -> Result<Token, LexError<'src>> {
        if Self::is_quit(word) {
            return Ok(Token::Quit);
        }

        if is_numeric_literal(word) {
            return match word.parse::<RpnNumber>() {
                Ok(number) if Self::in_range(word, number) => Ok(Token::Number(number)),
                _ => Err(LexError::InvalidNumericLiteral(word)),
            };
        }

        Operator::from_symbol(word)
            .map(Token::Operator)
            .ok_or(LexError::UnknownOperator(word))
    }

    /// Rejects literals too large for an `f64` or so small they round to zero.
    fn in_range(word: &str, number: RpnNumber) -> bool {
        let nonzero_digit = word.bytes().any(|b| matches!(b, b'1'..=b'9'));
        number.is_finite() && (number != 0.0 || !nonzero_digit)
    }

    fn is_quit(word: &str) -> bool {
        matches!(word, "q" | "quit")
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, LexError<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.words.next().map(Self::classify)
    }
}

/// Whether `word` has the shape of a number: an optional leading `-`, then
/// digits with at most one `.` among them.
///
/// At least one digit is required, so `-`, `.` and `-.` are left for operator
/// dispatch.
pub fn is_numeric_literal(word: &str) -> bool {
    let body = word.strip_prefix('-').unwrap_or(word);

    let mut digits = 0;
    let mut dots = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }

    digits > 0 && dots <= 1
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Quit,
    Number(RpnNumber),
    Operator(Operator),
}

/// The closed set of operators understood by the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Sqrt,
    Fib,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "^" => Some(Operator::Pow),
            "sqrt" => Some(Operator::Sqrt),
            "fib" => Some(Operator::Fib),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Sqrt => "sqrt",
            Operator::Fib => "fib",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow => 2,
            Operator::Sqrt | Operator::Fib => 1,
        }
    }

    pub const ALL: [Operator; 7] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
        Operator::Sqrt,
        Operator::Fib,
    ];
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LexError<'src> {
    #[error("Unknown operator \"{0}\".")]
    UnknownOperator(&'src str),

    #[error("Number literal \"{0}\" failed to parse.")]
    InvalidNumericLiteral(&'src str),
}
