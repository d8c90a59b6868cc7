use tracing::{debug, trace};

use crate::{
    lex::{LexError, Lexer, Operator, Token},
    stack::{Stack, StackUnderflow},
    RpnNumber,
};

/// Past this index every Fibonacci number overflows an `f64` to infinity.
const FIBONACCI_OVERFLOW_INDEX: u64 = 1477;

/// What a successfully evaluated line produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluated {
    /// The single value left on the stack.
    Value(RpnNumber),

    /// A `q` or `quit` word was reached; nothing after it was looked at.
    Quit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError<'src> {
    #[error(transparent)]
    StackUnderflow(#[from] StackUnderflow),

    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Cannot take the square root of negative number {0}.")]
    NegativeSquareRoot(RpnNumber),

    #[error("Fibonacci index {0} is negative.")]
    NegativeFibonacciIndex(RpnNumber),

    #[error("Incomplete expression, expected one value on the stack but got ({remaining}).")]
    IncompleteExpression { remaining: usize },

    #[error("{0}")]
    Lex(LexError<'src>),
}

impl<'src> From<LexError<'src>> for RuntimeError<'src> {
    fn from(error: LexError<'src>) -> Self {
        RuntimeError::Lex(error)
    }
}

pub type Evaluation<'src> = Result<Evaluated, RuntimeError<'src>>;

/// Our stack machine evaluator.
///
/// Owns the operand stack exclusively. Every call to [`Evaluator::evaluate`]
/// starts from an empty stack, so nothing carries over between lines.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    stack: Stack,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
        }
    }

    /// The operand stack as the last evaluation left it.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn evaluate<'src>(&mut self, line: &'src str) -> Evaluation<'src> {
        let evaluation = self.evaluate_line(line);
        match &evaluation {
            Ok(Evaluated::Value(value)) => debug!(line, value, "evaluated"),
            Ok(Evaluated::Quit) => debug!(line, "quit requested"),
            Err(error) => debug!(line, %error, depth = self.stack.size(), "evaluation failed"),
        }
        evaluation
    }

    fn evaluate_line<'src>(&mut self, line: &'src str) -> Evaluation<'src> {
        self.stack.clear();

        for token in Lexer::new(line) {
            let token = token?;
            trace!(?token, depth = self.stack.size(), "token");

            match token {
                Token::Quit => return Ok(Evaluated::Quit),
                Token::Number(number) => self.stack.push(number),
                Token::Operator(operator) => self.apply(operator)?,
            }
        }

        match self.stack.size() {
            1 => Ok(Evaluated::Value(self.stack.peek()?)),
            remaining => Err(RuntimeError::IncompleteExpression { remaining }),
        }
    }

    /// Pops the operands of `operator` and pushes its result.
    ///
    /// The first value popped is the right-hand operand. `/` checks its
    /// divisor before popping the dividend, so a division by zero leaves the
    /// dividend on the stack.
    fn apply<'src>(&mut self, operator: Operator) -> Result<(), RuntimeError<'src>> {
        let result = match operator {
            Operator::Add => {
                let (a, b) = self.pop_pair()?;
                a + b
            }
            Operator::Sub => {
                let (a, b) = self.pop_pair()?;
                a - b
            }
            Operator::Mul => {
                let (a, b) = self.pop_pair()?;
                a * b
            }
            Operator::Div => {
                let b = self.stack.pop()?;
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                let a = self.stack.pop()?;
                a / b
            }
            Operator::Pow => {
                let (a, b) = self.pop_pair()?;
                a.powf(b)
            }
            Operator::Sqrt => {
                let a = self.stack.pop()?;
                if a < 0.0 {
                    return Err(RuntimeError::NegativeSquareRoot(a));
                }
                a.sqrt()
            }
            Operator::Fib => {
                let index = self.stack.pop()?.trunc();
                if index < 0.0 {
                    return Err(RuntimeError::NegativeFibonacciIndex(index));
                }
                fibonacci(index)
            }
        };

        trace!(%operator, arity = operator.arity(), result, "applied");
        self.stack.push(result);
        Ok(())
    }

    /// Pops `b` then `a`, returning them in operand order.
    fn pop_pair(&mut self) -> Result<(RpnNumber, RpnNumber), StackUnderflow> {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        Ok((a, b))
    }
}

/// The Fibonacci number at a whole, non-negative `index`, with F(0) = 0 and F(1) = 1.
///
/// Computed in floating point, so large indices come out as infinity.
fn fibonacci(index: RpnNumber) -> RpnNumber {
    if index.is_nan() {
        return RpnNumber::NAN;
    }

    // Saturating cast, infinity lands above the overflow index too
    let index = index as u64;
    if index >= FIBONACCI_OVERFLOW_INDEX {
        return RpnNumber::INFINITY;
    }

    let (mut a, mut b): (RpnNumber, RpnNumber) = (0.0, 1.0);
    for _ in 0..index {
        (a, b) = (b, a + b);
    }
    a
}
