use crate::error::Error;
use crate::lexer::Lexer;
use crate::postfix;
use crate::syntax;
use crate::token::{Side, Symbol, Token, TokenKind};
use std::fmt::{self, Display, Formatter};

/// Evaluate the formula `expression` with the given `arguments`, bound in
/// order to the variables `A`, `B`, `C`, ...
///
/// Returns `Ok(true)` if the formula evaluates to a non-zero value,
/// `Ok(false)` if it evaluates to zero, or `Err(cause)` if any stage of the
/// evaluation failed. The formula is compiled again on every call.
///
/// # Example
///
/// ```
/// # use mathex::evaluate;
/// assert_eq!(evaluate("A > 2 && B < 3", &[5.0, 1.0]), Ok(true));
/// assert_eq!(evaluate("max(A, B) == 3", &[1.0, 2.0]), Ok(false));
/// assert!(evaluate("A + B", &[1.0]).is_err());
/// ```
pub fn evaluate(expression: &str, arguments: &[f64]) -> Result<bool, Error> {
    Program::compile(expression, arguments.len())?.eval(arguments)
}

/// A formula checked and compiled to reverse polish notation.
///
/// # Examples
/// ```
/// # use mathex::Program;
/// let program = Program::compile("A * 2 + B", 2).unwrap();
/// assert_eq!(program.to_string(), "A 2 * B +");
/// assert_eq!(program.execute(&[3.0, 1.0]), Ok(7.0));
/// assert_eq!(program.eval(&[0.0, 0.0]), Ok(false));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    tokens: Vec<Token>,
    variable_count: usize,
}

impl Program {
    /// Compile `expression` for a call with `variable_count` arguments.
    ///
    /// The formula must use exactly the variables `A` to the
    /// `variable_count`-th letter group, without gaps.
    ///
    /// # Examples
    /// ```
    /// # use mathex::Program;
    /// // A valid formula
    /// assert!(Program::compile("abs(A - B) < 0.5", 2).is_ok());
    /// // B is never used
    /// assert!(Program::compile("A + C", 2).is_err());
    /// ```
    pub fn compile(expression: &str, variable_count: usize) -> Result<Self, Error> {
        let tokens = Lexer::new(expression).tokenize()?;
        syntax::check(&tokens, variable_count)?;
        let tokens = postfix::compile(&tokens)?;
        postfix::check_arity(&tokens)?;
        Ok(Self {
            tokens,
            variable_count,
        })
    }

    /// The tokens of the program, in execution order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of arguments the program must be executed with
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Run the program and get the numeric result
    pub fn execute(&self, arguments: &[f64]) -> Result<f64, Error> {
        if arguments.len() != self.variable_count {
            return Err(Error::Input(format!(
                "expected {} argument(s), got {}",
                self.variable_count,
                arguments.len()
            )));
        }

        let mut stack: Vec<f64> = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            let value = match token.kind {
                TokenKind::Number(value) => value,
                TokenKind::Variable(index) => index
                    .checked_sub(1)
                    .and_then(|i| arguments.get(i))
                    .copied()
                    .ok_or_else(|| Error::Execution(format!("{} is not bound", token)))?,
                TokenKind::Symbol(symbol) => {
                    let value = match symbol.side() {
                        Side::Both => {
                            let right = pop(&mut stack, token)?;
                            let left = pop(&mut stack, token)?;
                            binary(symbol, left, right)
                        }
                        Side::RightOnly => unary(symbol, pop(&mut stack, token)?),
                        Side::LeftOnly => None,
                    };
                    value.ok_or_else(|| {
                        Error::Execution(format!("{} can not be executed", token))
                    })?
                }
                TokenKind::Function(function) => {
                    let arity = function.arity();
                    if stack.len() < arity {
                        return Err(Error::Execution(format!(
                            "{} is missing arguments",
                            token
                        )));
                    }
                    let args = stack.split_off(stack.len() - arity);
                    function.apply(&args).ok_or_else(|| {
                        Error::Execution(format!("{} got {} argument(s)", token, args.len()))
                    })?
                }
                TokenKind::Comma => {
                    return Err(Error::Execution(format!("{} can not be executed", token)))
                }
            };
            stack.push(value);
        }

        match *stack.as_slice() {
            [value] => Ok(value),
            _ => Err(Error::Execution(format!(
                "program left {} value(s) on the stack, expected 1",
                stack.len()
            ))),
        }
    }

    /// Run the program, and check if the result is non-zero
    pub fn eval(&self, arguments: &[f64]) -> Result<bool, Error> {
        Ok(self.execute(arguments)? != 0.0)
    }
}

impl Display for Program {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(fmt, " ")?;
            }
            write!(fmt, "{}", token.lexeme())?;
        }
        Ok(())
    }
}

fn pop(stack: &mut Vec<f64>, token: &Token) -> Result<f64, Error> {
    stack
        .pop()
        .ok_or_else(|| Error::Execution(format!("{} is missing an operand", token)))
}

fn truth(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Floor a value to the integer type used by bitwise operators. Values out of
/// range saturate, NaN becomes 0.
fn integer(value: f64) -> i64 {
    libm::floor(value) as i64
}

/// Shift `value` left by `amount` bits, or right if `amount` is negative.
/// Right shifts are arithmetic.
fn shift(value: i64, amount: i64) -> i64 {
    if amount >= 64 {
        0
    } else if amount >= 0 {
        value << amount
    } else if amount > -64 {
        value >> -amount
    } else {
        value >> 63
    }
}

fn unary(symbol: Symbol, value: f64) -> Option<f64> {
    let result = match symbol {
        Symbol::Not => truth(value == 0.0),
        Symbol::BitNot => !integer(value) as f64,
        _ => return None,
    };
    Some(result)
}

fn binary(symbol: Symbol, left: f64, right: f64) -> Option<f64> {
    let result = match symbol {
        Symbol::Pow => libm::pow(left, right),
        Symbol::Mul => left * right,
        Symbol::Div => left / right,
        // floored division, not a remainder
        Symbol::Mod => libm::floor(left) / libm::floor(right),
        Symbol::Plus => left + right,
        Symbol::Minus => left - right,
        Symbol::Shl => shift(integer(left), integer(right)) as f64,
        Symbol::Shr => shift(integer(left), integer(right).saturating_neg()) as f64,
        Symbol::Less => truth(left < right),
        Symbol::LessEqual => truth(left <= right),
        Symbol::Greater => truth(left > right),
        Symbol::GreaterEqual => truth(left >= right),
        Symbol::Equal => truth(left == right),
        Symbol::NotEqual => truth(left != right),
        Symbol::BitAnd => (integer(left) & integer(right)) as f64,
        Symbol::BitOr => (integer(left) | integer(right)) as f64,
        Symbol::And => truth(left != 0.0 && right != 0.0),
        Symbol::Or => truth(left != 0.0 || right != 0.0),
        Symbol::LParen | Symbol::RParen | Symbol::Not | Symbol::BitNot => return None,
    };
    Some(result)
}
