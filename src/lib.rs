#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

//! Mathex, a crate for checking values against small rule formulas.
//!
//! A formula is a mathematical expression over positional variables. It is
//! true when it evaluates to a non-zero value, and false when it evaluates
//! to zero. The easiest way to use this crate is with the
//! [`evaluate`](fn.evaluate.html) function:
//!
//! ```
//! assert_eq!(mathex::evaluate("A > 3 && A < 10", &[5.0]), Ok(true));
//! assert_eq!(mathex::evaluate("max(A, B) > 1", &[0.5, 1.0]), Ok(false));
//! ```
//!
//! The arguments are bound in order to the variables `A`, `B`, `C`, ...,
//! `Z`, `AA`, `AB`, ... A formula must use exactly as many variables as
//! there are arguments, without skipping any.
//!
//! ```
//! assert!(mathex::evaluate("A + C", &[1.0, 2.0]).is_err());
//! assert!(mathex::evaluate("A", &[1.0, 2.0]).is_err());
//! ```
//!
//! It is also possible to separate the compilation from the execution of a
//! formula with the [`Program`](struct.Program.html) type:
//!
//! ```
//! use mathex::Program;
//!
//! let program = Program::compile("abs(A - B) <= 0.5", 2).unwrap();
//! assert_eq!(program.eval(&[1.0, 1.25]), Ok(true));
//! assert_eq!(program.eval(&[1.0, 2.0]), Ok(false));
//! ```
//!
//! Host applications with loosely typed values can use
//! [`host::evaluate`](host/fn.evaluate.html) or the [`mathex!`](macro.mathex.html)
//! macro, which report the result as `1`, `0` or `-1` with a message:
//!
//! ```
//! use mathex::mathex;
//!
//! assert_eq!(mathex!("A % 2 == 2", 4.0), (1, None));
//! assert_eq!(mathex!("A +", 1.0).0, -1);
//! ```
//!
//! # Language definition
//!
//! The language implemented by mathex can contain the following elements:
//!
//! - number literals: `12`, `0.045`. A literal starts with a digit, has at
//!   most one decimal point, and can not end with it. There are no negative
//!   literals, write `0 - 1`;
//! - variables: runs of uppercase letters, `A` to `Z` then `AA` and so on;
//! - parenthesis, and `,` between function arguments;
//! - prefix operators: `!` (1 if the operand is zero, else 0) and `~`
//!   (bitwise not);
//! - binary operators, from the tightest to the loosest binding: `^`
//!   (power), `*` `/` `%`, `+` `-`, `<<` `>>`, `<` `<=` `>` `>=`, `==` `!=`,
//!   `&`, `|`, `&&`, `||`. Operators of the same rank are left associative;
//! - function calls. `abs`, `log` (natural logarithm), `exp`, `sin`, `cos`,
//!   `tan`, `asin`, `acos`, `sinh`, `cosh`, `tanh`, `asinh`, `acosh`,
//!   `atanh`, `ceil` and `floor` take one argument; `max`, `min`, `pow` and
//!   `atan2` take two.
//!
//! Whitespace is ignored. Any other symbol is forbidden in the input.
//!
//! Comparisons and logical operators give `1` or `0`. Bitwise operators and
//! `%` first floor their operands; bitwise operators then work on 64-bit
//! signed integers. `%` divides the floored operands, it is not a
//! remainder: `7 % 2` is `3.5`.
//!
//! # Technical details
//!
//! mathex tokenizes the formula, checks its structure, then uses a
//! Shunting-Yard algorithm to produce a postfix program which is executed on
//! a stack of `f64`. Every stage reports its failures with a dedicated
//! [`Error`](enum.Error.html) variant.

#[macro_use]
extern crate lazy_static;

mod error;
mod expr;
pub mod host;
mod lexer;
mod postfix;
mod syntax;
mod token;
mod util;

pub use error::Error;
pub use expr::{evaluate, Program};
pub use host::{arguments_from_values, Value};
pub use lexer::tokenize;
pub use token::{Side, Symbol, Token, TokenKind};
pub use util::{variable_index, variable_name, Function, FUNCTIONS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(evaluate("A", &[0.0]), Ok(false));
        assert_eq!(evaluate("A", &[1.0]), Ok(true));
    }

    #[test]
    fn scenarios() {
        assert_eq!(mathex!("max(1,2) > 1"), (1, None));
        // modulo keeps its floored division meaning: 4 % 2 is 2
        assert_eq!(mathex!("A%2!=0", 4.0), (1, None));
        assert_eq!(mathex!("A%2!=0", vec![0.0]), (0, None));
        assert_eq!(mathex!("abs(A)", -5.0), (1, None));

        let (status, message) = mathex!("A");
        assert_eq!(status, -1);
        assert!(message.unwrap().contains("uses more variables than provided"));

        let (status, message) = mathex!("(A", 1.0);
        assert_eq!(status, -1);
        assert!(message.unwrap().contains("no matching ')'"));
    }

    #[test]
    fn rule_over_many_variables() {
        let arguments: Vec<f64> = (1..=30).map(f64::from).collect();
        assert_eq!(
            evaluate("AD == 30 && AA - Z == 1 && A < B", &arguments),
            Err(Error::Syntax(
                "formula uses fewer variables than provided: 5 used, 30 provided".into()
            ))
        );

        let names: Vec<_> = (1..=30).map(variable_name).collect();
        let formula = format!("{} == 465", names.join(" + "));
        assert_eq!(evaluate(&formula, &arguments), Ok(true));
    }
}
