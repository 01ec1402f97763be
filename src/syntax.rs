//! Structural checks on a token stream, done before building the postfix
//! program.

use crate::error::Error;
use crate::token::{Symbol, Token, TokenKind};
use crate::util::variable_name;
use std::collections::BTreeSet;

/// Check that a token can be found on the right of an operator: a value, a
/// function, or a prefix operator (including `(`)
fn starts_value(token: Option<&Token>) -> bool {
    token.map_or(false, |token| match token.kind {
        TokenKind::Number(_) | TokenKind::Variable(_) | TokenKind::Function(_) => true,
        TokenKind::Symbol(symbol) => !symbol.side().needs_left(),
        TokenKind::Comma => false,
    })
}

/// Check that a token can be found on the left of an operator: a value or a
/// closing parenthesis
fn ends_value(token: Option<&Token>) -> bool {
    token.map_or(false, |token| match token.kind {
        TokenKind::Number(_) | TokenKind::Variable(_) => true,
        TokenKind::Symbol(symbol) => !symbol.side().needs_right(),
        TokenKind::Function(_) | TokenKind::Comma => false,
    })
}

/// Check the structure of `tokens` for a formula called with
/// `variable_count` arguments.
pub fn check(tokens: &[Token], variable_count: usize) -> Result<(), Error> {
    let mut variables = BTreeSet::new();

    for (i, token) in tokens.iter().enumerate() {
        let previous = if i == 0 { None } else { tokens.get(i - 1) };
        let next = tokens.get(i + 1);

        match token.kind {
            TokenKind::Function(_) => {
                if !next.map_or(false, |next| next.is(Symbol::LParen)) {
                    return Err(Error::Syntax(format!("{} must be followed by '('", token)));
                }
            }
            TokenKind::Symbol(symbol) => {
                let side = symbol.side();
                if side.needs_left() && !ends_value(previous) {
                    return Err(Error::Syntax(format!(
                        "{} requires a value to the left",
                        token
                    )));
                }
                if side.needs_right() && !starts_value(next) {
                    return Err(Error::Syntax(format!(
                        "{} requires a value to the right",
                        token
                    )));
                }
            }
            TokenKind::Number(_) | TokenKind::Variable(_) => {
                if let TokenKind::Variable(index) = token.kind {
                    variables.insert(index);
                }
                if let Some(next) = next {
                    let adjacent = match next.kind {
                        TokenKind::Number(_) | TokenKind::Variable(_) | TokenKind::Function(_) => {
                            true
                        }
                        TokenKind::Symbol(symbol) => symbol == Symbol::LParen,
                        TokenKind::Comma => false,
                    };
                    if adjacent {
                        return Err(Error::Syntax(format!(
                            "{} is directly followed by {}",
                            token, next
                        )));
                    }
                }
            }
            TokenKind::Comma => {}
        }
    }

    if variables.len() < variable_count {
        return Err(Error::Syntax(format!(
            "formula uses fewer variables than provided: {} used, {} provided",
            variables.len(),
            variable_count
        )));
    }
    if variables.len() > variable_count {
        return Err(Error::Syntax(format!(
            "formula uses more variables than provided: {} used, {} provided",
            variables.len(),
            variable_count
        )));
    }
    // the set is sorted, so the first index out of place marks a gap
    if let Some(skipped) = (1..=variable_count)
        .zip(variables.iter())
        .find(|&(expected, &found)| expected != found)
        .map(|(expected, _)| expected)
    {
        return Err(Error::Syntax(format!(
            "variable {} is skipped, expected variables A to {}",
            variable_name(skipped),
            variable_name(variable_count)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check;
    use crate::error::Error;
    use crate::lexer::tokenize;
    use test_case::test_case;

    fn check_str(input: &str, variable_count: usize) -> Result<(), Error> {
        check(&tokenize(input).unwrap(), variable_count)
    }

    #[test_case("A + B", 2 ; "binary operator")]
    #[test_case("!A", 1 ; "prefix operator")]
    #[test_case("!!A", 1 ; "chained prefix operators")]
    #[test_case("(!A) && ~B", 2 ; "prefix operator in parenthesis")]
    #[test_case("max(A, 2) > abs(B)", 2 ; "function calls")]
    #[test_case("((1))", 0 ; "nested parenthesis")]
    #[test_case("1 < 2", 0 ; "no variables")]
    #[test_case("B * A - A", 2 ; "repeated variables in any order")]
    #[test_case("", 0 ; "empty input")]
    #[test_case("max((A), B)", 2 ; "closing parenthesis before comma")]
    fn valid(input: &str, variable_count: usize) {
        assert_eq!(check_str(input, variable_count), Ok(()));
    }

    #[test_case("A", 0 => "SyntaxError: formula uses more variables than provided: 1 used, 0 provided" ; "more variables")]
    #[test_case("A", 2 => "SyntaxError: formula uses fewer variables than provided: 1 used, 2 provided" ; "fewer variables")]
    #[test_case("A + C", 2 => "SyntaxError: variable B is skipped, expected variables A to B" ; "skipped variable")]
    #[test_case("B", 1 => "SyntaxError: variable A is skipped, expected variables A to A" ; "skipped first variable")]
    #[test_case("+ A", 1 => "SyntaxError: symbol '+' at position 0 requires a value to the left" ; "missing left value at start")]
    #[test_case("A +", 1 => "SyntaxError: symbol '+' at position 2 requires a value to the right" ; "missing right value at end")]
    #[test_case("A + * B", 2 => "SyntaxError: symbol '+' at position 2 requires a value to the right" ; "two binary operators")]
    #[test_case("A !", 1 => "SyntaxError: symbol '!' at position 2 requires a value to the right" ; "trailing prefix operator")]
    #[test_case("()", 0 => "SyntaxError: symbol '(' at position 0 requires a value to the right" ; "empty parenthesis")]
    #[test_case("abs A", 1 => "SyntaxError: function 'abs' at position 0 must be followed by '('" ; "function without parenthesis")]
    #[test_case("abs", 0 => "SyntaxError: function 'abs' at position 0 must be followed by '('" ; "function at end")]
    #[test_case("A B", 2 => "SyntaxError: variable 'A' at position 0 is directly followed by variable 'B' at position 2" ; "adjacent variables")]
    #[test_case("2 (A)", 1 => "SyntaxError: number '2' at position 0 is directly followed by symbol '(' at position 2" ; "value before parenthesis")]
    #[test_case("2 abs(A)", 1 => "SyntaxError: number '2' at position 0 is directly followed by function 'abs' at position 2" ; "value before function")]
    #[test_case("1 2", 0 => "SyntaxError: number '1' at position 0 is directly followed by number '2' at position 2" ; "adjacent numbers")]
    #[test_case("max(A,)", 1 => "SyntaxError: symbol ')' at position 6 requires a value to the left" ; "comma before closing parenthesis")]
    #[test_case("max(,A)", 1 => "SyntaxError: symbol '(' at position 3 requires a value to the right" ; "comma after opening parenthesis")]
    fn invalid(input: &str, variable_count: usize) -> String {
        check_str(input, variable_count).unwrap_err().to_string()
    }
}
