use crate::error::Error;
use crate::token::{Side, Symbol, Token, TokenKind};

/// Reorder `tokens` in reverse polish notation, using a Shunting-Yard
/// algorithm extended with function calls and comma separated arguments.
///
/// Parenthesis never reach the output.
pub fn compile(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for &token in tokens {
        match token.kind {
            TokenKind::Number(_) | TokenKind::Variable(_) => output.push(token),
            TokenKind::Function(_) => operators.push(token),
            TokenKind::Symbol(Symbol::LParen) => operators.push(token),
            TokenKind::Symbol(Symbol::RParen) => {
                if !flush_argument(&mut operators, &mut output) {
                    return Err(Error::Stack(format!("{} has no matching '('", token)));
                }
                operators.pop();
                if let Some(TokenKind::Function(_)) = operators.last().map(|t| t.kind) {
                    output.extend(operators.pop());
                }
            }
            TokenKind::Comma => {
                if !flush_argument(&mut operators, &mut output) {
                    return Err(Error::Stack(format!("{} is not inside parenthesis", token)));
                }
            }
            TokenKind::Symbol(current) => {
                while let Some(top) = operators.last().and_then(Token::symbol) {
                    if top == Symbol::LParen {
                        break;
                    }
                    let pop_me = top.precedence() < current.precedence()
                        || (top.precedence() == current.precedence()
                            && current.side() != Side::RightOnly);
                    if !pop_me {
                        break;
                    }
                    output.extend(operators.pop());
                }
                operators.push(token);
            }
        }
    }

    while let Some(token) = operators.pop() {
        if token.is(Symbol::LParen) {
            return Err(Error::Stack(format!("{} has no matching ')'", token)));
        }
        output.push(token);
    }
    Ok(output)
}

/// Move operators to the output up to the innermost `(`, which stays on the
/// stack. Returns `false` if there is no `(`.
fn flush_argument(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> bool {
    while let Some(top) = operators.last() {
        if top.is(Symbol::LParen) {
            return true;
        }
        output.extend(operators.pop());
    }
    false
}

/// Walk a postfix program counting values instead of computing them, and
/// check that every operator and function finds the operands it needs.
pub fn check_arity(program: &[Token]) -> Result<(), Error> {
    let mut depth = 0_usize;
    for token in program {
        match token.kind {
            TokenKind::Number(_) | TokenKind::Variable(_) => depth += 1,
            TokenKind::Symbol(symbol) => match symbol.side() {
                Side::RightOnly => {
                    if depth < 1 {
                        return Err(Error::ArgumentCount(format!(
                            "{} has no required operand",
                            token
                        )));
                    }
                }
                Side::LeftOnly => {
                    if depth < 1 {
                        return Err(Error::ArgumentCount(format!(
                            "{} has no required right operand",
                            token
                        )));
                    }
                }
                Side::Both => {
                    if depth < 2 {
                        return Err(Error::ArgumentCount(format!(
                            "{} has no required first and second operand values",
                            token
                        )));
                    }
                    depth -= 1;
                }
            },
            TokenKind::Function(function) => {
                let arity = function.arity();
                if depth < arity {
                    return Err(Error::ArgumentCount(format!(
                        "{} requires {} argument(s), found {}",
                        token, arity, depth
                    )));
                }
                depth = depth + 1 - arity;
            }
            TokenKind::Comma => {
                return Err(Error::ArgumentCount(format!(
                    "{} found in a postfix program",
                    token
                )))
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use test_case::test_case;

    /// Compile `input` and render the program with one space between tokens
    fn rpn(input: &str) -> Result<String, Error> {
        let program = compile(&tokenize(input)?)?;
        Ok(program
            .iter()
            .map(Token::lexeme)
            .collect::<Vec<_>>()
            .join(" "))
    }

    #[test_case("2 + 2" => "2 2 +" ; "addition")]
    #[test_case("3 + 5 * 2" => "3 5 2 * +" ; "precedence")]
    #[test_case("(3 + 5) * 2" => "3 5 + 2 *" ; "parenthesis")]
    #[test_case("A - B - C" => "A B - C -" ; "left associative")]
    #[test_case("A ^ B ^ C" => "A B ^ C ^" ; "power is left associative")]
    #[test_case("!!A" => "A ! !" ; "prefix operators nest")]
    #[test_case("!A && B" => "A ! B &&" ; "prefix binds tighter")]
    #[test_case("~A + 1" => "A ~ 1 +" ; "bitwise not binds tighter")]
    #[test_case("A < B || A >= 2 && B != 3" => "A B < A 2 >= B 3 != && ||" ; "logical operators")]
    #[test_case("max(1, 2) > 1" => "1 2 max 1 >" ; "function call")]
    #[test_case("max(A + 1, B * 2)" => "A 1 + B 2 * max" ; "expressions as arguments")]
    #[test_case("abs(min(A, B) - 3)" => "A B min 3 - abs" ; "nested function calls")]
    #[test_case("A << 2 | B & 1" => "A 2 << B 1 & |" ; "bitwise operators")]
    fn postfix(input: &str) -> String {
        rpn(input).unwrap()
    }

    #[test_case("(A" => "StackError: symbol '(' at position 0 has no matching ')'" ; "missing closing parenthesis")]
    #[test_case("A)" => "StackError: symbol ')' at position 1 has no matching '('" ; "missing opening parenthesis")]
    #[test_case("max((1, 2)" => "StackError: symbol '(' at position 3 has no matching ')'" ; "missing closing parenthesis in call")]
    #[test_case("A, B" => "StackError: comma ',' at position 1 is not inside parenthesis" ; "comma at top level")]
    fn stack_errors(input: &str) -> String {
        rpn(input).unwrap_err().to_string()
    }

    #[test]
    fn deterministic() {
        let tokens = tokenize("max(A, B ^ 2) + abs(C) * 3 >= 1 || !D").unwrap();
        assert_eq!(compile(&tokens), compile(&tokens));
    }

    fn arity(input: &str) -> Result<(), Error> {
        check_arity(&compile(&tokenize(input)?)?)
    }

    #[test_case("A + B * C" ; "binary operators")]
    #[test_case("max(A, B)" ; "two arguments")]
    #[test_case("!abs(A)" ; "prefix and function")]
    #[test_case("(A, B)" ; "extra values are left to the executor")]
    fn arity_valid(input: &str) {
        assert_eq!(arity(input), Ok(()));
    }

    #[test_case("max(A)" => "ArgumentCountError: function 'max' at position 0 requires 2 argument(s), found 1" ; "missing function argument")]
    #[test_case("atan2(, A)" => "ArgumentCountError: function 'atan2' at position 0 requires 2 argument(s), found 1" ; "empty first argument")]
    #[test_case("+" => "ArgumentCountError: symbol '+' at position 0 has no required first and second operand values" ; "lonely binary operator")]
    #[test_case("!" => "ArgumentCountError: symbol '!' at position 0 has no required operand" ; "lonely prefix operator")]
    fn arity_errors(input: &str) -> String {
        arity(input).unwrap_err().to_string()
    }

    #[test]
    fn closing_parenthesis_without_operand() {
        let program = [Token::new(TokenKind::Symbol(Symbol::RParen), 4)];
        assert_eq!(
            check_arity(&program),
            Err(Error::ArgumentCount(
                "symbol ')' at position 4 has no required right operand".into()
            ))
        );
    }
}
