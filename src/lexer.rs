use crate::error::Error;
use crate::token::{Token, TokenKind};
use crate::util::{variable_index, FUNCTIONS, SYMBOLS};

/// Number of characters shown in tokenization error messages
const EXCERPT_LENGTH: usize = 10;

/// An helper struct for lexing the input
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(string: &str) -> Self {
        Self {
            input: string.chars().collect(),
            position: 0,
        }
    }

    /// Split the whole input into tokens
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while self.peek().map_or(false, char::is_whitespace) {
            self.position += 1;
        }
        let start = self.position;
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None),
        };

        let kind = if c.is_ascii_digit() {
            self.number()?
        } else if c.is_ascii_uppercase() {
            self.variable()?
        } else if let Some(kind) = self.symbol() {
            kind
        } else if c.is_ascii_lowercase() {
            self.function()?
        } else if c == ',' {
            self.position += 1;
            TokenKind::Comma
        } else {
            return Err(self.error(start, "unexpected character"));
        };
        Ok(Some(Token::new(kind, start)))
    }

    fn number(&mut self) -> Result<TokenKind, Error> {
        let start = self.position;
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.position += 1;
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.position += 1;
                if !self.peek().map_or(false, |c| c.is_ascii_digit()) {
                    let dot = self.position - 1;
                    return Err(self.error(dot, "number ends with a decimal point"));
                }
            } else {
                break;
            }
        }
        let literal = self.slice(start);
        literal
            .parse()
            .map(TokenKind::Number)
            .map_err(|_| self.error(start, "invalid number"))
    }

    fn variable(&mut self) -> Result<TokenKind, Error> {
        let start = self.position;
        self.take_while(|c| c.is_ascii_uppercase());
        variable_index(&self.slice(start))
            .map(TokenKind::Variable)
            .ok_or_else(|| self.error(start, "variable name is too long"))
    }

    fn symbol(&mut self) -> Option<TokenKind> {
        let rest = &self.input[self.position..];
        let symbol = SYMBOLS.iter().copied().find(|symbol| {
            let lexeme = symbol.lexeme();
            rest.len() >= lexeme.len()
                && rest.iter().copied().zip(lexeme.chars()).all(|(a, b)| a == b)
        })?;
        // lexemes are ASCII
        self.position += symbol.lexeme().len();
        Some(TokenKind::Symbol(symbol))
    }

    fn function(&mut self) -> Result<TokenKind, Error> {
        let start = self.position;
        self.take_while(|c| c.is_ascii_lowercase());
        let name = self.slice(start);
        FUNCTIONS
            .get(name.as_str())
            .map(|&function| TokenKind::Function(function))
            .ok_or_else(|| self.error(start, "unknown function"))
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().map_or(false, &predicate) {
            self.position += 1;
        }
    }

    fn slice(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    fn error(&self, position: usize, message: &str) -> Error {
        Error::Tokenize {
            position,
            excerpt: self.input[position..].iter().take(EXCERPT_LENGTH).collect(),
            message: message.into(),
        }
    }
}

/// Split `input` into tokens
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(input).tokenize()
}
