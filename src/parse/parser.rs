use super::{ast::*, cursor::Cursor, error::ParseError, lexer::Token};
use crate::common::*;
use tracing::{debug, instrument};

type PResult<T = Node> = Result<T, ParseError>;

pub struct Parser<'a> {
    cursor: Cursor<'a, Token>,
}

impl<'a> Parser<'a> {
    const ADDITION_OPS: &'static [Token] = &[Token::Add, Token::Subtract];

    const MULTIPLICATION_OPS: &'static [Token] = &[Token::Multiply, Token::Divide];

    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: Cursor::new(tokens),
        }
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn parse(mut self) -> PResult {
        let tokens = self.cursor.remaining();
        check_parentheses(tokens)?;
        if tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let root = self.parse_addition()?;
        match self.cursor.peek() {
            None => Ok(root),
            Some(&found) => self.unexpected(Some(found), "end of input"),
        }
    }

    fn matches(&self, kind: Token) -> bool {
        self.cursor.peek() == Some(&kind)
    }

    fn advance_if_any(&mut self, options: &[Token]) -> Option<Token> {
        let &token = self.cursor.peek()?;
        if options.contains(&token) {
            self.cursor.next();
            Some(token)
        } else {
            None
        }
    }

    fn consume(&mut self, expected: Token) -> PResult<()> {
        match self.cursor.next() {
            Some(&found) if found == expected => Ok(()),
            found => self.unexpected(found.copied(), expected.as_str()),
        }
    }

    fn consume_integer(&mut self) -> PResult<UInt> {
        match self.cursor.next() {
            Some(&Token::Integer(x)) => Ok(x),
            found => self.unexpected(found.copied(), "<integer>"),
        }
    }

    fn unexpected<T>(&self, found: Option<Token>, expected: &str) -> PResult<T> {
        debug!(
            position = self.cursor.position(),
            ?found,
            expected,
            "unexpected token"
        );
        Err(ParseError::InvalidExpression)
    }

    fn parse_addition(&mut self) -> PResult {
        let mut lhs = self.parse_multiplication()?;

        while let Some(token) = self.advance_if_any(Self::ADDITION_OPS) {
            let rhs = self.parse_multiplication()?;
            lhs = Node::binary(lhs, binary_op(token), rhs);
        }

        Ok(lhs)
    }

    fn parse_multiplication(&mut self) -> PResult {
        let mut lhs = self.parse_atom()?;

        while let Some(token) = self.advance_if_any(Self::MULTIPLICATION_OPS) {
            let rhs = self.parse_atom()?;
            lhs = Node::binary(lhs, binary_op(token), rhs);
        }

        Ok(lhs)
    }

    fn parse_atom(&mut self) -> PResult {
        if self.matches(Token::OpenParen) {
            self.consume(Token::OpenParen)?;
            let inner = self.parse_addition()?;
            self.consume(Token::CloseParen)?;
            Ok(inner)
        } else {
            self.parse_roll()
        }
    }

    fn parse_roll(&mut self) -> PResult {
        if self.matches(Token::D) {
            self.parse_short_roll()
        } else if self.cursor.peek_next() == Some(&Token::D) {
            self.parse_long_roll()
        } else {
            self.parse_integer()
        }
    }

    fn parse_integer(&mut self) -> PResult {
        self.consume_integer().map(Node::integer)
    }

    fn parse_short_roll(&mut self) -> PResult {
        self.consume(Token::D)?;
        let faces = self.consume_integer()?;
        Ok(Node::short_roll(faces))
    }

    fn parse_long_roll(&mut self) -> PResult {
        let die = self.consume_integer()?;
        self.consume(Token::D)?;
        let faces = self.consume_integer()?;

        let keep = match self.advance_if_any(&[Token::H, Token::L]) {
            Some(Token::H) => Some(Keep::Highest(self.consume_integer()?)),
            Some(_) => Some(Keep::Lowest(self.consume_integer()?)),
            None => None,
        };

        Ok(Node::long_roll(die, faces, keep))
    }
}

fn check_parentheses(tokens: &[Token]) -> PResult<()> {
    let count = |kind| tokens.iter().filter(|&&t| t == kind).count();
    if count(Token::OpenParen) == count(Token::CloseParen) {
        Ok(())
    } else {
        Err(ParseError::UnbalancedParenthesis)
    }
}

fn binary_op(token: Token) -> BinaryOperator {
    match token {
        Token::Add => BinaryOperator::Add,
        Token::Subtract => BinaryOperator::Sub,
        Token::Multiply => BinaryOperator::Mul,
        Token::Divide => BinaryOperator::Div,
        _ => unreachable!("{} is not a binary operator", token),
    }
}
