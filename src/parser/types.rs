//! Type expression parsing
//!
//! Types appear after `as` in declarators, parameters, return positions, and
//! casts, and on both sides of `typedef`. The nullable marker `?` is only
//! consumed when it immediately follows the type it modifies; a detached `?`
//! belongs to a surrounding ternary expression.

use crate::ast::{
    ArrayType, GenericType, MemberType, MethodType, NamedType, NullableType, TypeExpr, UnionType,
};
use crate::lexer::Token;

use super::error::ParseError;
use super::parser_impl::Cursor;

impl<'a> Cursor<'a> {
    pub(super) fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        let start = self.offset();
        let first = self.parse_type_postfix()?;
        if !self.at(Token::Or) {
            return Ok(first);
        }

        let mut members = vec![first];
        while self.eat(Token::Or).is_some() {
            members.push(self.parse_type_postfix()?);
        }
        Ok(TypeExpr::Union(UnionType {
            members,
            span: self.span_from(start),
        }))
    }

    fn parse_type_postfix(&mut self) -> Result<TypeExpr, ParseError> {
        let start = self.offset();
        let mut ty = self.parse_type_primary()?;

        loop {
            if self.eat(Token::Dot).is_some() {
                let property = self.parse_type_primary()?;
                ty = TypeExpr::Member(MemberType {
                    object: Box::new(ty),
                    property: Box::new(property),
                    span: self.span_from(start),
                });
            } else if self.at(Token::Lt) {
                self.bump();
                let argument = self.parse_type()?;
                self.expect_closing_angle()?;
                let nullable = self.eat_adjacent_question();
                ty = TypeExpr::Generic(GenericType {
                    base: Box::new(ty),
                    argument: Box::new(argument),
                    nullable,
                    span: self.span_from(start),
                });
            } else if self.at(Token::LBracket) {
                let mut dimensions = Vec::new();
                while self.eat(Token::LBracket).is_some() {
                    dimensions.push(self.parse_expression()?);
                    self.expect(Token::RBracket)?;
                }
                ty = TypeExpr::Array(ArrayType {
                    element: Box::new(ty),
                    dimensions,
                    span: self.span_from(start),
                });
            } else {
                break;
            }
        }

        Ok(ty)
    }

    fn parse_type_primary(&mut self) -> Result<TypeExpr, ParseError> {
        match self.peek() {
            Some(Token::Identifier) => {
                let range = self.expect(Token::Identifier)?;
                let named = TypeExpr::Named(NamedType {
                    name: self.text(&range).to_string(),
                    span: self.span_of(&range),
                });
                if self.eat_adjacent_question() {
                    let span = self.span_from(range.start);
                    return Ok(TypeExpr::Nullable(NullableType {
                        inner: Box::new(named),
                        span,
                    }));
                }
                Ok(named)
            }
            Some(Token::Method) => {
                let start = self.offset();
                self.bump();
                let parameters = self.parse_formal_parameters()?;
                let return_type = if self.eat(Token::As).is_some() {
                    Some(Box::new(self.parse_type()?))
                } else {
                    None
                };
                Ok(TypeExpr::Method(MethodType {
                    parameters,
                    return_type,
                    span: self.span_from(start),
                }))
            }
            _ => Err(self.error("type")),
        }
    }

    /// Consume `?` only when it touches the preceding token
    fn eat_adjacent_question(&mut self) -> bool {
        if self.at(Token::Question) {
            if let Some(range) = self.current_range() {
                if range.start == self.last_end() {
                    self.bump();
                    return true;
                }
            }
        }
        false
    }
}
