//! Token definitions for Monkey C
//!
//! This module defines all the tokens that can be produced by the Monkey C
//! lexer. The tokens are defined using the logos derive macro for efficient
//! tokenization. The lexical rules follow the grammar owned by the
//! [language](crate::language) module: permissive unicode identifiers,
//! `:symbol` literals, hex and decimal numbers with an optional `l` suffix,
//! and double-quoted strings with a small escape set.

use logos::Logos;
use serde::{Deserialize, Serialize};

/// All possible tokens in Monkey C source text
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Token {
    // Trivia
    #[regex(r"[\s\p{Zs}\u{FEFF}\u{2028}\u{2029}\u{2060}\u{200B}]+")]
    Whitespace,
    #[regex(r"//[^\r\n\u{2028}\u{2029}]*")]
    LineComment,
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    // Keywords
    #[token("import")]
    Import,
    #[token("using")]
    Using,
    #[token("as")]
    As,
    #[token("var")]
    Var,
    #[token("const")]
    Const,
    #[token("function")]
    Function,
    #[token("class")]
    Class,
    #[token("module")]
    Module,
    #[token("extends")]
    Extends,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("finally")]
    Finally,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("return")]
    Return,
    #[token("throw")]
    Throw,
    #[token("new")]
    New,
    #[token("typedef")]
    Typedef,
    #[token("this")]
    This,
    #[token("super")]
    Super,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("instanceof")]
    InstanceOf,
    #[token("has")]
    Has,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("static")]
    Static,
    #[token("final")]
    Final,
    #[token("Method")]
    Method,

    // Literals
    #[regex(r"0[xX][0-9a-fA-F](_?[0-9a-fA-F])*l?")]
    #[regex(r"[0-9](_?[0-9])*\.[0-9]*([eE][+-]?[0-9]+)?l?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?l?")]
    #[regex(r"[0-9](_?[0-9])*[eE][+-]?[0-9]+l?")]
    #[regex(r"[0-9](_?[0-9])*l?")]
    Number,
    #[regex(r#""([^"\\\r\n]|\\['"ntru\\])*""#)]
    String,
    #[regex(r":[\p{XID_Start}_$][\p{XID_Continue}_$]*")]
    Symbol,
    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}_$]*")]
    Identifier,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("=>")]
    Arrow,

    // Operators
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!")]
    Bang,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("&&=")]
    AmpAmpEq,
    #[token("||=")]
    PipePipeEq,
}

impl Token {
    /// Check if this token is trivia (whitespace or a comment)
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::LineComment | Token::BlockComment
        )
    }

    /// Check if this token is a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Import
                | Token::Using
                | Token::As
                | Token::Var
                | Token::Const
                | Token::Function
                | Token::Class
                | Token::Module
                | Token::Extends
                | Token::If
                | Token::Else
                | Token::Switch
                | Token::Case
                | Token::Default
                | Token::For
                | Token::While
                | Token::Do
                | Token::Try
                | Token::Catch
                | Token::Finally
                | Token::Break
                | Token::Continue
                | Token::Return
                | Token::Throw
                | Token::New
                | Token::Typedef
                | Token::This
                | Token::Super
                | Token::True
                | Token::False
                | Token::Null
                | Token::InstanceOf
                | Token::Has
                | Token::And
                | Token::Or
                | Token::Public
                | Token::Protected
                | Token::Private
                | Token::Static
                | Token::Final
                | Token::Method
        )
    }

    /// Check if this token is a visibility or member modifier
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Token::Public
                | Token::Protected
                | Token::Private
                | Token::Static
                | Token::Final
                | Token::Default
        )
    }

    /// The operator spelling used for precedence lookups, for binary operator tokens
    pub fn binary_operator_str(&self) -> Option<&'static str> {
        let spelling = match self {
            Token::AmpAmp => "&&",
            Token::And => "and",
            Token::PipePipe => "||",
            Token::Or => "or",
            Token::Shr => ">>",
            Token::Shl => "<<",
            Token::Amp => "&",
            Token::Caret => "^",
            Token::Pipe => "|",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::Lt => "<",
            Token::Le => "<=",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::Ge => ">=",
            Token::Gt => ">",
            Token::InstanceOf => "instanceof",
            Token::Has => "has",
            _ => return None,
        };
        Some(spelling)
    }

    /// Short human-readable description for diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Whitespace => "whitespace",
            Token::LineComment | Token::BlockComment => "comment",
            Token::Number => "number",
            Token::String => "string",
            Token::Symbol => "symbol",
            Token::Identifier => "identifier",
            Token::Import => "'import'",
            Token::Using => "'using'",
            Token::As => "'as'",
            Token::Var => "'var'",
            Token::Const => "'const'",
            Token::Function => "'function'",
            Token::Class => "'class'",
            Token::Module => "'module'",
            Token::Extends => "'extends'",
            Token::If => "'if'",
            Token::Else => "'else'",
            Token::Switch => "'switch'",
            Token::Case => "'case'",
            Token::Default => "'default'",
            Token::For => "'for'",
            Token::While => "'while'",
            Token::Do => "'do'",
            Token::Try => "'try'",
            Token::Catch => "'catch'",
            Token::Finally => "'finally'",
            Token::Break => "'break'",
            Token::Continue => "'continue'",
            Token::Return => "'return'",
            Token::Throw => "'throw'",
            Token::New => "'new'",
            Token::Typedef => "'typedef'",
            Token::This => "'this'",
            Token::Super => "'super'",
            Token::True => "'true'",
            Token::False => "'false'",
            Token::Null => "'null'",
            Token::InstanceOf => "'instanceof'",
            Token::Has => "'has'",
            Token::And => "'and'",
            Token::Or => "'or'",
            Token::Public => "'public'",
            Token::Protected => "'protected'",
            Token::Private => "'private'",
            Token::Static => "'static'",
            Token::Final => "'final'",
            Token::Method => "'Method'",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::LBrace => "'{'",
            Token::RBrace => "'}'",
            Token::LBracket => "'['",
            Token::RBracket => "']'",
            Token::Semicolon => "';'",
            Token::Comma => "','",
            Token::Dot => "'.'",
            Token::Colon => "':'",
            Token::Question => "'?'",
            Token::Arrow => "'=>'",
            Token::Eq => "'='",
            Token::EqEq => "'=='",
            Token::Bang => "'!'",
            Token::NotEq => "'!='",
            Token::Lt => "'<'",
            Token::Le => "'<='",
            Token::Gt => "'>'",
            Token::Ge => "'>='",
            Token::Shl => "'<<'",
            Token::Shr => "'>>'",
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::Percent => "'%'",
            Token::Amp => "'&'",
            Token::Pipe => "'|'",
            Token::Caret => "'^'",
            Token::Tilde => "'~'",
            Token::AmpAmp => "'&&'",
            Token::PipePipe => "'||'",
            Token::PlusPlus => "'++'",
            Token::MinusMinus => "'--'",
            Token::PlusEq => "'+='",
            Token::MinusEq => "'-='",
            Token::StarEq => "'*='",
            Token::SlashEq => "'/='",
            Token::PercentEq => "'%='",
            Token::AmpEq => "'&='",
            Token::PipeEq => "'|='",
            Token::CaretEq => "'^='",
            Token::AmpAmpEq => "'&&='",
            Token::PipePipeEq => "'||='",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_keywords_beat_identifiers() {
        assert_eq!(tokenize("function"), vec![Token::Function]);
        assert_eq!(tokenize("functions"), vec![Token::Identifier]);
        assert_eq!(tokenize("Method"), vec![Token::Method]);
        assert_eq!(tokenize("method"), vec![Token::Identifier]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokenize("0"), vec![Token::Number]);
        assert_eq!(tokenize("42"), vec![Token::Number]);
        assert_eq!(tokenize("42l"), vec![Token::Number]);
        assert_eq!(tokenize("0x1F"), vec![Token::Number]);
        assert_eq!(tokenize("0XABCD_EF01"), vec![Token::Number]);
        assert_eq!(tokenize("3.14"), vec![Token::Number]);
        assert_eq!(tokenize(".5"), vec![Token::Number]);
        assert_eq!(tokenize("1e9"), vec![Token::Number]);
        assert_eq!(tokenize("2.5e-3"), vec![Token::Number]);
    }

    #[test]
    fn test_strings() {
        assert_eq!(tokenize(r#""hello""#), vec![Token::String]);
        assert_eq!(tokenize(r#""a \"quoted\" word""#), vec![Token::String]);
        assert_eq!(tokenize(r#""tab\there""#), vec![Token::String]);
        assert_eq!(tokenize(r#""""#), vec![Token::String]);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(tokenize(":test"), vec![Token::Symbol]);
        assert_eq!(
            tokenize("( :glance )"),
            vec![
                Token::LParen,
                Token::Whitespace,
                Token::Symbol,
                Token::Whitespace,
                Token::RParen
            ]
        );
    }

    #[test]
    fn test_lone_colon_is_colon() {
        assert_eq!(
            tokenize("a ? b : c"),
            vec![
                Token::Identifier,
                Token::Whitespace,
                Token::Question,
                Token::Whitespace,
                Token::Identifier,
                Token::Whitespace,
                Token::Colon,
                Token::Whitespace,
                Token::Identifier
            ]
        );
    }

    #[test]
    fn test_compound_operators() {
        assert_eq!(tokenize("=>"), vec![Token::Arrow]);
        assert_eq!(tokenize("&&="), vec![Token::AmpAmpEq]);
        assert_eq!(tokenize("&&"), vec![Token::AmpAmp]);
        assert_eq!(tokenize("&"), vec![Token::Amp]);
        assert_eq!(tokenize("<<"), vec![Token::Shl]);
        assert_eq!(tokenize("<="), vec![Token::Le]);
        assert_eq!(tokenize("++"), vec![Token::PlusPlus]);
        assert_eq!(tokenize("+="), vec![Token::PlusEq]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(tokenize("// a comment"), vec![Token::LineComment]);
        assert_eq!(tokenize("/* block\n comment */"), vec![Token::BlockComment]);
        assert_eq!(
            tokenize("x /* inline */ y"),
            vec![
                Token::Identifier,
                Token::Whitespace,
                Token::BlockComment,
                Token::Whitespace,
                Token::Identifier
            ]
        );
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Whitespace.is_trivia());
        assert!(Token::LineComment.is_trivia());
        assert!(!Token::Identifier.is_trivia());

        assert!(Token::Function.is_keyword());
        assert!(Token::Has.is_keyword());
        assert!(!Token::Identifier.is_keyword());

        assert!(Token::Static.is_modifier());
        assert!(Token::Default.is_modifier());
        assert!(!Token::Function.is_modifier());

        assert_eq!(Token::Star.binary_operator_str(), Some("*"));
        assert_eq!(Token::And.binary_operator_str(), Some("and"));
        assert_eq!(Token::Eq.binary_operator_str(), None);
    }
}
