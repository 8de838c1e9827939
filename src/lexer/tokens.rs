use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Keyword spellings, used to promote identifier runs to keyword tokens.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for kind in TokenKind::ALL {
            if kind.is_keyword() {
                map.insert(kind.spelling().unwrap(), kind);
            }
        }
        map
    };

    /// Maximal-munch candidates keyed by starting character, longest
    /// spelling first. Quote delimiters, comments and line terminators are
    /// absent: the scanner intercepts those characters before munching.
    pub static ref SYMBOL_LOOKUP: HashMap<char, Vec<TokenKind>> = {
        let mut map: HashMap<char, Vec<TokenKind>> = HashMap::new();
        for kind in TokenKind::ALL {
            let spelling = match kind.spelling() {
                Some(spelling) => spelling,
                None => continue,
            };
            if matches!(
                kind,
                TokenKind::Quote
                    | TokenKind::DQuote
                    | TokenKind::TripleQuote
                    | TokenKind::TripleDQuote
                    | TokenKind::Comment
                    | TokenKind::Newline
                    | TokenKind::Cr
            ) {
                continue;
            }
            let first = spelling.chars().next().unwrap();
            map.entry(first).or_default().push(kind);
        }
        for candidates in map.values_mut() {
            candidates.sort_by_key(|kind| std::cmp::Reverse(kind.spelling().unwrap().len()));
        }
        map
    };
}

/// Every lexeme kind the scanner can produce or reserve. The discriminants
/// are the published token ids consumed by the parser and must never be
/// renumbered; gaps (32) are kept unassigned.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Add = 0,
    Sub = 1,
    Mul = 2,
    Pow = 3,
    AndBin = 4,
    OrBin = 5,
    Equal = 6,
    Diff = 7,
    Div = 8,
    IntDiv = 9,
    Mod = 10,
    LeftBin = 11,
    RightBin = 12,
    Less = 13,
    Greater = 14,
    LessEqual = 15,
    GreaterEqual = 16,
    And = 17,
    Or = 18,
    Not = 19,
    XorBin = 20,
    NotBin = 21,
    If = 22,
    Elif = 23,
    Else = 24,
    For = 25,
    While = 26,
    Comment = 27,
    Newline = 28,
    Cr = 29,
    Id = 30,
    Colon = 31,
    ConstHex = 33,
    ConstOct = 34,
    ConstBin = 35,
    ConstDec = 36,
    Attrib = 37,
    False = 38,
    Class = 39,
    Finally = 40,
    Is = 41,
    Return = 42,
    None = 43,
    Continue = 44,
    Lambda = 45,
    Try = 46,
    True = 47,
    Def = 48,
    From = 49,
    Nonlocal = 50,
    Del = 51,
    Global = 52,
    With = 53,
    As = 54,
    Yield = 55,
    Assert = 56,
    Import = 57,
    Pass = 58,
    Break = 59,
    Except = 60,
    In = 61,
    Raise = 62,
    Backslash = 63,
    Comma = 64,
    Semicolon = 65,
    LeftParenthesis = 66,
    RightParenthesis = 67,
    LeftBracket = 68,
    RightBracket = 69,
    LeftBrace = 70,
    RightBrace = 71,
    At = 72,
    Arrow = 73,
    AttribSub = 74,
    AttribMul = 75,
    AttribDiv = 76,
    AttribDivInt = 77,
    AttribMod = 78,
    AttribMtxMul = 79,
    AttribAndBin = 80,
    AttribOrBin = 81,
    AttribXorBin = 82,
    AttribSum = 83,
    AttribRightBin = 84,
    AttribLeftBin = 85,
    AttribPow = 86,
    Quote = 87,
    DQuote = 88,
    TripleQuote = 89,
    TripleDQuote = 90,
    ConstFloat = 91,
    String = 92,
    Indent = 93,
    Dedent = 94,
    EndMarker = 95,
    Diff2 = 96,
    Await = 97,
    Dot = 98,
    EndProduction = 99,
}

impl TokenKind {
    pub const ALL: [TokenKind; 99] = [
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Pow,
        TokenKind::AndBin,
        TokenKind::OrBin,
        TokenKind::Equal,
        TokenKind::Diff,
        TokenKind::Div,
        TokenKind::IntDiv,
        TokenKind::Mod,
        TokenKind::LeftBin,
        TokenKind::RightBin,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::LessEqual,
        TokenKind::GreaterEqual,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::XorBin,
        TokenKind::NotBin,
        TokenKind::If,
        TokenKind::Elif,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::While,
        TokenKind::Comment,
        TokenKind::Newline,
        TokenKind::Cr,
        TokenKind::Id,
        TokenKind::Colon,
        TokenKind::ConstHex,
        TokenKind::ConstOct,
        TokenKind::ConstBin,
        TokenKind::ConstDec,
        TokenKind::Attrib,
        TokenKind::False,
        TokenKind::Class,
        TokenKind::Finally,
        TokenKind::Is,
        TokenKind::Return,
        TokenKind::None,
        TokenKind::Continue,
        TokenKind::Lambda,
        TokenKind::Try,
        TokenKind::True,
        TokenKind::Def,
        TokenKind::From,
        TokenKind::Nonlocal,
        TokenKind::Del,
        TokenKind::Global,
        TokenKind::With,
        TokenKind::As,
        TokenKind::Yield,
        TokenKind::Assert,
        TokenKind::Import,
        TokenKind::Pass,
        TokenKind::Break,
        TokenKind::Except,
        TokenKind::In,
        TokenKind::Raise,
        TokenKind::Backslash,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LeftParenthesis,
        TokenKind::RightParenthesis,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::At,
        TokenKind::Arrow,
        TokenKind::AttribSub,
        TokenKind::AttribMul,
        TokenKind::AttribDiv,
        TokenKind::AttribDivInt,
        TokenKind::AttribMod,
        TokenKind::AttribMtxMul,
        TokenKind::AttribAndBin,
        TokenKind::AttribOrBin,
        TokenKind::AttribXorBin,
        TokenKind::AttribSum,
        TokenKind::AttribRightBin,
        TokenKind::AttribLeftBin,
        TokenKind::AttribPow,
        TokenKind::Quote,
        TokenKind::DQuote,
        TokenKind::TripleQuote,
        TokenKind::TripleDQuote,
        TokenKind::ConstFloat,
        TokenKind::String,
        TokenKind::Indent,
        TokenKind::Dedent,
        TokenKind::EndMarker,
        TokenKind::Diff2,
        TokenKind::Await,
        TokenKind::Dot,
        TokenKind::EndProduction,
    ];

    /// The stable id consumed by the parser.
    pub fn id(&self) -> u32 {
        *self as u32
    }

    /// The canonical spelling for fixed-spelling kinds, `None` for kinds
    /// whose text is data-dependent.
    pub fn spelling(&self) -> Option<&'static str> {
        match self {
            TokenKind::Add => Some("+"),
            TokenKind::Sub => Some("-"),
            TokenKind::Mul => Some("*"),
            TokenKind::Pow => Some("**"),
            TokenKind::AndBin => Some("&"),
            TokenKind::OrBin => Some("|"),
            TokenKind::Equal => Some("=="),
            TokenKind::Diff => Some("!="),
            TokenKind::Div => Some("/"),
            TokenKind::IntDiv => Some("//"),
            TokenKind::Mod => Some("%"),
            TokenKind::LeftBin => Some("<<"),
            TokenKind::RightBin => Some(">>"),
            TokenKind::Less => Some("<"),
            TokenKind::Greater => Some(">"),
            TokenKind::LessEqual => Some("<="),
            TokenKind::GreaterEqual => Some(">="),
            TokenKind::And => Some("and"),
            TokenKind::Or => Some("or"),
            TokenKind::Not => Some("not"),
            TokenKind::XorBin => Some("^"),
            TokenKind::NotBin => Some("~"),
            TokenKind::If => Some("if"),
            TokenKind::Elif => Some("elif"),
            TokenKind::Else => Some("else"),
            TokenKind::For => Some("for"),
            TokenKind::While => Some("while"),
            TokenKind::Comment => Some("#"),
            TokenKind::Newline => Some("\n"),
            TokenKind::Cr => Some("\r"),
            TokenKind::Id => None,
            TokenKind::Colon => Some(":"),
            TokenKind::ConstHex => None,
            TokenKind::ConstOct => None,
            TokenKind::ConstBin => None,
            TokenKind::ConstDec => None,
            TokenKind::Attrib => Some("="),
            TokenKind::False => Some("False"),
            TokenKind::Class => Some("class"),
            TokenKind::Finally => Some("finally"),
            TokenKind::Is => Some("is"),
            TokenKind::Return => Some("return"),
            TokenKind::None => Some("None"),
            TokenKind::Continue => Some("continue"),
            TokenKind::Lambda => Some("lambda"),
            TokenKind::Try => Some("try"),
            TokenKind::True => Some("True"),
            TokenKind::Def => Some("def"),
            TokenKind::From => Some("from"),
            TokenKind::Nonlocal => Some("nonlocal"),
            TokenKind::Del => Some("del"),
            TokenKind::Global => Some("global"),
            TokenKind::With => Some("with"),
            TokenKind::As => Some("as"),
            TokenKind::Yield => Some("yield"),
            TokenKind::Assert => Some("assert"),
            TokenKind::Import => Some("import"),
            TokenKind::Pass => Some("pass"),
            TokenKind::Break => Some("break"),
            TokenKind::Except => Some("except"),
            TokenKind::In => Some("in"),
            TokenKind::Raise => Some("raise"),
            TokenKind::Backslash => Some("\\"),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LeftParenthesis => Some("("),
            TokenKind::RightParenthesis => Some(")"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::At => Some("@"),
            TokenKind::Arrow => Some("->"),
            TokenKind::AttribSub => Some("-="),
            TokenKind::AttribMul => Some("*="),
            TokenKind::AttribDiv => Some("/="),
            TokenKind::AttribDivInt => Some("//="),
            TokenKind::AttribMod => Some("%="),
            TokenKind::AttribMtxMul => Some("@="),
            TokenKind::AttribAndBin => Some("&="),
            TokenKind::AttribOrBin => Some("|="),
            TokenKind::AttribXorBin => Some("^="),
            TokenKind::AttribSum => Some("+="),
            TokenKind::AttribRightBin => Some(">>="),
            TokenKind::AttribLeftBin => Some("<<="),
            TokenKind::AttribPow => Some("**="),
            TokenKind::Quote => Some("'"),
            TokenKind::DQuote => Some("\""),
            TokenKind::TripleQuote => Some("'''"),
            TokenKind::TripleDQuote => Some("\"\"\""),
            TokenKind::ConstFloat => None,
            TokenKind::String => None,
            TokenKind::Indent => None,
            TokenKind::Dedent => None,
            TokenKind::EndMarker => None,
            TokenKind::Diff2 => Some("<>"),
            TokenKind::Await => Some("await"),
            TokenKind::Dot => Some("."),
            TokenKind::EndProduction => Some("$"),
        }
    }

    /// Keywords are the fixed spellings made of identifier characters; they
    /// only match on a word boundary.
    pub fn is_keyword(&self) -> bool {
        match self.spelling() {
            Some(spelling) => spelling.chars().next().unwrap().is_ascii_alphabetic(),
            _ => false,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_identifier_continuation(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Maximal munch over the registry: the candidate with the longest spelling
/// that prefixes `rest` wins. Keyword candidates are only accepted on a word
/// boundary; otherwise resolution falls through to shorter candidates and,
/// when none is left, to the identifier recogniser in the caller.
pub fn longest_match(rest: &[char]) -> Option<TokenKind> {
    let candidates = SYMBOL_LOOKUP.get(rest.first()?)?;

    for kind in candidates {
        let spelling: Vec<char> = kind.spelling().unwrap().chars().collect();

        if rest.len() < spelling.len() || rest[..spelling.len()] != spelling[..] {
            continue;
        }

        if kind.is_keyword() {
            if let Some(next) = rest.get(spelling.len()) {
                if is_identifier_continuation(*next) {
                    continue;
                }
            }
        }

        return Some(*kind);
    }

    Option::None
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexogram: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexogram: {}}}", self.kind, self.lexogram)
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.0
    }

    pub fn column(&self) -> u32 {
        self.span.start.1
    }

    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Id,
            TokenKind::String,
            TokenKind::ConstHex,
            TokenKind::ConstOct,
            TokenKind::ConstBin,
            TokenKind::ConstDec,
            TokenKind::ConstFloat,
        ]) {
            println!("{} ({})", self.kind, self.lexogram);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
