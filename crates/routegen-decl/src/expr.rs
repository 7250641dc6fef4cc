//! Default-value expression trees.
//!
//! The facility hands over parameter defaults as syntax trees rather than raw
//! text so the resolver can rewrite them before they are emitted elsewhere.
//! Identifier nodes carry the facility's resolution (`symbol`) when one exists,
//! and `nameof` nodes carry their constant value.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Literal {
    Null,
    Bool(bool),
    /// Numeric literal exactly as written (`42`, `1.5m`, `0x10`).
    Number(String),
    String(String),
    Char(char),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Trivia {
    Whitespace(String),
    LineComment(String),
    BlockComment(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InterpolationPart {
    Text { text: String },
    Hole { expr: Expr },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Literal {
        value: Literal,
    },
    Identifier {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        symbol: Option<String>,
    },
    MemberAccess {
        target: Box<Expr>,
        name: String,
    },
    NameOf {
        argument: Box<Expr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        constant: Option<String>,
    },
    Default {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<Box<Expr>>,
    },
    Cast {
        ty: Box<Expr>,
        operand: Box<Expr>,
    },
    Unary {
        op: String,
        operand: Box<Expr>,
    },
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Parenthesized {
        inner: Box<Expr>,
    },
    Invocation {
        target: Box<Expr>,
        #[serde(default)]
        arguments: Vec<Expr>,
    },
    Checked {
        unchecked: bool,
        inner: Box<Expr>,
    },
    Interpolated {
        parts: Vec<InterpolationPart>,
    },
    /// An expression surrounded by whitespace or comments.
    Trivia {
        #[serde(default)]
        leading: Vec<Trivia>,
        inner: Box<Expr>,
        #[serde(default)]
        trailing: Vec<Trivia>,
    },
}

impl Expr {
    pub fn string(text: &str) -> Self {
        Self::Literal {
            value: Literal::String(text.to_string()),
        }
    }

    pub fn number(text: &str) -> Self {
        Self::Literal {
            value: Literal::Number(text.to_string()),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self::Literal {
            value: Literal::Bool(value),
        }
    }

    pub fn null() -> Self {
        Self::Literal { value: Literal::Null }
    }

    pub fn ident(name: &str) -> Self {
        Self::Identifier {
            name: name.to_string(),
            symbol: None,
        }
    }

    /// An identifier the facility resolved to `symbol`.
    pub fn resolved(name: &str, symbol: &str) -> Self {
        Self::Identifier {
            name: name.to_string(),
            symbol: Some(symbol.to_string()),
        }
    }

    #[must_use]
    pub fn member(self, name: &str) -> Self {
        Self::MemberAccess {
            target: Box::new(self),
            name: name.to_string(),
        }
    }

    pub fn binary(left: Self, op: &str, right: Self) -> Self {
        Self::Binary {
            op: op.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: &str, operand: Self) -> Self {
        Self::Unary {
            op: op.to_string(),
            operand: Box::new(operand),
        }
    }

    pub fn cast(ty: Self, operand: Self) -> Self {
        Self::Cast {
            ty: Box::new(ty),
            operand: Box::new(operand),
        }
    }

    pub fn parenthesized(inner: Self) -> Self {
        Self::Parenthesized { inner: Box::new(inner) }
    }

    pub fn name_of(argument: Self, constant: Option<&str>) -> Self {
        Self::NameOf {
            argument: Box::new(argument),
            constant: constant.map(str::to_string),
        }
    }

    #[must_use]
    pub fn with_trivia(self, leading: Vec<Trivia>, trailing: Vec<Trivia>) -> Self {
        Self::Trivia {
            leading,
            inner: Box::new(self),
            trailing,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => fmt::Display::fmt(value, f),
            Self::Identifier { name, .. } => f.write_str(name),
            Self::MemberAccess { target, name } => write!(f, "{target}.{name}"),
            Self::NameOf { argument, .. } => write!(f, "nameof({argument})"),
            Self::Default { ty: None } => f.write_str("default"),
            Self::Default { ty: Some(ty) } => write!(f, "default({ty})"),
            Self::Cast { ty, operand } => write!(f, "({ty}){operand}"),
            Self::Unary { op, operand } => write!(f, "{op}{operand}"),
            Self::Binary { op, left, right } => write!(f, "{left} {op} {right}"),
            Self::Parenthesized { inner } => write!(f, "({inner})"),
            Self::Invocation { target, arguments } => {
                write!(f, "{target}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_char(')')
            }
            Self::Checked { unchecked, inner } => {
                let keyword = if *unchecked { "unchecked" } else { "checked" };
                write!(f, "{keyword}({inner})")
            }
            Self::Interpolated { parts } => {
                f.write_str("$\"")?;
                for part in parts {
                    match part {
                        InterpolationPart::Text { text } => f.write_str(text)?,
                        InterpolationPart::Hole { expr } => write!(f, "{{{expr}}}")?,
                    }
                }
                f.write_char('"')
            }
            Self::Trivia {
                leading,
                inner,
                trailing,
            } => {
                for trivia in leading {
                    write!(f, "{trivia}")?;
                }
                write!(f, "{inner}")?;
                for trivia in trailing {
                    write!(f, "{trivia}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(text) => f.write_str(text),
            Self::String(text) => {
                f.write_char('"')?;
                for ch in text.chars() {
                    write_escaped(f, ch, '"')?;
                }
                f.write_char('"')
            }
            Self::Char(ch) => {
                f.write_char('\'')?;
                write_escaped(f, *ch, '\'')?;
                f.write_char('\'')
            }
        }
    }
}

impl fmt::Display for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whitespace(text) => f.write_str(text),
            Self::LineComment(text) => writeln!(f, "//{text}"),
            Self::BlockComment(text) => write!(f, "/*{text}*/"),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, ch: char, quote: char) -> fmt::Result {
    match ch {
        '\\' => f.write_str("\\\\"),
        '\0' => f.write_str("\\0"),
        '\u{7}' => f.write_str("\\a"),
        '\u{8}' => f.write_str("\\b"),
        '\u{C}' => f.write_str("\\f"),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '\t' => f.write_str("\\t"),
        '\u{B}' => f.write_str("\\v"),
        c if c == quote => write!(f, "\\{c}"),
        c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
            write!(f, "\\u{:04X}", u32::from(c))
        }
        c => f.write_char(c),
    }
}
