//! Default-value rewriting.
//!
//! Defaults are spliced into generated code far from their declaration, so
//! they must not depend on the declaring scope:
//! - `nameof(...)` with a known constant becomes a string literal
//! - resolved identifiers become their fully-qualified symbol text
//! - comments and whitespace are dropped

use routegen_decl::{Expr, InterpolationPart, Literal};

pub fn rewrite(expr: &Expr) -> Expr {
    match expr {
        Expr::Literal { .. } => expr.clone(),
        Expr::Identifier { name, symbol } => Expr::Identifier {
            name: symbol.clone().unwrap_or_else(|| name.clone()),
            symbol: None,
        },
        Expr::MemberAccess { target, name } => Expr::MemberAccess {
            target: Box::new(rewrite(target)),
            name: name.clone(),
        },
        Expr::NameOf {
            constant: Some(value),
            ..
        } => Expr::Literal {
            value: Literal::String(value.clone()),
        },
        Expr::NameOf {
            argument,
            constant: None,
        } => Expr::NameOf {
            argument: Box::new(rewrite(argument)),
            constant: None,
        },
        Expr::Default { ty } => Expr::Default {
            ty: ty.as_deref().map(|ty| Box::new(rewrite(ty))),
        },
        Expr::Cast { ty, operand } => Expr::Cast {
            ty: Box::new(rewrite(ty)),
            operand: Box::new(rewrite(operand)),
        },
        Expr::Unary { op, operand } => Expr::Unary {
            op: op.clone(),
            operand: Box::new(rewrite(operand)),
        },
        Expr::Binary { op, left, right } => Expr::Binary {
            op: op.clone(),
            left: Box::new(rewrite(left)),
            right: Box::new(rewrite(right)),
        },
        Expr::Parenthesized { inner } => Expr::Parenthesized {
            inner: Box::new(rewrite(inner)),
        },
        Expr::Invocation { target, arguments } => Expr::Invocation {
            target: Box::new(rewrite(target)),
            arguments: arguments.iter().map(rewrite).collect(),
        },
        Expr::Checked { unchecked, inner } => Expr::Checked {
            unchecked: *unchecked,
            inner: Box::new(rewrite(inner)),
        },
        Expr::Interpolated { parts } => Expr::Interpolated {
            parts: parts
                .iter()
                .map(|part| match part {
                    InterpolationPart::Text { text } => InterpolationPart::Text { text: text.clone() },
                    InterpolationPart::Hole { expr } => InterpolationPart::Hole { expr: rewrite(expr) },
                })
                .collect(),
        },
        Expr::Trivia { inner, .. } => rewrite(inner),
    }
}

/// Rewrite and render to canonical source text.
pub fn render(expr: &Expr) -> String {
    rewrite(expr).to_string()
}
