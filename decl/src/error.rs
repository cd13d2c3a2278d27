//! Errors reported while expanding declarations.

use alloc::string::String;
use core::{fmt, ops::Range};

use crate::expr::Builder;

/// Byte range into the source being expanded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        Span(span.start()..span.end())
    }
}

/// How many arguments a builder takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclError {
    #[error("syntax error: {message}")]
    Syntax { message: String, span: Span },

    #[error("`{builder}` takes {expected} type argument(s), found {found}")]
    Arity {
        builder: Builder,
        expected: Arity,
        found: usize,
        span: Span,
    },

    #[error("cannot rotate an empty type list: a function needs at least its return type")]
    EmptySequence { span: Span },

    #[error("expected a type, found the array dimension `{literal}`")]
    ExpectedType { literal: String, span: Span },

    #[error("expected an array dimension, found a type")]
    ExpectedDimension { span: Span },

    #[error("array dimension `{literal}` does not fit in usize")]
    DimensionOverflow { literal: String, span: Span },

    #[error("`{builder}` needs a sized type here, found `{found}`")]
    Unsized {
        builder: Builder,
        found: String,
        span: Span,
    },

    #[error("`{name}` is declared more than once")]
    Duplicate { name: String, span: Span, first: Span },

    #[error("type nesting exceeds the maximum depth of {max}")]
    TooDeep { max: usize, span: Span },
}

impl DeclError {
    /// Where in the source the error was detected.
    pub fn span(&self) -> &Span {
        match self {
            DeclError::Syntax { span, .. }
            | DeclError::Arity { span, .. }
            | DeclError::EmptySequence { span }
            | DeclError::ExpectedType { span, .. }
            | DeclError::ExpectedDimension { span }
            | DeclError::DimensionOverflow { span, .. }
            | DeclError::Unsized { span, .. }
            | DeclError::Duplicate { span, .. }
            | DeclError::TooDeep { span, .. } => span,
        }
    }

    pub(crate) fn from_pest<R: pest::RuleType>(err: pest::error::Error<R>) -> Self {
        let span = match err.location {
            pest::error::InputLocation::Pos(pos) => Span(pos..pos),
            pest::error::InputLocation::Span((start, end)) => Span(start..end),
        };
        DeclError::Syntax {
            message: err.variant.message().into_owned(),
            span,
        }
    }
}
