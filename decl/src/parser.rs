//! Parser for the declaration language (see `decl.pest`).

use alloc::{string::String, vec::Vec};
use core::cell::{Cell, RefCell};

use bumpalo::Bump;
use hashbrown::HashMap;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;

use crate::error::{Arity, DeclError, Span};
use crate::expr::{Builder, TypeArena, TypeExpr};
use crate::seq::Seq;

#[derive(Parser)]
#[grammar = "decl.pest"]
struct DeclParser;

/// One `type Name<..> = ty;` item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl<'a> {
    pub name: &'a str,
    pub generics: &'a [&'a str],
    pub ty: &'a TypeExpr<'a>,
    pub span: Span,
}

/// Parse a single type expression such as `pfun<i32, i32>`.
pub fn parse_type<'a>(
    arena: &'a Bump,
    source: &str,
    max_depth: usize,
) -> Result<&'a TypeExpr<'a>, DeclError> {
    let ctx = ParseContext::new(arena, max_depth);
    let mut pairs = DeclParser::parse(Rule::type_main, source).map_err(DeclError::from_pest)?;
    let main = pairs.next().ok_or_else(|| missing(Span(0..source.len())))?;
    let span = main.as_span().into();
    let mut inner = main.into_inner();
    ctx.parse_ty(next_pair(&mut inner, &span)?)
}

/// Parse a file of declarations. Names must be unique.
///
/// A declaration may use any earlier one by name; the use resolves to a
/// [`TypeExpr::Alias`] that keeps whether the earlier type is sized and
/// whether it borrows.
pub fn parse_file<'a>(
    arena: &'a Bump,
    source: &str,
    max_depth: usize,
) -> Result<&'a [Decl<'a>], DeclError> {
    let ctx = ParseContext::new(arena, max_depth);
    let mut pairs = DeclParser::parse(Rule::file, source).map_err(DeclError::from_pest)?;
    let file = pairs.next().ok_or_else(|| missing(Span(0..source.len())))?;

    let mut decls = Vec::new();
    for pair in file.into_inner() {
        if pair.as_rule() != Rule::decl {
            continue;
        }
        let decl = ctx.parse_decl(pair)?;
        let mut declared = ctx.declared.borrow_mut();
        if let Some((first, _)) = declared.get(decl.name) {
            return Err(DeclError::Duplicate {
                name: decl.name.into(),
                span: decl.span,
                first: first.clone(),
            });
        }
        declared.insert(decl.name, (decl.span.clone(), decl.ty));
        decls.push(decl);
    }
    Ok(arena.alloc_slice_fill_iter(decls))
}

enum Arg<'a> {
    Type(&'a TypeExpr<'a>),
    Dim(&'a str, Span),
}

struct ParseContext<'a> {
    types: TypeArena<'a>,
    depth: Cell<usize>,
    max_depth: usize,
    /// Earlier declarations by name: where they are and what they resolved to.
    declared: RefCell<HashMap<&'a str, (Span, &'a TypeExpr<'a>)>>,
    /// Generic parameters of the declaration being parsed. They shadow
    /// declarations of the same name.
    generics: RefCell<Vec<&'a str>>,
}

impl<'a> ParseContext<'a> {
    fn new(arena: &'a Bump, max_depth: usize) -> Self {
        Self {
            types: TypeArena::new(arena),
            depth: Cell::new(0),
            max_depth,
            declared: RefCell::new(HashMap::new()),
            generics: RefCell::new(Vec::new()),
        }
    }

    fn arena(&self) -> &'a Bump {
        self.types.bump()
    }

    fn parse_decl(&self, pair: Pair<'_, Rule>) -> Result<Decl<'a>, DeclError> {
        let span: Span = pair.as_span().into();
        let mut name = None;
        let mut ty = None;
        self.generics.borrow_mut().clear();

        for part in pair.into_inner() {
            match part.as_rule() {
                Rule::kw_type => {}
                Rule::ident => name = Some(self.arena().alloc_str(part.as_str()) as &str),
                Rule::generics => {
                    let mut generics = self.generics.borrow_mut();
                    for param in part.into_inner() {
                        generics.push(self.arena().alloc_str(param.as_str()) as &str);
                    }
                }
                _ => ty = Some(self.parse_ty(part)?),
            }
        }
        let generics = self.generics.take();

        let (Some(name), Some(ty)) = (name, ty) else {
            return Err(missing(span));
        };
        tracing::trace!(name, generics = generics.len(), "parsed declaration");
        Ok(Decl {
            name,
            generics: self.arena().alloc_slice_copy(&generics),
            ty,
            span,
        })
    }

    fn parse_ty(&self, pair: Pair<'_, Rule>) -> Result<&'a TypeExpr<'a>, DeclError> {
        let span: Span = pair.as_span().into();
        let depth = self.depth.get();
        if depth >= self.max_depth {
            return Err(DeclError::TooDeep { max: self.max_depth, span });
        }
        self.depth.set(depth + 1);

        let result = match pair.as_rule() {
            Rule::call => self.parse_call(pair, span),
            Rule::named => self.parse_named(pair, span),
            Rule::unit => Ok(self.types.unit()),
            Rule::dim => Err(DeclError::ExpectedType {
                literal: pair.as_str().into(),
                span,
            }),
            rule => Err(DeclError::Syntax {
                message: alloc::format!("unexpected {:?}", rule),
                span,
            }),
        };

        self.depth.set(depth);
        result
    }

    fn parse_args(&self, pair: Pair<'_, Rule>) -> Result<Vec<Arg<'a>>, DeclError> {
        pair.into_inner()
            .map(|arg| match arg.as_rule() {
                Rule::dim => {
                    let literal = self.arena().alloc_str(arg.as_str());
                    Ok(Arg::Dim(literal, arg.as_span().into()))
                }
                _ => self.parse_ty(arg).map(Arg::Type),
            })
            .collect()
    }

    fn parse_named(&self, pair: Pair<'_, Rule>, span: Span) -> Result<&'a TypeExpr<'a>, DeclError> {
        let mut inner = pair.into_inner();
        let path = next_pair(&mut inner, &span)?.as_str();
        let args = match inner.next() {
            Some(args) => self.parse_args(args)?,
            None => Vec::new(),
        };
        let args = args
            .into_iter()
            .map(expect_type)
            .collect::<Result<Vec<_>, _>>()?;
        match self.lookup(path) {
            Some(target) => Ok(self.types.alias(path, &args, target)),
            None => Ok(self.types.named(path, &args)),
        }
    }

    /// The type an earlier declaration named `path` resolved to, unless a
    /// generic parameter hides it.
    fn lookup(&self, path: &str) -> Option<&'a TypeExpr<'a>> {
        if self.generics.borrow().iter().any(|g| *g == path) {
            return None;
        }
        self.declared.borrow().get(path).map(|(_, ty)| *ty)
    }

    fn parse_call(&self, pair: Pair<'_, Rule>, span: Span) -> Result<&'a TypeExpr<'a>, DeclError> {
        let mut inner = pair.into_inner();
        let name = next_pair(&mut inner, &span)?;
        let builder = Builder::from_name(name.as_str()).ok_or_else(|| DeclError::Syntax {
            message: alloc::format!("unknown builder `{}`", name.as_str()),
            span: name.as_span().into(),
        })?;
        let args = self.parse_args(next_pair(&mut inner, &span)?)?;
        tracing::trace!(%builder, args = args.len(), "applying builder");

        match builder {
            Builder::Array => self.build_array(args, span),
            Builder::Ref | Builder::Ptr | Builder::Cnst | Builder::Vltl => {
                let [arg] = <[Arg<'a>; 1]>::try_from(args).map_err(|args| DeclError::Arity {
                    builder,
                    expected: builder.arity(),
                    found: args.len(),
                    span: span.clone(),
                })?;
                let ty = expect_type(arg)?;
                match builder {
                    Builder::Ref => Ok(self.types.reference(ty)),
                    Builder::Ptr => Ok(self.types.ptr(ty)),
                    Builder::Cnst => self.types.cnst(ty, &span),
                    _ => self.types.vltl(ty, &span),
                }
            }
            Builder::LFun | Builder::Fun | Builder::PLFun | Builder::PFun => {
                let sig = args
                    .into_iter()
                    .try_fold(Seq::nil(self.arena()), |seq, arg| {
                        Ok::<_, DeclError>(seq.push_back(self.arena(), expect_type(arg)?))
                    })?;
                match builder {
                    Builder::LFun => self.types.lfun(sig, &span),
                    Builder::Fun => self.types.fun(sig, &span),
                    Builder::PLFun => self.types.plfun(sig, &span),
                    _ => self.types.pfun(sig, &span),
                }
            }
        }
    }

    fn build_array(&self, args: Vec<Arg<'a>>, span: Span) -> Result<&'a TypeExpr<'a>, DeclError> {
        let mut args = args.into_iter();
        let Some(elem) = args.next() else {
            return Err(DeclError::Arity {
                builder: Builder::Array,
                expected: Arity::Exactly(1),
                found: 0,
                span,
            });
        };
        let elem = expect_type(elem)?;

        let dims = args.try_fold(Seq::nil(self.arena()), |seq, arg| match arg {
            Arg::Dim(literal, span) => Ok(seq.push_back(self.arena(), parse_dim(literal, span)?)),
            Arg::Type(_) => Err(DeclError::ExpectedDimension { span: span.clone() }),
        })?;
        self.types.array(elem, dims, &span)
    }
}

fn expect_type<'a>(arg: Arg<'a>) -> Result<&'a TypeExpr<'a>, DeclError> {
    match arg {
        Arg::Type(ty) => Ok(ty),
        Arg::Dim(literal, span) => Err(DeclError::ExpectedType {
            literal: literal.into(),
            span,
        }),
    }
}

fn parse_dim(literal: &str, span: Span) -> Result<usize, DeclError> {
    let digits: String = literal.chars().filter(|&c| c != '_').collect();
    digits.parse().map_err(|_| DeclError::DimensionOverflow {
        literal: literal.into(),
        span,
    })
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, span: &Span) -> Result<Pair<'i, Rule>, DeclError> {
    pairs.next().ok_or_else(|| missing(span.clone()))
}

fn missing(span: Span) -> DeclError {
    DeclError::Syntax {
        message: "missing expected pair in rule".into(),
        span,
    }
}
