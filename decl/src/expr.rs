//! Type expressions and the builders that produce them.

use core::fmt;

use bumpalo::Bump;

use crate::error::{Arity, DeclError, Span};
use crate::seq::{Seq, SeqCtor};

/// The shorthand builders of the declaration language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builder {
    Ref,
    Ptr,
    Array,
    Cnst,
    Vltl,
    LFun,
    Fun,
    PLFun,
    PFun,
}

impl Builder {
    pub const ALL: [Builder; 9] = [
        Builder::Ref,
        Builder::Ptr,
        Builder::Array,
        Builder::Cnst,
        Builder::Vltl,
        Builder::LFun,
        Builder::Fun,
        Builder::PLFun,
        Builder::PFun,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builder::Ref => "ref",
            Builder::Ptr => "ptr",
            Builder::Array => "array",
            Builder::Cnst => "cnst",
            Builder::Vltl => "vltl",
            Builder::LFun => "lfun",
            Builder::Fun => "fun",
            Builder::PLFun => "plfun",
            Builder::PFun => "pfun",
        }
    }

    /// Number of type arguments accepted (array dimensions not included).
    pub fn arity(self) -> Arity {
        match self {
            Builder::Ref | Builder::Ptr | Builder::Array | Builder::Cnst | Builder::Vltl => {
                Arity::Exactly(1)
            }
            Builder::LFun | Builder::Fun | Builder::PLFun | Builder::PFun => Arity::AtLeast(1),
        }
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved composite type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeExpr<'a> {
    /// A caller type such as `i32`, `std::string::String` or `Vec<u8>`.
    Named {
        path: &'a str,
        args: &'a [&'a TypeExpr<'a>],
    },

    /// An earlier declaration used by name, with what it resolved to.
    Alias {
        name: &'a str,
        args: &'a [&'a TypeExpr<'a>],
        sized: bool,
        borrows: bool,
    },

    /// `()`
    Unit,

    /// `*mut T`
    Ptr(&'a TypeExpr<'a>),

    /// `&T`
    Ref(&'a TypeExpr<'a>),

    /// `Const<T>`
    Const(&'a TypeExpr<'a>),

    /// `Volatile<T>`
    Volatile(&'a TypeExpr<'a>),

    /// Array of `elem`, outermost dimension first. No dimensions means the
    /// unknown-bound array `[T]`.
    Array {
        elem: &'a TypeExpr<'a>,
        dims: &'a [usize],
    },

    /// `dyn Fn(params) -> ret`
    Function {
        ret: &'a TypeExpr<'a>,
        params: &'a [&'a TypeExpr<'a>],
    },

    /// `fn(params) -> ret`
    FnPointer {
        ret: &'a TypeExpr<'a>,
        params: &'a [&'a TypeExpr<'a>],
    },
}

impl<'a> TypeExpr<'a> {
    /// Whether values of this type have a size known at compile time.
    pub fn is_sized(&self) -> bool {
        match self {
            TypeExpr::Function { .. } => false,
            TypeExpr::Array { dims, .. } => !dims.is_empty(),
            TypeExpr::Named { path, args } => !(args.is_empty() && *path == "str"),
            TypeExpr::Alias { sized, .. } => *sized,
            _ => true,
        }
    }

    /// Whether spelling this type needs a reference lifetime.
    pub fn borrows(&self) -> bool {
        self.any(|ty| matches!(ty, TypeExpr::Ref(_) | TypeExpr::Alias { borrows: true, .. }))
    }

    /// Calls `f` on this type and every type nested in it, parents first.
    pub fn walk(&self, f: &mut impl FnMut(&TypeExpr<'a>)) {
        f(self);
        match self {
            TypeExpr::Unit => {}
            TypeExpr::Named { args, .. } | TypeExpr::Alias { args, .. } => {
                for arg in args.iter() {
                    arg.walk(f);
                }
            }
            TypeExpr::Ptr(inner)
            | TypeExpr::Ref(inner)
            | TypeExpr::Const(inner)
            | TypeExpr::Volatile(inner)
            | TypeExpr::Array { elem: inner, .. } => inner.walk(f),
            TypeExpr::Function { ret, params } | TypeExpr::FnPointer { ret, params } => {
                for param in params.iter() {
                    param.walk(f);
                }
                ret.walk(f);
            }
        }
    }

    pub fn any(&self, mut pred: impl FnMut(&TypeExpr<'a>) -> bool) -> bool {
        let mut found = false;
        self.walk(&mut |ty| found = found || pred(ty));
        found
    }
}

/// Allocates type expressions in an arena and implements the builders.
#[derive(Debug, Clone, Copy)]
pub struct TypeArena<'a> {
    arena: &'a Bump,
}

impl<'a> TypeArena<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self { arena }
    }

    pub fn bump(&self) -> &'a Bump {
        self.arena
    }

    pub fn alloc(&self, ty: TypeExpr<'a>) -> &'a TypeExpr<'a> {
        self.arena.alloc(ty)
    }

    pub fn unit(&self) -> &'a TypeExpr<'a> {
        self.alloc(TypeExpr::Unit)
    }

    pub fn named(&self, path: &str, args: &[&'a TypeExpr<'a>]) -> &'a TypeExpr<'a> {
        self.alloc(TypeExpr::Named {
            path: self.arena.alloc_str(path),
            args: self.arena.alloc_slice_copy(args),
        })
    }

    /// Use of the declaration `name`, which resolved to `target`.
    pub fn alias(
        &self,
        name: &str,
        args: &[&'a TypeExpr<'a>],
        target: &TypeExpr<'_>,
    ) -> &'a TypeExpr<'a> {
        self.alloc(TypeExpr::Alias {
            name: self.arena.alloc_str(name),
            args: self.arena.alloc_slice_copy(args),
            sized: target.is_sized(),
            borrows: target.borrows(),
        })
    }

    pub fn ptr(&self, ty: &'a TypeExpr<'a>) -> &'a TypeExpr<'a> {
        self.alloc(TypeExpr::Ptr(ty))
    }

    pub fn reference(&self, ty: &'a TypeExpr<'a>) -> &'a TypeExpr<'a> {
        self.alloc(TypeExpr::Ref(ty))
    }

    pub fn cnst(&self, ty: &'a TypeExpr<'a>, span: &Span) -> Result<&'a TypeExpr<'a>, DeclError> {
        require_sized(Builder::Cnst, ty, span)?;
        Ok(self.alloc(TypeExpr::Const(ty)))
    }

    pub fn vltl(&self, ty: &'a TypeExpr<'a>, span: &Span) -> Result<&'a TypeExpr<'a>, DeclError> {
        require_sized(Builder::Vltl, ty, span)?;
        Ok(self.alloc(TypeExpr::Volatile(ty)))
    }

    /// Array of `elem` with `dims`, outermost first.
    pub fn array(
        &self,
        elem: &'a TypeExpr<'a>,
        dims: &'a Seq<'a, usize>,
        span: &Span,
    ) -> Result<&'a TypeExpr<'a>, DeclError> {
        dims.apply(self.arena, &ArrayCtor { types: *self, elem, span })
    }

    /// Function type from a return-type-first list.
    pub fn lfun(
        &self,
        sig: &'a Seq<'a, &'a TypeExpr<'a>>,
        span: &Span,
    ) -> Result<&'a TypeExpr<'a>, DeclError> {
        sig.apply(self.arena, &FnCtor { types: *self, builder: Builder::LFun, span })
    }

    /// Function type from a return-type-last list.
    pub fn fun(
        &self,
        sig: &'a Seq<'a, &'a TypeExpr<'a>>,
        span: &Span,
    ) -> Result<&'a TypeExpr<'a>, DeclError> {
        let rotated = sig.rotate_last_to_front(self.arena, span)?;
        tracing::trace!(params = sig.len().saturating_sub(1), "rotated return type to front");
        rotated.apply(self.arena, &FnCtor { types: *self, builder: Builder::Fun, span })
    }

    /// Pointer to `ty`: the native `fn` pointer for function types, a raw
    /// pointer for anything else.
    pub fn fn_ptr(&self, ty: &'a TypeExpr<'a>) -> &'a TypeExpr<'a> {
        match *ty {
            TypeExpr::Function { ret, params } => self.alloc(TypeExpr::FnPointer { ret, params }),
            _ => self.ptr(ty),
        }
    }

    pub fn plfun(
        &self,
        sig: &'a Seq<'a, &'a TypeExpr<'a>>,
        span: &Span,
    ) -> Result<&'a TypeExpr<'a>, DeclError> {
        Ok(self.fn_ptr(self.lfun(sig, span)?))
    }

    pub fn pfun(
        &self,
        sig: &'a Seq<'a, &'a TypeExpr<'a>>,
        span: &Span,
    ) -> Result<&'a TypeExpr<'a>, DeclError> {
        Ok(self.fn_ptr(self.fun(sig, span)?))
    }
}

fn require_sized(builder: Builder, ty: &TypeExpr<'_>, span: &Span) -> Result<(), DeclError> {
    if ty.is_sized() {
        return Ok(());
    }
    Err(DeclError::Unsized {
        builder,
        found: crate::render::Renderer::default().render(ty),
        span: span.clone(),
    })
}

struct ArrayCtor<'s, 'a> {
    types: TypeArena<'a>,
    elem: &'a TypeExpr<'a>,
    span: &'s Span,
}

impl<'a> SeqCtor<'a, usize> for ArrayCtor<'_, 'a> {
    type Output = &'a TypeExpr<'a>;

    fn construct(&self, _arena: &'a Bump, dims: &'a [usize]) -> Result<Self::Output, DeclError> {
        require_sized(Builder::Array, self.elem, self.span)?;
        Ok(self.types.alloc(TypeExpr::Array { elem: self.elem, dims }))
    }
}

struct FnCtor<'s, 'a> {
    types: TypeArena<'a>,
    builder: Builder,
    span: &'s Span,
}

impl<'a> SeqCtor<'a, &'a TypeExpr<'a>> for FnCtor<'_, 'a> {
    type Output = &'a TypeExpr<'a>;

    fn construct(
        &self,
        _arena: &'a Bump,
        sig: &'a [&'a TypeExpr<'a>],
    ) -> Result<Self::Output, DeclError> {
        let Some((&ret, params)) = sig.split_first() else {
            return Err(DeclError::Arity {
                builder: self.builder,
                expected: self.builder.arity(),
                found: 0,
                span: self.span.clone(),
            });
        };
        for &ty in sig {
            require_sized(self.builder, ty, self.span)?;
        }
        Ok(self.types.alloc(TypeExpr::Function { ret, params }))
    }
}
