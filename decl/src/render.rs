//! Rendering type expressions as Rust source.

use alloc::string::String;
use core::fmt::Write;

use crate::expr::TypeExpr;

/// Spells a [`TypeExpr`] the way it would be written by hand.
///
/// ```
/// use beautiful_decl::{Renderer, TypeArena};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let t = TypeArena::new(&arena);
/// let ty = t.reference(t.named("str", &[]));
///
/// assert_eq!(Renderer::default().render(ty), "&str");
/// assert_eq!(Renderer::default().with_lifetime("a").render(ty), "&'a str");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    /// Path the qualifier wrappers are spelled under, e.g. `beautiful`.
    /// `None` spells them bare (`Const<T>`).
    pub qualifier_path: Option<String>,

    /// Lifetime name used for references. `None` elides it.
    pub lifetime: Option<String>,
}

impl Renderer {
    pub fn with_qualifier_path(mut self, path: impl Into<String>) -> Self {
        self.qualifier_path = Some(path.into());
        self
    }

    pub fn with_lifetime(mut self, name: impl Into<String>) -> Self {
        self.lifetime = Some(name.into());
        self
    }

    pub fn render(&self, ty: &TypeExpr<'_>) -> String {
        let mut out = String::new();
        self.write(ty, &mut out);
        out
    }

    pub fn write(&self, ty: &TypeExpr<'_>, out: &mut String) {
        match ty {
            TypeExpr::Named { path, args } => {
                out.push_str(path);
                if !args.is_empty() {
                    out.push('<');
                    self.write_list(args, out);
                    out.push('>');
                }
            }
            TypeExpr::Alias {
                name,
                args,
                borrows,
                ..
            } => {
                out.push_str(name);
                if *borrows || !args.is_empty() {
                    out.push('<');
                    if *borrows {
                        match &self.lifetime {
                            Some(lifetime) => {
                                let _ = write!(out, "'{}", lifetime);
                            }
                            None => out.push_str("'_"),
                        }
                        if !args.is_empty() {
                            out.push_str(", ");
                        }
                    }
                    self.write_list(args, out);
                    out.push('>');
                }
            }
            TypeExpr::Unit => out.push_str("()"),
            TypeExpr::Ptr(inner) => {
                out.push_str("*mut ");
                self.write(inner, out);
            }
            TypeExpr::Ref(inner) => {
                out.push('&');
                if let Some(lifetime) = &self.lifetime {
                    let _ = write!(out, "'{} ", lifetime);
                }
                self.write(inner, out);
            }
            TypeExpr::Const(inner) => self.write_wrapper("Const", inner, out),
            TypeExpr::Volatile(inner) => self.write_wrapper("Volatile", inner, out),
            TypeExpr::Array { elem, dims } => {
                // `[[T; inner]; outer]`: open one bracket per dimension, then
                // close them innermost first.
                if dims.is_empty() {
                    out.push('[');
                    self.write(elem, out);
                    out.push(']');
                    return;
                }
                dims.iter().for_each(|_| out.push('['));
                self.write(elem, out);
                for dim in dims.iter().rev() {
                    let _ = write!(out, "; {}]", dim);
                }
            }
            TypeExpr::Function { ret, params } => {
                out.push_str("dyn ");
                self.write_signature("Fn", ret, params, out);
            }
            TypeExpr::FnPointer { ret, params } => self.write_signature("fn", ret, params, out),
        }
    }

    fn write_wrapper(&self, name: &str, inner: &TypeExpr<'_>, out: &mut String) {
        if let Some(path) = &self.qualifier_path {
            out.push_str(path);
            out.push_str("::");
        }
        out.push_str(name);
        out.push('<');
        self.write(inner, out);
        out.push('>');
    }

    fn write_signature(
        &self,
        keyword: &str,
        ret: &TypeExpr<'_>,
        params: &[&TypeExpr<'_>],
        out: &mut String,
    ) {
        out.push_str(keyword);
        out.push('(');
        self.write_list(params, out);
        out.push(')');
        if *ret != TypeExpr::Unit {
            out.push_str(" -> ");
            self.write(ret, out);
        }
    }

    fn write_list(&self, items: &[&TypeExpr<'_>], out: &mut String) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write(item, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Span;
    use crate::expr::TypeArena;
    use crate::seq::Seq;
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_arrays() {
        let arena = Bump::new();
        let t = TypeArena::new(&arena);
        let span = Span(0..0);
        let int = t.named("i32", &[]);
        let r = Renderer::default();

        let grid = t.array(int, Seq::from_slice(&arena, &[3, 5]), &span).unwrap();
        assert_eq!(r.render(grid), "[[i32; 5]; 3]");

        let cube = t.array(int, Seq::from_slice(&arena, &[2, 3, 4]), &span).unwrap();
        assert_eq!(r.render(cube), "[[[i32; 4]; 3]; 2]");

        let unknown = t.array(int, Seq::nil(&arena), &span).unwrap();
        assert_eq!(r.render(unknown), "[i32]");
    }

    #[test]
    fn test_render_functions() {
        let arena = Bump::new();
        let t = TypeArena::new(&arena);
        let span = Span(0..0);
        let int = t.named("i32", &[]);
        let r = Renderer::default();

        let sig = Seq::from_slice(&arena, &[int, int]);
        assert_eq!(r.render(t.fun(sig, &span).unwrap()), "dyn Fn(i32) -> i32");
        assert_eq!(r.render(t.pfun(sig, &span).unwrap()), "fn(i32) -> i32");
        assert_eq!(r.render(t.ptr(t.fun(sig, &span).unwrap())), "*mut dyn Fn(i32) -> i32");

        let niladic = Seq::from_slice(&arena, &[t.unit()]);
        assert_eq!(r.render(t.pfun(niladic, &span).unwrap()), "fn()");
    }

    #[test]
    fn test_render_qualifiers() {
        let arena = Bump::new();
        let t = TypeArena::new(&arena);
        let span = Span(0..0);
        let byte = t.named("u8", &[]);
        let ty = t.cnst(t.vltl(byte, &span).unwrap(), &span).unwrap();

        assert_eq!(Renderer::default().render(ty), "Const<Volatile<u8>>");
        assert_eq!(
            Renderer::default().with_qualifier_path("beautiful").render(ty),
            "beautiful::Const<beautiful::Volatile<u8>>"
        );
    }

    #[test]
    fn test_render_alias_lifetime() {
        let arena = Bump::new();
        let t = TypeArena::new(&arena);
        let target = t.reference(t.named("u8", &[]));
        let alias = t.alias("Pair", &[t.named("u16", &[])], target);

        assert_eq!(Renderer::default().render(alias), "Pair<'_, u16>");
        assert_eq!(Renderer::default().with_lifetime("a").render(alias), "Pair<'a, u16>");
        assert_eq!(
            Renderer::default().render(t.alias("Id", &[], t.named("u64", &[]))),
            "Id"
        );
    }

    #[test]
    fn test_render_named_with_args() {
        let arena = Bump::new();
        let t = TypeArena::new(&arena);
        let ty = t.named("HashMap", &[t.named("String", &[]), t.ptr(t.named("u8", &[]))]);
        assert_eq!(Renderer::default().render(ty), "HashMap<String, *mut u8>");
    }
}
