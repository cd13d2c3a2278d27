//! Expanding shorthand into Rust source.

use alloc::{format, string::String, vec::Vec};
use core::fmt::{self, Write};

use bumpalo::Bump;

use crate::error::DeclError;
#[cfg(test)]
use crate::error::Span;
use crate::expr::TypeExpr;
use crate::parser::{Decl, parse_file, parse_type};
use crate::render::Renderer;

/// Visibility given to generated aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Pub,
    Crate,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Pub => f.write_str("pub "),
            Visibility::Crate => f.write_str("pub(crate) "),
            Visibility::Private => Ok(()),
        }
    }
}

/// Options for [`expand`] and [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    /// Path of the crate providing `Const` and `Volatile`.
    pub crate_path: String,

    /// Lifetime given to references in generated aliases, without the quote.
    pub lifetime: String,

    pub visibility: Visibility,

    /// Deepest type nesting accepted before giving up.
    pub max_depth: usize,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            crate_path: "beautiful".into(),
            lifetime: "a".into(),
            visibility: Visibility::Pub,
            max_depth: 64,
        }
    }
}

impl GenOptions {
    fn lifetime(&self) -> &str {
        self.lifetime.trim_start_matches('\'')
    }
}

/// Expand a single type expression.
///
/// Qualifier wrappers are spelled with their full path and reference
/// lifetimes are elided, so the result can be pasted anywhere.
///
/// ```
/// use beautiful_decl::{GenOptions, expand};
///
/// let out = expand("pfun<ptr<u8>, usize, ()>", &GenOptions::default()).unwrap();
/// assert_eq!(out, "fn(*mut u8, usize)");
/// ```
pub fn expand(source: &str, options: &GenOptions) -> Result<String, DeclError> {
    let arena = Bump::new();
    let ty = parse_type(&arena, source, options.max_depth)?;
    let renderer = Renderer::default().with_qualifier_path(options.crate_path.as_str());
    Ok(renderer.render(ty))
}

/// Validate a declaration file without generating anything. Returns the
/// number of declarations.
pub fn check(source: &str, options: &GenOptions) -> Result<usize, DeclError> {
    let arena = Bump::new();
    let decls = parse_file(&arena, source, options.max_depth)?;
    tracing::debug!(count = decls.len(), "declarations are valid");
    Ok(decls.len())
}

/// Generate a Rust module with one type alias per declaration.
///
/// `Const` and `Volatile` are imported once, unless a declaration has the
/// same name as one of them; then every use is spelled with the crate path.
pub fn generate(source: &str, options: &GenOptions) -> Result<String, DeclError> {
    let arena = Bump::new();
    let decls = parse_file(&arena, source, options.max_depth)?;

    let mut out = String::from("// @generated by beautiful. Do not edit.\n");

    let imports = qualifier_imports(decls);
    let qualified = imports
        .iter()
        .any(|wrapper| decls.iter().any(|d| d.name == *wrapper));
    if qualified {
        tracing::debug!("a declaration shadows a qualifier; spelling qualifiers in full");
    }

    match imports.as_slice() {
        _ if qualified => {}
        [] => {}
        [one] => {
            let _ = writeln!(out, "\nuse {}::{};", options.crate_path, one);
        }
        many => {
            let _ = writeln!(out, "\nuse {}::{{{}}};", options.crate_path, many.join(", "));
        }
    }
    if !decls.is_empty() {
        out.push('\n');
    }

    for decl in decls {
        tracing::debug!(name = decl.name, "generating alias");
        write_alias(&mut out, decl, options, qualified);
    }
    Ok(out)
}

fn qualifier_imports(decls: &[Decl<'_>]) -> Vec<&'static str> {
    let uses = |pred: fn(&TypeExpr<'_>) -> bool| decls.iter().any(|d| d.ty.any(pred));

    let mut imports = Vec::new();
    if uses(|ty| matches!(ty, TypeExpr::Const(_))) {
        imports.push("Const");
    }
    if uses(|ty| matches!(ty, TypeExpr::Volatile(_))) {
        imports.push("Volatile");
    }
    imports
}

fn write_alias(out: &mut String, decl: &Decl<'_>, options: &GenOptions, qualified: bool) {
    let borrows = decl.ty.borrows();

    let mut params: Vec<String> = Vec::with_capacity(decl.generics.len() + 1);
    if borrows {
        params.push(format!("'{}", options.lifetime()));
    }
    params.extend(decl.generics.iter().map(|g| String::from(*g)));

    let mut renderer = Renderer::default();
    if borrows {
        renderer = renderer.with_lifetime(options.lifetime());
    }
    if qualified {
        renderer = renderer.with_qualifier_path(options.crate_path.as_str());
    }

    let _ = write!(out, "{}type {}", options.visibility, decl.name);
    if !params.is_empty() {
        let _ = write!(out, "<{}>", params.join(", "));
    }
    out.push_str(" = ");
    renderer.write(decl.ty, out);
    out.push_str(";\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expand_qualifies_wrappers() {
        let options = GenOptions::default();
        assert_eq!(
            expand("cnst<vltl<u32>>", &options).unwrap(),
            "beautiful::Const<beautiful::Volatile<u32>>"
        );
        assert_eq!(expand("  ref<cnst<u8>>\n", &options).unwrap(), "&beautiful::Const<u8>");
    }

    #[test]
    fn test_expand_custom_crate_path() {
        let options = GenOptions {
            crate_path: "crate::hw".into(),
            ..GenOptions::default()
        };
        assert_eq!(expand("vltl<u16>", &options).unwrap(), "crate::hw::Volatile<u16>");
    }

    #[test]
    fn test_generate_module() {
        crate::test_utils::init_test_logging();

        let source = indoc! {"
            // Callbacks take their arguments first.
            type Handler = pfun<i32, i32>;
            type Grid<T> = array<T, 3, 5>;
            type Lookup<K, V> = pfun<ref<K>, Option<ref<V>>>;
            type Register = ptr<vltl<u32>>;
        "};

        let out = generate(source, &GenOptions::default()).unwrap();
        expect![[r#"
            // @generated by beautiful. Do not edit.

            use beautiful::Volatile;

            pub type Handler = fn(i32) -> i32;
            pub type Grid<T> = [[T; 5]; 3];
            pub type Lookup<'a, K, V> = fn(&'a K) -> Option<&'a V>;
            pub type Register = *mut Volatile<u32>;
        "#]]
        .assert_eq(&out);
    }

    #[test]
    fn test_generate_visibility_and_lifetime() {
        let options = GenOptions {
            visibility: Visibility::Crate,
            lifetime: "'src".into(),
            ..GenOptions::default()
        };
        let out = generate("type Name = ref<str>;", &options).unwrap();
        assert_eq!(
            out,
            "// @generated by beautiful. Do not edit.\n\npub(crate) type Name<'src> = &'src str;\n"
        );

        let private = GenOptions {
            visibility: Visibility::Private,
            ..GenOptions::default()
        };
        let out = generate("type Id = cnst<u64>;", &private).unwrap();
        assert!(out.ends_with("\ntype Id = Const<u64>;\n"));
    }

    #[test]
    fn test_generate_propagates_lifetime_through_aliases() {
        let source = indoc! {"
            type A = ref<u8>;
            type B = ptr<A>;
            type Pair<T> = pfun<ref<T>, ()>;
            type Both = array<Pair<B>, 2>;
        "};

        let out = generate(source, &GenOptions::default()).unwrap();
        expect![[r#"
            // @generated by beautiful. Do not edit.

            pub type A<'a> = &'a u8;
            pub type B<'a> = *mut A<'a>;
            pub type Pair<'a, T> = fn(&'a T);
            pub type Both<'a> = [Pair<'a, B<'a>>; 2];
        "#]]
        .assert_eq(&out);
    }

    #[test]
    fn test_generate_rejects_wrapping_unsized_alias() {
        let err = generate("type S = array<u8>;\ntype C = cnst<S>;", &GenOptions::default());
        assert!(matches!(err, Err(DeclError::Unsized { .. })));

        let err = generate("type F = fun<u8, ()>;\ntype G = array<F, 2>;", &GenOptions::default());
        assert!(matches!(err, Err(DeclError::Unsized { .. })));
    }

    #[test]
    fn test_generate_qualifies_shadowed_wrappers() {
        let out = generate("type Const = cnst<u8>;\ntype V = vltl<u8>;", &GenOptions::default()).unwrap();
        assert_eq!(
            out,
            indoc! {"
                // @generated by beautiful. Do not edit.

                pub type Const = beautiful::Const<u8>;
                pub type V = beautiful::Volatile<u8>;
            "}
        );
    }

    #[test]
    fn test_expand_error_span_counts_leading_whitespace() {
        let err = expand("  fun<>", &GenOptions::default()).unwrap_err();
        assert_eq!(err, DeclError::EmptySequence { span: Span(2..7) });
    }

    #[test]
    fn test_generate_empty_file() {
        assert_eq!(
            generate("// nothing yet\n", &GenOptions::default()).unwrap(),
            "// @generated by beautiful. Do not edit.\n"
        );
    }

    #[test]
    fn test_check_counts_declarations() {
        let options = GenOptions::default();
        assert_eq!(check("type A = u8; type B = ptr<A>;", &options).unwrap(), 2);
        assert!(matches!(
            check("type A = fun<>;", &options),
            Err(DeclError::EmptySequence { .. })
        ));
    }
}
