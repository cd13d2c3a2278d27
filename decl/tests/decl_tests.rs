use beautiful_decl::{Builder, DeclError, GenOptions, check, expand, generate};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn expand_default(source: &str) -> String {
    expand(source, &GenOptions::default())
        .unwrap_or_else(|err| panic!("failed to expand {source:?}: {err}"))
}

#[test]
fn test_every_builder() {
    let cases = [
        ("ptr<i32>", "*mut i32"),
        ("ref<i32>", "&i32"),
        ("cnst<i32>", "beautiful::Const<i32>"),
        ("vltl<i32>", "beautiful::Volatile<i32>"),
        ("array<i32, 5>", "[i32; 5]"),
        ("array<i32>", "[i32]"),
        ("lfun<i32, u8, u16>", "dyn Fn(u8, u16) -> i32"),
        ("fun<u8, u16, i32>", "dyn Fn(u8, u16) -> i32"),
        ("plfun<i32, u8, u16>", "fn(u8, u16) -> i32"),
        ("pfun<u8, u16, i32>", "fn(u8, u16) -> i32"),
    ];
    for (source, expected) in cases {
        assert_eq!(expand_default(source), expected, "expanding {source}");
    }
}

#[test]
fn test_natural_and_direct_order_agree() {
    assert_eq!(
        expand_default("pfun<ref<str>, Vec<u8>, usize>"),
        expand_default("plfun<usize, ref<str>, Vec<u8>>")
    );
    assert_eq!(expand_default("fun<()>"), expand_default("lfun<()>"));
    assert_eq!(expand_default("fun<()>"), "dyn Fn()");
}

#[test]
fn test_nested_composition() {
    assert_eq!(
        expand_default("ptr<fun<ptr<u8>, usize, ()>>"),
        "*mut dyn Fn(*mut u8, usize)"
    );
    assert_eq!(
        expand_default("array<pfun<f64, f64>, 4>"),
        "[fn(f64) -> f64; 4]"
    );
    assert_eq!(
        expand_default("pfun<pfun<i32, i32>, array<i32, 5>, ()>"),
        "fn(fn(i32) -> i32, [i32; 5])"
    );
    assert_eq!(
        expand_default("cnst<cnst<u8>>"),
        "beautiful::Const<beautiful::Const<u8>>"
    );
}

#[test]
fn test_array_shapes() {
    assert_eq!(expand_default("array<u8, 0>"), "[u8; 0]");
    assert_eq!(expand_default("array<u8, 2, 3, 4>"), "[[[u8; 4]; 3]; 2]");
    assert_eq!(expand_default("array<array<u8, 4>, 2>"), "[[u8; 4]; 2]");
}

#[test]
fn test_rejected_expressions() {
    let options = GenOptions::default();
    let err = |source: &str| expand(source, &options).unwrap_err();

    assert!(matches!(err("fun<>"), DeclError::EmptySequence { .. }));
    assert!(matches!(err("pfun<>"), DeclError::EmptySequence { .. }));
    assert!(matches!(err("plfun<>"), DeclError::Arity { found: 0, .. }));
    assert!(matches!(err("ref<>"), DeclError::Arity { builder: Builder::Ref, found: 0, .. }));
    assert!(matches!(err("array<array<u8>, 3>"), DeclError::Unsized { .. }));
    assert!(matches!(err("cnst<fun<u8>>"), DeclError::Unsized { builder: Builder::Cnst, .. }));
    assert!(matches!(err("pfun<str, u8>"), DeclError::Unsized { .. }));
    assert!(matches!(err("ptr<u8"), DeclError::Syntax { .. }));
}

#[test]
fn test_error_messages() {
    let options = GenOptions::default();
    assert_eq!(
        expand("ptr<u8, u16>", &options).unwrap_err().to_string(),
        "`ptr` takes exactly 1 type argument(s), found 2"
    );
    assert_eq!(
        expand("array<u8, u16>", &options).unwrap_err().to_string(),
        "expected an array dimension, found a type"
    );
}

#[test]
fn test_deep_nesting_is_rejected() {
    let mut source = String::new();
    for _ in 0..80 {
        source.push_str("ptr<");
    }
    source.push_str("u8");
    for _ in 0..80 {
        source.push('>');
    }

    let err = expand(&source, &GenOptions::default()).unwrap_err();
    assert!(matches!(err, DeclError::TooDeep { max: 64, .. }));

    let relaxed = GenOptions {
        max_depth: 128,
        ..GenOptions::default()
    };
    assert!(expand(&source, &relaxed).unwrap().starts_with("*mut *mut"));
}

#[test]
fn test_generate_register_block() {
    let source = indoc! {"
        type Status = cnst<vltl<u32>>;
        type Control = vltl<u32>;
        type Callback<T> = pfun<ref<T>, ()>;
    "};

    let out = generate(source, &GenOptions::default()).unwrap();
    assert_eq!(
        out,
        indoc! {"
            // @generated by beautiful. Do not edit.

            use beautiful::{Const, Volatile};

            pub type Status = Const<Volatile<u32>>;
            pub type Control = Volatile<u32>;
            pub type Callback<'a, T> = fn(&'a T);
        "}
    );
    assert_eq!(check(source, &GenOptions::default()).unwrap(), 3);
}

#[test]
fn test_duplicate_declaration_points_at_both() {
    let source = "type A = u8;\ntype B = u8;\ntype A = u16;\n";
    match check(source, &GenOptions::default()).unwrap_err() {
        DeclError::Duplicate { name, span, first } => {
            assert_eq!(name, "A");
            assert_eq!(&source[first.0], "type A = u8;");
            assert_eq!(&source[span.0], "type A = u16;");
        }
        other => panic!("expected a duplicate error, got {other:?}"),
    }
}

#[test]
fn test_declarations_build_on_earlier_ones() {
    let source = indoc! {"
        type Name = ref<str>;
        type Names = ptr<cnst<Name>>;
        type Bytes = array<u8>;
    "};
    let out = generate(source, &GenOptions::default()).unwrap();
    assert!(out.contains("pub type Names<'a> = *mut Const<Name<'a>>;\n"), "{out}");

    let err = generate("type Bytes = array<u8>;\ntype Fixed = vltl<Bytes>;", &GenOptions::default())
        .unwrap_err();
    assert!(matches!(err, DeclError::Unsized { builder: Builder::Vltl, .. }), "{err:?}");
    assert_eq!(err.span().start(), 37);
}
