use bunner_dispatch_rs::pattern::{PatternError, Segment, compile};
use bunner_dispatch_rs::{ParamType, TypeName};

fn scalar(type_name: TypeName) -> ParamType {
    ParamType::Scalar(type_name)
}

fn array(type_name: TypeName) -> ParamType {
    ParamType::Array(type_name)
}

fn expect_pattern_error(path: &str, expected: &[ParamType]) -> PatternError {
    compile(path, expected).expect_err("pattern should be rejected")
}

#[test]
fn compiles_typed_segments_in_order() {
    let pattern = compile(
        "/add/{Integer}/{Integer}",
        &[scalar(TypeName::Integer), scalar(TypeName::Integer)],
    )
    .expect("pattern should compile");
    assert_eq!(
        pattern.segments(),
        &[
            Segment::Literal("add".to_string()),
            Segment::Typed(TypeName::Integer),
            Segment::Typed(TypeName::Integer),
        ]
    );
    assert_eq!(pattern.raw_path(), "/add/{Integer}/{Integer}");
}

#[test]
fn compile_is_idempotent() {
    for (path, expected) in [
        ("/Users/{Integer id}", vec![scalar(TypeName::Integer)]),
        ("/files/{String...} rest", vec![array(TypeName::String)]),
        ("", vec![]),
        ("/a//b/", vec![]),
    ] {
        let first = compile(path, &expected).expect("first compile");
        let second = compile(path, &expected).expect("second compile");
        assert_eq!(first, second, "{path:?}");
    }
}

#[test]
fn labels_never_affect_segments() {
    let labelled = compile("/u/{Long user}", &[scalar(TypeName::Long)]).unwrap();
    let trailing = compile("/u/{Long} user", &[scalar(TypeName::Long)]).unwrap();
    let bare = compile("/u/{Long}", &[scalar(TypeName::Long)]).unwrap();
    assert_eq!(labelled.segments(), bare.segments());
    assert_eq!(trailing.segments(), bare.segments());
    assert_eq!(labelled.labels(), &[Some("user".to_string())]);
    assert_eq!(bare.labels(), &[None]);
}

#[test]
fn array_must_be_last() {
    match expect_pattern_error("/a/{Integer...}/b", &[array(TypeName::Integer)]) {
        PatternError::ArrayNotLast { segment, index, .. } => {
            assert_eq!(segment, "{Integer...}");
            assert_eq!(index, 1);
        }
        other => panic!("expected ArrayNotLast, got {other:?}"),
    }
}

#[test]
fn array_before_another_placeholder_is_rejected() {
    let err = expect_pattern_error(
        "/{String...}/{Integer}",
        &[array(TypeName::String), scalar(TypeName::Integer)],
    );
    assert!(matches!(err, PatternError::ArrayNotLast { index: 0, .. }));
    assert!(err.to_string().contains("array must be last"));
}

#[test]
fn unknown_type_is_rejected() {
    match expect_pattern_error("/x/{Object}", &[]) {
        PatternError::UnknownParameterType { type_name, segment } => {
            assert_eq!(type_name, "Object");
            assert_eq!(segment, "{Object}");
        }
        other => panic!("expected UnknownParameterType, got {other:?}"),
    }
}

#[test]
fn unknown_array_type_is_rejected() {
    let err = expect_pattern_error("/x/{Thing... items}", &[]);
    assert!(matches!(err, PatternError::UnknownParameterType { .. }));
}

#[test]
fn signature_count_must_match() {
    match expect_pattern_error("/add/{Integer}", &[scalar(TypeName::Integer), scalar(TypeName::Integer)]) {
        PatternError::ParameterMismatch { expected, found, .. } => {
            assert_eq!(expected.len(), 2);
            assert_eq!(found, vec![scalar(TypeName::Integer)]);
        }
        other => panic!("expected ParameterMismatch, got {other:?}"),
    }
}

#[test]
fn signature_order_must_match() {
    let err = expect_pattern_error(
        "/p/{Integer}/{String}",
        &[scalar(TypeName::String), scalar(TypeName::Integer)],
    );
    assert!(matches!(err, PatternError::ParameterMismatch { .. }));
}

#[test]
fn array_parameter_is_distinct_from_scalar() {
    let err = expect_pattern_error("/p/{Integer...}", &[scalar(TypeName::Integer)]);
    assert!(matches!(err, PatternError::ParameterMismatch { .. }));
}

#[test]
fn near_dynamic_segments_are_lowercased_literals() {
    let pattern = compile("/{Integer/Items", &[]).expect("literal pattern should compile");
    assert_eq!(pattern.raw_path(), "/{integer/items");
    assert!(pattern.segments().iter().all(|s| s.literal().is_some()));
}

#[test]
fn root_variants_compile_identically() {
    let slash = compile("/", &[]).unwrap();
    let empty = compile("", &[]).unwrap();
    assert_eq!(slash, empty);
    assert_eq!(slash.segments(), &[Segment::Root]);
    assert_eq!(slash.to_string(), "/");
}

#[test]
fn rust_type_aliases_resolve() {
    let pattern = compile("/v/{i64}/{bool}", &[scalar(TypeName::Long), scalar(TypeName::Boolean)])
        .expect("aliases should resolve");
    assert_eq!(
        pattern.parameter_types(),
        &[scalar(TypeName::Long), scalar(TypeName::Boolean)]
    );
}
