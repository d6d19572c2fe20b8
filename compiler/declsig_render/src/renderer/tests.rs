#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use declsig_ir::{Fundamental, RefQualifier, UserDefinedKind};
use pretty_assertions::assert_eq;

use super::*;

fn int() -> TypeDescriptor {
    TypeDescriptor::fundamental(Fundamental::Int)
}

fn pointers(levels: usize) -> TypeDescriptor {
    let mut ty = int();
    for _ in 0..levels {
        ty = TypeDescriptor::pointer(ty);
    }
    ty
}

// -- Token helpers --

#[test]
fn cv_suffix_is_space_separated() {
    let mut buf = String::from("int*");
    push_cv(&mut buf, Cv::CONST_VOLATILE);
    assert_eq!(buf, "int* const volatile");

    let mut buf = String::from("int*");
    push_cv(&mut buf, Cv::empty());
    assert_eq!(buf, "int*");
}

#[test]
fn function_qualifier_suffix_order() {
    let mut buf = String::new();
    push_function_qualifiers(&mut buf, Cv::VOLATILE | Cv::CONST, RefQualifier::LValue);
    assert_eq!(buf, " const volatile &");

    let mut buf = String::new();
    push_function_qualifiers(&mut buf, Cv::empty(), RefQualifier::RValue);
    assert_eq!(buf, " &&");

    let mut buf = String::new();
    push_function_qualifiers(&mut buf, Cv::empty(), RefQualifier::None);
    assert_eq!(buf, "");
}

// -- Placement --

#[test]
fn east_placement_follows_the_name() {
    let renderer = SignatureRenderer::default();
    let ty = TypeDescriptor::pointer(TypeDescriptor::qualified(int(), Cv::CONST).unwrap());
    assert_eq!(renderer.render(&ty).unwrap(), "int const*");
}

#[test]
fn west_placement_precedes_the_name() {
    let renderer =
        SignatureRenderer::new(RenderConfig::with_qualifier_placement(QualifierPlacement::West));
    let ty = TypeDescriptor::pointer(TypeDescriptor::qualified(int(), Cv::CONST).unwrap());
    assert_eq!(renderer.render(&ty).unwrap(), "const int*");
}

#[test]
fn west_placement_leaves_pointer_qualifiers_alone() {
    let renderer =
        SignatureRenderer::new(RenderConfig::with_qualifier_placement(QualifierPlacement::West));
    let ty = TypeDescriptor::qualified(
        TypeDescriptor::pointer(TypeDescriptor::qualified(int(), Cv::VOLATILE).unwrap()),
        Cv::CONST,
    )
    .unwrap();
    assert_eq!(renderer.render(&ty).unwrap(), "volatile int* const");
}

// -- Depth budget --

#[test]
fn budget_counts_every_node() {
    let renderer = SignatureRenderer::new(RenderConfig::with_max_depth(8));
    assert_eq!(renderer.render(&pointers(7)).unwrap(), "int*******");
    assert_eq!(
        renderer.render(&pointers(8)),
        Err(RenderError::DepthExceeded { limit: 8 })
    );
}

#[test]
fn budget_covers_parameters_and_template_arguments() {
    let nested = TypeDescriptor::template(vec![TypeDescriptor::template(vec![int()])]);
    assert_eq!(nested.depth(), 3);
    assert!(SignatureRenderer::new(RenderConfig::with_max_depth(3))
        .render(&nested)
        .is_ok());
    assert!(SignatureRenderer::new(RenderConfig::with_max_depth(2))
        .render(&nested)
        .is_err());

    let f = TypeDescriptor::function(declsig_ir::FunctionType::new(
        TypeDescriptor::fundamental(Fundamental::Void),
        vec![pointers(3)],
    ));
    assert_eq!(f.depth(), 5);
    assert!(SignatureRenderer::new(RenderConfig::with_max_depth(5))
        .render(&f)
        .is_ok());
    assert!(SignatureRenderer::new(RenderConfig::with_max_depth(4))
        .render(&f)
        .is_err());
}

#[test]
fn budget_covers_member_function_class() {
    let class = TypeDescriptor::template(vec![TypeDescriptor::template(vec![int()])]);
    let mfp = TypeDescriptor::member_function_pointer(
        class,
        declsig_ir::FunctionType::new(int(), vec![]),
        Cv::empty(),
    );
    assert_eq!(mfp.depth(), 4);
    assert!(SignatureRenderer::new(RenderConfig::with_max_depth(4))
        .render(&mfp)
        .is_ok());
    assert!(SignatureRenderer::new(RenderConfig::with_max_depth(3))
        .render(&mfp)
        .is_err());
}

#[test]
fn budget_matches_depth_for_deep_member_data_pointer_class() {
    let mut class = int();
    for _ in 0..10 {
        class = TypeDescriptor::template(vec![class]);
    }
    let mdp = TypeDescriptor::member_data_pointer(class, int());
    assert_eq!(mdp.depth(), 2);
    assert_eq!(
        SignatureRenderer::new(RenderConfig::with_max_depth(2))
            .render(&mdp)
            .unwrap(),
        "int class::*"
    );
    assert_eq!(
        SignatureRenderer::new(RenderConfig::with_max_depth(1)).render(&mdp),
        Err(RenderError::DepthExceeded { limit: 1 })
    );
}

#[test]
fn budget_counts_function_under_generic_pointer() {
    let fp = TypeDescriptor::pointer(TypeDescriptor::function(declsig_ir::FunctionType::new(
        int(),
        vec![],
    )));
    assert_eq!(fp.depth(), 3);
    assert!(SignatureRenderer::new(RenderConfig::with_max_depth(3))
        .render(&fp)
        .is_ok());
    assert!(SignatureRenderer::new(RenderConfig::with_max_depth(2))
        .render(&fp)
        .is_err());
}

#[test]
fn unlimited_config_renders_deep_chains() {
    let renderer = SignatureRenderer::new(RenderConfig::unlimited());
    let text = renderer.render(&pointers(5_000)).unwrap();
    assert_eq!(text.len(), "int".len() + 5_000);
    assert!(text.ends_with("***"));
}

// -- Output sink --

#[test]
fn render_into_appends() {
    let renderer = SignatureRenderer::default();
    let mut buf = String::from("x: ");
    renderer
        .render_into(&TypeDescriptor::user_defined(UserDefinedKind::Union), &mut buf)
        .unwrap();
    assert_eq!(buf, "x: union");
}

#[test]
fn render_into_leaves_buffer_on_error() {
    let renderer = SignatureRenderer::new(RenderConfig::with_max_depth(2));
    let mut buf = String::from("keep");
    assert!(renderer.render_into(&pointers(4), &mut buf).is_err());
    assert_eq!(buf, "keep");
}

#[test]
fn render_many_preserves_order() {
    let renderer = SignatureRenderer::new(RenderConfig::with_max_depth(3));
    let tys = vec![int(), pointers(1), pointers(5), pointers(2)];
    assert_eq!(
        renderer.render_many(&tys),
        vec![
            Ok("int".to_string()),
            Ok("int*".to_string()),
            Err(RenderError::DepthExceeded { limit: 3 }),
            Ok("int**".to_string()),
        ]
    );
}

#[test]
fn renderer_exposes_config() {
    let config = RenderConfig::with_max_depth(16);
    assert_eq!(SignatureRenderer::new(config).config(), &config);
}
