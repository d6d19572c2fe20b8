use super::*;

#[test]
fn cv_keywords() {
    assert_eq!(Cv::empty().keyword(), "");
    assert_eq!(Cv::CONST.keyword(), "const");
    assert_eq!(Cv::VOLATILE.keyword(), "volatile");
    assert_eq!(Cv::CONST_VOLATILE.keyword(), "const volatile");
}

#[test]
fn cv_union_is_order_independent() {
    assert_eq!(Cv::VOLATILE | Cv::CONST, Cv::CONST | Cv::VOLATILE);
    assert_eq!((Cv::VOLATILE | Cv::CONST).to_string(), "const volatile");
}

#[test]
fn cv_union_is_idempotent() {
    assert_eq!(Cv::CONST | Cv::CONST, Cv::CONST);
}

#[test]
fn cv_default_is_empty() {
    assert!(Cv::default().is_empty());
}

#[test]
fn ref_qualifier_tokens() {
    assert_eq!(RefQualifier::None.token(), "");
    assert_eq!(RefQualifier::LValue.to_string(), "&");
    assert_eq!(RefQualifier::RValue.to_string(), "&&");
    assert!(!RefQualifier::None.is_some());
    assert!(RefQualifier::RValue.is_some());
}
