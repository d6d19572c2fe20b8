use super::*;

#[test]
fn keywords_round_trip_through_lookup() {
    for f in Fundamental::ALL {
        assert_eq!(Fundamental::from_keyword(f.keyword()), Some(f));
    }
}

#[test]
fn keywords_are_distinct() {
    let mut seen: Vec<&str> = Fundamental::ALL.iter().map(|f| f.keyword()).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), Fundamental::ALL.len());
}

#[test]
fn multi_word_spellings() {
    assert_eq!(Fundamental::LongDouble.to_string(), "long double");
    assert_eq!(Fundamental::UnsignedLongLong.to_string(), "unsigned long long int");
    assert_eq!(Fundamental::NullPtr.to_string(), "nullptr_t");
}

#[test]
fn integer_spellings_keep_the_int_suffix() {
    let spellings: Vec<&str> = [
        Fundamental::Short,
        Fundamental::Long,
        Fundamental::LongLong,
        Fundamental::UnsignedShort,
        Fundamental::UnsignedLong,
        Fundamental::UnsignedLongLong,
    ]
    .iter()
    .map(|f| f.keyword())
    .collect();
    assert_eq!(
        spellings,
        [
            "short int",
            "long int",
            "long long int",
            "unsigned short int",
            "unsigned long int",
            "unsigned long long int",
        ]
    );
    assert_eq!(Fundamental::from_keyword("long long int"), Some(Fundamental::LongLong));
}

#[test]
fn unknown_spellings_are_rejected() {
    assert_eq!(Fundamental::from_keyword("long"), None);
    assert_eq!(Fundamental::from_keyword("unsigned short"), None);
    assert_eq!(Fundamental::from_keyword("Int"), None);
    assert_eq!(Fundamental::from_keyword(""), None);
}

#[test]
fn struct_and_class_share_a_keyword() {
    assert_eq!(UserDefinedKind::Class.keyword(), "class");
    assert_eq!(UserDefinedKind::Struct.keyword(), "class");
    assert_eq!(UserDefinedKind::Union.to_string(), "union");
    assert_eq!(UserDefinedKind::Enum.to_string(), "enum");
}
