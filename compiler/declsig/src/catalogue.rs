//! Built-in type shapes shown by the driver.

use declsig_ir::{
    Cv, DescriptorError, Fundamental, FunctionType, RefQualifier, TypeDescriptor, UserDefinedKind,
};

fn int() -> TypeDescriptor {
    TypeDescriptor::fundamental(Fundamental::Int)
}

fn void() -> TypeDescriptor {
    TypeDescriptor::fundamental(Fundamental::Void)
}

fn class() -> TypeDescriptor {
    TypeDescriptor::user_defined(UserDefinedKind::Class)
}

/// One descriptor per interesting declarator shape, in display order.
pub fn shapes() -> Result<Vec<TypeDescriptor>, DescriptorError> {
    let char_ptr = TypeDescriptor::pointer(TypeDescriptor::fundamental(Fundamental::Char));
    let string = TypeDescriptor::template_named(
        "std::basic_string",
        vec![TypeDescriptor::fundamental(Fundamental::Char)],
    );
    let map = TypeDescriptor::template_named("std::map", vec![string, int()]);

    Ok(vec![
        int(),
        TypeDescriptor::fundamental(Fundamental::LongDouble),
        TypeDescriptor::qualified(
            TypeDescriptor::qualified(int(), Cv::VOLATILE)?,
            Cv::CONST,
        )?,
        TypeDescriptor::pointer(TypeDescriptor::qualified(int(), Cv::CONST)?),
        TypeDescriptor::qualified(TypeDescriptor::pointer(int()), Cv::CONST)?,
        TypeDescriptor::lvalue_ref(int())?,
        TypeDescriptor::rvalue_ref(char_ptr.clone())?,
        TypeDescriptor::array(TypeDescriptor::unbounded_array(int()), 4),
        TypeDescriptor::pointer(TypeDescriptor::array(int(), 8)),
        TypeDescriptor::function(FunctionType::new(int(), vec![int()])),
        TypeDescriptor::function(FunctionType::new(TypeDescriptor::pointer(int()), vec![int()])),
        TypeDescriptor::function(FunctionType::new(int(), vec![]).with_variadic(true)),
        TypeDescriptor::function(FunctionType::new(int(), vec![char_ptr]).with_variadic(true)),
        TypeDescriptor::function_pointer(FunctionType::new(int(), vec![int()])),
        TypeDescriptor::qualified(
            TypeDescriptor::function_pointer(FunctionType::new(int(), vec![int()])),
            Cv::CONST_VOLATILE,
        )?,
        TypeDescriptor::function_lvalue_ref(FunctionType::new(void(), vec![])),
        TypeDescriptor::function_rvalue_ref(FunctionType::new(void(), vec![])),
        TypeDescriptor::member_function_pointer(
            class(),
            FunctionType::new(void(), vec![int()])
                .with_cv(Cv::CONST_VOLATILE)
                .with_ref_qualifier(RefQualifier::RValue),
            Cv::empty(),
        ),
        TypeDescriptor::member_function_pointer(
            class(),
            FunctionType::new(
                TypeDescriptor::lvalue_ref(TypeDescriptor::qualified(map, Cv::CONST_VOLATILE)?)?,
                vec![int()],
            )
            .with_variadic(true)
            .with_cv(Cv::CONST)
            .with_ref_qualifier(RefQualifier::RValue),
            Cv::CONST_VOLATILE,
        ),
        TypeDescriptor::member_data_pointer(class(), int()),
        TypeDescriptor::template(vec![TypeDescriptor::template(vec![int()])]),
        TypeDescriptor::user_defined(UserDefinedKind::Union),
        TypeDescriptor::user_defined(UserDefinedKind::Enum),
    ])
}
