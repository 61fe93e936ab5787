//! Standard dialect configuration
//!
//! The concrete conversion rules and operator signature tables for a
//! generic SQL dialect, built as plain data for the squill type engine.
//! Nothing here is logic: a dialect with different promotion rules swaps
//! in a different table and the engine behaves accordingly.
//!
//! Candidate order inside each operator table is resolution order; see
//! `squill_types::OperatorRegistry` for the scan rules before reordering
//! anything.

use squill_ast::{BinaryOperator, UnaryOperator};
use squill_types::{
    BinarySignature, ConversionRule, ConversionTable, Dialect, OperatorRegistry, TypeDescriptor,
    TypeKind, TypeMatcher, UnarySignature,
};

/// The standard dialect: numeric promotion Integer → Real, absorbing
/// `NULL`, length-insensitive `Char` coercion, and cast-only string and
/// numeric narrowing conversions.
pub fn standard() -> Dialect {
    Dialect::new(conversions(), operators())
}

fn conversions() -> ConversionTable {
    use TypeMatcher::{Any, Exactly, Kind};

    ConversionTable::new(vec![
        // Automatic coercions
        ConversionRule::implicit(
            Exactly(TypeDescriptor::Integer),
            Exactly(TypeDescriptor::Real),
        ),
        ConversionRule::implicit(Kind(TypeKind::Null), Any),
        // A Char value fits any Char slot regardless of declared length
        ConversionRule::implicit(Kind(TypeKind::Char), Kind(TypeKind::Char)),
        // Cast-only conversions
        ConversionRule::explicit(Kind(TypeKind::Char), Exactly(TypeDescriptor::DateTime)),
        ConversionRule::explicit(Kind(TypeKind::Char), Exactly(TypeDescriptor::Integer)),
        ConversionRule::explicit(Kind(TypeKind::Char), Exactly(TypeDescriptor::Real)),
        ConversionRule::explicit(Exactly(TypeDescriptor::Real), Exactly(TypeDescriptor::Integer)),
        ConversionRule::explicit(Exactly(TypeDescriptor::Integer), Kind(TypeKind::Char)),
        ConversionRule::explicit(Exactly(TypeDescriptor::Real), Kind(TypeKind::Char)),
        ConversionRule::explicit(Exactly(TypeDescriptor::DateTime), Kind(TypeKind::Char)),
        ConversionRule::explicit(Exactly(TypeDescriptor::Boolean), Kind(TypeKind::Char)),
        ConversionRule::explicit(
            Exactly(TypeDescriptor::Integer),
            Exactly(TypeDescriptor::Boolean),
        ),
    ])
}

fn operators() -> OperatorRegistry {
    let mut registry = OperatorRegistry::new();

    let int = TypeDescriptor::Integer;
    let real = TypeDescriptor::Real;
    let boolean = TypeDescriptor::Boolean;
    let char_any = TypeDescriptor::char_any();
    let datetime = TypeDescriptor::DateTime;

    // Arithmetic: the exact Integer signature comes first so that
    // Integer op Integer is not silently widened to Real.
    for op in [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
    ] {
        registry.register_binary(
            op,
            BinarySignature::new(int.clone(), int.clone(), int.clone()),
        );
        registry.register_binary(
            op,
            BinarySignature::new(real.clone(), real.clone(), real.clone()),
        );
    }
    registry.register_binary(
        BinaryOperator::Modulo,
        BinarySignature::new(int.clone(), int.clone(), int.clone()),
    );

    registry.register_binary(
        BinaryOperator::Concatenate,
        BinarySignature::new(char_any.clone(), char_any.clone(), char_any.clone()),
    );

    for op in [
        BinaryOperator::Equal,
        BinaryOperator::NotEqual,
        BinaryOperator::Less,
        BinaryOperator::LessOrEqual,
        BinaryOperator::Greater,
        BinaryOperator::GreaterOrEqual,
    ] {
        for ty in [&int, &real, &char_any, &datetime, &boolean] {
            registry.register_binary(
                op,
                BinarySignature::new(ty.clone(), ty.clone(), boolean.clone()),
            );
        }
    }

    for op in [BinaryOperator::And, BinaryOperator::Or] {
        registry.register_binary(
            op,
            BinarySignature::new(boolean.clone(), boolean.clone(), boolean.clone()),
        );
    }

    for ty in [&int, &real, &char_any] {
        registry.register_binary(
            BinaryOperator::In,
            BinarySignature::new(
                ty.clone(),
                TypeDescriptor::array(ty.clone()),
                boolean.clone(),
            ),
        );
    }
    registry.register_binary(
        BinaryOperator::Like,
        BinarySignature::new(char_any.clone(), char_any.clone(), boolean.clone()),
    );

    registry.register_unary(
        UnaryOperator::Not,
        UnarySignature::new(boolean.clone(), boolean),
    );
    for op in [UnaryOperator::Plus, UnaryOperator::Minus] {
        registry.register_unary(op, UnarySignature::new(int.clone(), int.clone()));
        registry.register_unary(op, UnarySignature::new(real.clone(), real.clone()));
    }

    registry
}
