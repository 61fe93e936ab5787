//! End-to-end expression typing over hand-built resolved trees,
//! using the standard dialect.

use pretty_assertions::assert_eq;

use squill_ast::{BinaryOperator, DataTypeNode, DeclNode, ExprId, ExprKind, SyntaxTree, UnaryOperator};
use squill_dialect::standard;
use squill_types::{AstProjection, TypeComputer, TypeDescriptor, TypeError};

fn num(tree: &mut SyntaxTree, lexeme: &str) -> ExprId {
    tree.add_expr(ExprKind::NumberLiteral {
        lexeme: lexeme.to_string(),
    })
}

fn string(tree: &mut SyntaxTree, value: &str) -> ExprId {
    tree.add_expr(ExprKind::StringLiteral {
        value: value.to_string(),
    })
}

#[test]
fn literals_type_directly() {
    let mut tree = SyntaxTree::new();
    let int = num(&mut tree, "42");
    let real = num(&mut tree, "3.14");
    let canceled = num(&mut tree, "1.50e2");
    let null = tree.add_expr(ExprKind::NullLiteral);
    let hex = tree.add_expr(ExprKind::HexStringLiteral {
        lexeme: "x'1A'".into(),
    });
    let text = string(&mut tree, "hello");
    let ident = tree.add_expr(ExprKind::IdentifierString {
        value: "hello".into(),
    });
    let boolean = tree.add_expr(ExprKind::BooleanLiteral { value: true });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);

    assert_eq!(
        computer.type_of_expr(&tree, int).unwrap(),
        Some(TypeDescriptor::Integer)
    );
    assert_eq!(
        computer.type_of_expr(&tree, real).unwrap(),
        Some(TypeDescriptor::Real)
    );
    assert_eq!(
        computer.type_of_expr(&tree, canceled).unwrap(),
        Some(TypeDescriptor::Integer)
    );
    assert_eq!(
        computer.type_of_expr(&tree, null).unwrap(),
        Some(TypeDescriptor::Null)
    );
    assert_eq!(
        computer.type_of_expr(&tree, hex).unwrap(),
        Some(TypeDescriptor::Integer)
    );
    assert_eq!(
        computer.type_of_expr(&tree, text).unwrap(),
        Some(TypeDescriptor::char_any())
    );
    assert_eq!(
        computer.type_of_expr(&tree, ident).unwrap(),
        Some(TypeDescriptor::char_any())
    );
    assert_eq!(
        computer.type_of_expr(&tree, boolean).unwrap(),
        Some(TypeDescriptor::Boolean)
    );
}

#[test]
fn cast_returns_target_when_explicitly_convertible() {
    let mut tree = SyntaxTree::new();
    let operand = string(&mut tree, "2024-01-01");
    let target = tree.add_data_type(DataTypeNode::DateTime);
    let cast = tree.add_expr(ExprKind::Cast { operand, target });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, cast).unwrap(),
        Some(TypeDescriptor::DateTime)
    );
}

#[test]
fn cast_without_a_rule_is_statically_rejected() {
    let mut tree = SyntaxTree::new();
    let operand = string(&mut tree, "yes");
    let target = tree.add_data_type(DataTypeNode::Boolean);
    let cast = tree.add_expr(ExprKind::Cast { operand, target });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    // No fallback type: the rejected cast has no type at all.
    assert_eq!(computer.type_of_expr(&tree, cast).unwrap(), None);
}

#[test]
fn cast_of_an_untypable_operand_has_no_type() {
    let mut tree = SyntaxTree::new();
    let operand = tree.add_expr(ExprKind::ColumnRef { target: None });
    let target = tree.add_data_type(DataTypeNode::Integer);
    let cast = tree.add_expr(ExprKind::Cast { operand, target });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(computer.type_of_expr(&tree, cast).unwrap(), None);
}

#[test]
fn mixed_arithmetic_widens_through_implicit_conversion() {
    let mut tree = SyntaxTree::new();
    let left = num(&mut tree, "1");
    let right = num(&mut tree, "2.5");
    let sum = tree.add_expr(ExprKind::Binary {
        op: BinaryOperator::Add,
        left,
        right,
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, sum).unwrap(),
        Some(TypeDescriptor::Real)
    );
}

#[test]
fn inapplicable_operator_yields_no_type() {
    let mut tree = SyntaxTree::new();
    let left = tree.add_expr(ExprKind::BooleanLiteral { value: true });
    let right = tree.add_expr(ExprKind::BooleanLiteral { value: false });
    let sum = tree.add_expr(ExprKind::Binary {
        op: BinaryOperator::Add,
        left,
        right,
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(computer.type_of_expr(&tree, sum).unwrap(), None);
}

#[test]
fn unresolved_reference_makes_the_whole_binary_untypable() {
    let mut tree = SyntaxTree::new();
    let left = tree.add_expr(ExprKind::ColumnRef { target: None });
    let right = num(&mut tree, "1");
    let sum = tree.add_expr(ExprKind::Binary {
        op: BinaryOperator::Add,
        left,
        right,
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(computer.type_of_expr(&tree, left).unwrap(), None);
    assert_eq!(computer.type_of_expr(&tree, sum).unwrap(), None);
}

#[test]
fn unary_operators_resolve_through_the_registry() {
    let mut tree = SyntaxTree::new();
    let flag = tree.add_expr(ExprKind::BooleanLiteral { value: true });
    let not = tree.add_expr(ExprKind::Unary {
        op: UnaryOperator::Not,
        operand: flag,
    });
    let n = num(&mut tree, "7");
    let neg = tree.add_expr(ExprKind::Unary {
        op: UnaryOperator::Minus,
        operand: n,
    });
    let text = string(&mut tree, "x");
    let bad = tree.add_expr(ExprKind::Unary {
        op: UnaryOperator::Minus,
        operand: text,
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, not).unwrap(),
        Some(TypeDescriptor::Boolean)
    );
    assert_eq!(
        computer.type_of_expr(&tree, neg).unwrap(),
        Some(TypeDescriptor::Integer)
    );
    assert_eq!(computer.type_of_expr(&tree, bad).unwrap(), None);
}

#[test]
fn plain_list_degenerates_to_its_first_element() {
    let mut tree = SyntaxTree::new();
    let one = num(&mut tree, "1");
    let two = num(&mut tree, "2");
    let three = num(&mut tree, "3");
    let list = tree.add_expr(ExprKind::ExprList {
        items: vec![one, two, three],
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, list).unwrap(),
        Some(TypeDescriptor::Integer)
    );
}

#[test]
fn membership_list_becomes_an_array() {
    let mut tree = SyntaxTree::new();
    let x = num(&mut tree, "5");
    let one = num(&mut tree, "1");
    let two = num(&mut tree, "2");
    let three = num(&mut tree, "3");
    let list = tree.add_expr(ExprKind::ExprList {
        items: vec![one, two, three],
    });
    let membership = tree.add_expr(ExprKind::Negatable {
        op: BinaryOperator::In,
        negated: false,
        left: x,
        right: list,
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, list).unwrap(),
        Some(TypeDescriptor::array(TypeDescriptor::Integer))
    );
    assert_eq!(
        computer.type_of_expr(&tree, membership).unwrap(),
        Some(TypeDescriptor::Boolean)
    );
}

#[test]
fn negated_membership_types_like_the_positive_form() {
    let mut tree = SyntaxTree::new();
    let x = string(&mut tree, "a");
    let a = string(&mut tree, "a");
    let b = string(&mut tree, "b");
    let list = tree.add_expr(ExprKind::ExprList { items: vec![a, b] });
    let not_in = tree.add_expr(ExprKind::Negatable {
        op: BinaryOperator::In,
        negated: true,
        left: x,
        right: list,
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, not_in).unwrap(),
        Some(TypeDescriptor::Boolean)
    );
}

#[test]
fn list_left_of_a_membership_test_is_not_an_array() {
    let mut tree = SyntaxTree::new();
    let one = num(&mut tree, "1");
    let left_list = tree.add_expr(ExprKind::ExprList { items: vec![one] });
    let two = num(&mut tree, "2");
    let right_list = tree.add_expr(ExprKind::ExprList { items: vec![two] });
    tree.add_expr(ExprKind::Negatable {
        op: BinaryOperator::In,
        negated: false,
        left: left_list,
        right: right_list,
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    // Only the right operand carries set semantics.
    assert_eq!(
        computer.type_of_expr(&tree, left_list).unwrap(),
        Some(TypeDescriptor::Integer)
    );
    assert_eq!(
        computer.type_of_expr(&tree, right_list).unwrap(),
        Some(TypeDescriptor::array(TypeDescriptor::Integer))
    );
}

#[test]
fn between_is_boolean_regardless_of_operands() {
    let mut tree = SyntaxTree::new();
    let operand = tree.add_expr(ExprKind::ColumnRef { target: None });
    let low = num(&mut tree, "1");
    let high = num(&mut tree, "10");
    let between = tree.add_expr(ExprKind::Between { operand, low, high });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, between).unwrap(),
        Some(TypeDescriptor::Boolean)
    );
}

#[test]
fn function_calls_take_their_declared_return_type() {
    let mut tree = SyntaxTree::new();
    let return_type = tree.add_data_type(DataTypeNode::Real);
    let func = tree.add_decl(DeclNode::FunctionDef {
        name: "sqrt".into(),
        return_type,
    });
    let arg = num(&mut tree, "2");
    let call = tree.add_expr(ExprKind::FunctionCall {
        function: Some(func),
        args: vec![arg],
    });
    let unresolved = tree.add_expr(ExprKind::FunctionCall {
        function: None,
        args: vec![],
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, call).unwrap(),
        Some(TypeDescriptor::Real)
    );
    assert_eq!(computer.type_of_expr(&tree, unresolved).unwrap(), None);
}

#[test]
fn table_qualified_column_takes_its_declared_type() {
    let mut tree = SyntaxTree::new();
    let table = tree.add_decl(DeclNode::TableSource {
        name: "users".into(),
    });
    let char10 = tree.add_data_type(DataTypeNode::Char { length: Some(10) });
    let column = tree.add_decl(DeclNode::ColumnDef {
        name: "name".into(),
        data_type: char10,
    });
    let reference = tree.add_expr(ExprKind::TableColumnRef {
        variable: Some(table),
        column: Some(column),
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, reference).unwrap(),
        Some(TypeDescriptor::char_of(10))
    );
}

#[test]
fn subquery_qualified_column_takes_its_projected_expression_type() {
    let mut tree = SyntaxTree::new();
    let projected_expr = num(&mut tree, "1.5");
    let item = tree.add_decl(DeclNode::ProjectedItem {
        alias: Some("score".into()),
        expr: projected_expr,
    });
    let query = tree.add_query(squill_ast::QueryNode::new(vec![item]));
    let source = tree.add_decl(DeclNode::SubquerySource {
        name: "s".into(),
        query,
    });
    let reference = tree.add_expr(ExprKind::TableColumnRef {
        variable: Some(source),
        column: Some(item),
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, reference).unwrap(),
        Some(TypeDescriptor::Real)
    );
}

#[test]
fn unresolved_links_in_qualified_references_have_no_type() {
    let mut tree = SyntaxTree::new();
    let table = tree.add_decl(DeclNode::TableSource {
        name: "users".into(),
    });
    let no_variable = tree.add_expr(ExprKind::TableColumnRef {
        variable: None,
        column: None,
    });
    let no_column = tree.add_expr(ExprKind::TableColumnRef {
        variable: Some(table),
        column: None,
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(computer.type_of_expr(&tree, no_variable).unwrap(), None);
    assert_eq!(computer.type_of_expr(&tree, no_column).unwrap(), None);
}

#[test]
fn impossible_variable_referent_is_an_internal_defect() {
    let mut tree = SyntaxTree::new();
    let return_type = tree.add_data_type(DataTypeNode::Integer);
    let func = tree.add_decl(DeclNode::FunctionDef {
        name: "f".into(),
        return_type,
    });
    let reference = tree.add_expr(ExprKind::TableColumnRef {
        variable: Some(func),
        column: None,
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    let err = computer.type_of_expr(&tree, reference).unwrap_err();
    assert!(err.is_internal());
    assert!(matches!(err, TypeError::UnexpectedReferent { .. }));
}

#[test]
fn column_references_follow_their_declaration() {
    let mut tree = SyntaxTree::new();
    let int = tree.add_data_type(DataTypeNode::Integer);
    let column = tree.add_decl(DeclNode::ColumnDef {
        name: "id".into(),
        data_type: int,
    });
    let via_column = tree.add_expr(ExprKind::ColumnRef {
        target: Some(column),
    });

    let projected_expr = string(&mut tree, "x");
    let item = tree.add_decl(DeclNode::ProjectedItem {
        alias: Some("label".into()),
        expr: projected_expr,
    });
    let via_item = tree.add_expr(ExprKind::ColumnRef { target: Some(item) });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    assert_eq!(
        computer.type_of_expr(&tree, via_column).unwrap(),
        Some(TypeDescriptor::Integer)
    );
    assert_eq!(
        computer.type_of_expr(&tree, via_item).unwrap(),
        Some(TypeDescriptor::char_any())
    );
}

#[test]
fn cte_column_references_fail_loudly_as_a_known_gap() {
    let mut tree = SyntaxTree::new();
    let cte = tree.add_decl(DeclNode::CteColumn { name: "n".into() });
    let reference = tree.add_expr(ExprKind::ColumnRef { target: Some(cte) });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    let err = computer.type_of_expr(&tree, reference).unwrap_err();
    assert_eq!(
        err,
        TypeError::NotYetSupported {
            feature: "common table expression column references"
        }
    );
    // Distinguishable from a genuine defect.
    assert!(!err.is_internal());
}

#[test]
fn column_reference_to_a_row_source_is_an_internal_defect() {
    let mut tree = SyntaxTree::new();
    let table = tree.add_decl(DeclNode::TableSource { name: "t".into() });
    let reference = tree.add_expr(ExprKind::ColumnRef {
        target: Some(table),
    });

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    let err = computer.type_of_expr(&tree, reference).unwrap_err();
    assert!(err.is_internal());
}

#[test]
fn declared_data_types_map_to_descriptors() {
    let mut tree = SyntaxTree::new();
    let cases = [
        (DataTypeNode::Boolean, TypeDescriptor::Boolean),
        (DataTypeNode::Integer, TypeDescriptor::Integer),
        (DataTypeNode::Real, TypeDescriptor::Real),
        (
            DataTypeNode::Char { length: Some(3) },
            TypeDescriptor::char_of(3),
        ),
        (
            DataTypeNode::Enum {
                members: vec!["red".into(), "green".into()],
            },
            TypeDescriptor::enum_of(["red", "green"]),
        ),
        (DataTypeNode::DateTime, TypeDescriptor::DateTime),
        (DataTypeNode::Blob, TypeDescriptor::Blob),
    ];

    let dialect = standard();
    let computer = TypeComputer::new(&dialect, &AstProjection);
    for (node, expected) in cases {
        let id = tree.add_data_type(node);
        assert_eq!(computer.type_of_data_type(&tree, id), expected);
    }
}
