use super::*;
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Meters(f64);

impl Add for Meters {
    type Output = Meters;

    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl Operand for Meters {
    fn declare(ops: &mut OperatorTable<Self>) {
        ops.add().equality();
    }
}

#[test]
fn new_table_is_empty() {
    let table = OperatorTable::<Meters>::new();
    assert!(table.is_empty());
    assert_eq!(table.supported(), OperatorSet::empty());
}

#[test]
fn declared_table_reports_supported_kinds() {
    let table = OperatorTable::<Meters>::declared();
    assert_eq!(
        table.supported(),
        OperatorSet::ADD | OperatorSet::EQUAL | OperatorSet::NOT_EQUAL
    );
    assert!(table.get(OperatorKind::Subtract).is_none());
}

#[test]
fn declared_binding_calls_native_operator() {
    let table = OperatorTable::<Meters>::declared();
    let Some(Callable::Binary(add)) = table.get(OperatorKind::Add) else {
        panic!("add should be a binary binding");
    };
    assert_eq!(add(Meters(1.5), Meters(2.0)), Meters(1.5) + Meters(2.0));
}

#[test]
fn equality_binds_both_kinds() {
    let table = OperatorTable::<Meters>::declared();
    let Some(Callable::Comparison(ne)) = table.get(OperatorKind::NotEqual) else {
        panic!("not_equal should be a comparison binding");
    };
    assert!(ne(&Meters(1.0), &Meters(2.0)));
    assert!(!ne(&Meters(1.0), &Meters(1.0)));
}

#[test]
fn later_binding_replaces_earlier() {
    let mut table = OperatorTable::<i32>::new();
    table.add();
    table.define_binary(OperatorKind::Add, |x, y| x * 10 + y);
    let Some(Callable::Binary(add)) = table.get(OperatorKind::Add) else {
        panic!("add should be bound");
    };
    assert_eq!(add(4, 2), 42);
}

#[test]
fn logical_binding_is_ignored() {
    let mut table = OperatorTable::<bool>::new();
    table.define_comparison(OperatorKind::AndAlso, |x, y| *x && *y);
    assert!(table.is_empty());
    assert!(table.get(OperatorKind::AndAlso).is_none());
}

#[test]
fn grouped_helpers() {
    let mut table = OperatorTable::<u8>::new();
    table.arithmetic().bitwise().comparison();
    assert_eq!(
        table.supported(),
        OperatorSet::ARITHMETIC | OperatorSet::BITWISE | OperatorSet::COMPARISON
    );
}

#[test]
fn callable_shape() {
    let mut table = OperatorTable::<i64>::new();
    table.bitwise_not().ordering();
    assert_eq!(
        table.get(OperatorKind::BitwiseNot).map(Callable::shape),
        Some(Shape::Unary)
    );
    assert_eq!(
        table.get(OperatorKind::LessThan).map(Callable::shape),
        Some(Shape::Comparison)
    );
}
