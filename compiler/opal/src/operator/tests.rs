use super::*;
use opal_synth::OperatorError;
use pretty_assertions::assert_eq;

fn ok<T>(result: OperatorResult<T>) -> T {
    result.unwrap_or_else(|e| panic!("unexpected error: {e}"))
}

#[test]
fn add_with_ints() {
    for (x, y, expected) in [(1, 2, 3), (13, 37, 50), (1000, 100, 1100)] {
        assert_eq!(ok(add(x, y)), expected);
    }
}

#[test]
fn other_arithmetic() {
    assert_eq!(ok(divide(31_i64, 2)), 15);
    assert_eq!(ok(multiply(12.0_f32, 12.0)), 144.0);
    assert_eq!(ok(modulo(7, 13)), 7);
    assert_eq!(ok(subtract(2.5_f64, 0.5)), 2.0);
    assert!(!ok(not(true)));
}

#[test]
fn bitwise() {
    assert_eq!(ok(bitwise_and(12_i64, 7)), 4);
    assert_eq!(ok(bitwise_or(5, 10)), 15);
    assert_eq!(ok(xor(u32::MAX, u32::MAX - 2)), 2);
    assert_eq!(ok(bitwise_not(0_i32)), -1);
    assert_eq!(ok(bitwise_not(0_u8)), u8::MAX);
}

#[test]
fn comparison() {
    assert!(ok(equal(&true, &true)));
    assert!(!ok(not_equal(&7_i64, &7)));
    assert!(!ok(greater_than(&42_u32, &42)));
    assert!(ok(less_than(&13_u64, &37)));
    assert!(ok(less_than_or_equal(&Some(1), &Some(3))));
    assert!(!ok(greater_than_or_equal(&42, &1001)));
    assert!(ok(less_than(&"abc", &"abd")));
}

#[test]
fn wrapping_is_native() {
    assert_eq!(ok(add(u8::MAX.wrapping_sub(1), 1)), u8::MAX);
    assert_eq!(ok(divide(-7, 2)), -3);
    assert_eq!(ok(modulo(-7, 2)), -1);
}

#[test]
fn string_concatenation() {
    assert_eq!(ok(add("foo".to_owned(), "bar".to_owned())), "foobar");
    assert!(ok(equal(&"a".to_owned(), &"a".to_owned())));
}

#[test]
fn unsupported_is_an_error_not_a_value() {
    let err = add('a', 'b');
    assert_eq!(
        err,
        Err(OperatorError::NotSupported {
            kind: OperatorKind::Add,
            type_name: "char",
        })
    );
    assert!(not(1.0_f64).is_err());
    assert!(bitwise_not(true).is_err());
    assert!(equal(&None::<f32>, &None).is_ok());
}

#[test]
fn logical_operators() {
    assert!(and_also(true, true));
    assert!(!and_also(true, false));
    assert!(or_else(false, true));
    assert!(!or_else(false, false));
    assert!(!nand(true, true));
    assert!(nand(true, false));
    assert!(nand(false, false));
    assert!(nor(false, false));
    assert!(!nor(true, false));
}

#[test]
fn capabilities_of_builtins() {
    assert_eq!(capabilities::<char>(), OperatorSet::COMPARISON);
    assert_eq!(
        capabilities::<bool>(),
        OperatorSet::NOT | OperatorSet::BITWISE | OperatorSet::COMPARISON
    );
}
