//! Operand declarations for built-in types.
//!
//! Each declaration binds the type's native Rust operators and nothing
//! else. Integer division by zero and debug-build overflow keep their
//! native behavior.

use crate::kind::OperatorKind;
use crate::table::{Callable, ComparisonFn, Operand, OperatorTable};
use std::cmp::Ordering;
use std::sync::Arc;

macro_rules! integer_operands {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                fn declare(ops: &mut OperatorTable<Self>) {
                    ops.arithmetic().bitwise().not().bitwise_not().comparison();
                }
            }
        )*
    };
}

integer_operands!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_operands {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                fn declare(ops: &mut OperatorTable<Self>) {
                    ops.arithmetic().comparison();
                }
            }
        )*
    };
}

float_operands!(f32, f64);

impl Operand for bool {
    fn declare(ops: &mut OperatorTable<Self>) {
        ops.not().bitwise().comparison();
    }
}

impl Operand for char {
    fn declare(ops: &mut OperatorTable<Self>) {
        ops.comparison();
    }
}

impl Operand for () {
    fn declare(ops: &mut OperatorTable<Self>) {
        ops.comparison();
    }
}

impl Operand for &'static str {
    fn declare(ops: &mut OperatorTable<Self>) {
        ops.comparison();
    }
}

impl Operand for String {
    fn declare(ops: &mut OperatorTable<Self>) {
        // Native `+` is `String + &str`.
        ops.define_binary(OperatorKind::Add, |x, y| x + &y)
            .comparison();
    }
}

/// `Option<T>` compares like the standard library: `None` equals `None`
/// and sorts before any `Some`. Only comparisons `T` declares are lifted.
///
/// `==` and `!=` need `T`'s `==`. The four relational operators need `T`'s
/// `<`, `>` and `==` together; a `T` missing any of them leaves
/// `Option<T>` without ordering.
impl<T: Operand> Operand for Option<T> {
    fn declare(ops: &mut OperatorTable<Self>) {
        let inner = OperatorTable::<T>::declared();
        let comparison = |kind| match inner.get(kind) {
            Some(Callable::Comparison(f)) => Some(Arc::clone(f)),
            _ => None,
        };

        if let Some(eq) = comparison(OperatorKind::Equal) {
            let ne = Arc::clone(&eq);
            ops.define_comparison(OperatorKind::Equal, move |x, y| lifted_eq(&eq, x, y));
            ops.define_comparison(OperatorKind::NotEqual, move |x, y| !lifted_eq(&ne, x, y));
        }

        let (Some(lt), Some(gt)) = (
            comparison(OperatorKind::LessThan),
            comparison(OperatorKind::GreaterThan),
        ) else {
            return;
        };
        let Some(eq) = comparison(OperatorKind::Equal) else {
            return;
        };
        let order: Arc<dyn Fn(&T, &T) -> Option<Ordering> + Send + Sync> =
            Arc::new(move |x: &T, y: &T| {
                if lt(x, y) {
                    Some(Ordering::Less)
                } else if gt(x, y) {
                    Some(Ordering::Greater)
                } else if eq(x, y) {
                    Some(Ordering::Equal)
                } else {
                    None
                }
            });

        let relational: [(OperatorKind, fn(Ordering) -> bool); 4] = [
            (OperatorKind::GreaterThan, Ordering::is_gt),
            (OperatorKind::GreaterThanOrEqual, Ordering::is_ge),
            (OperatorKind::LessThan, Ordering::is_lt),
            (OperatorKind::LessThanOrEqual, Ordering::is_le),
        ];
        for (kind, accept) in relational {
            let order = Arc::clone(&order);
            ops.define_comparison(kind, move |x, y| {
                lifted_cmp(&order, x, y).is_some_and(accept)
            });
        }
    }
}

fn lifted_eq<T>(eq: &ComparisonFn<T>, x: &Option<T>, y: &Option<T>) -> bool {
    match (x, y) {
        (Some(a), Some(b)) => eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn lifted_cmp<T>(
    order: &Arc<dyn Fn(&T, &T) -> Option<Ordering> + Send + Sync>,
    x: &Option<T>,
    y: &Option<T>,
) -> Option<Ordering> {
    match (x, y) {
        (Some(a), Some(b)) => order(a, b),
        (None, None) => Some(Ordering::Equal),
        (None, Some(_)) => Some(Ordering::Less),
        (Some(_), None) => Some(Ordering::Greater),
    }
}
