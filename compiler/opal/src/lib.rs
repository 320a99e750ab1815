//! Type-indexed operator resolution.
//!
//! Generic code over `T: Operand` can apply `+ - * / % ! ~ & | ^ == != < <=
//! > >=` to values of `T` without a static bound on the operator. The first
//! call for each `(operator, T)` pair synthesizes the operator (see
//! `opal_synth`) and caches it in the [`OperatorRegistry`]; later calls reuse
//! the cached function. A type without the operator gets
//! [`OperatorError::NotSupported`] on the first call and every call after.
//!
//! ```text
//! fn sum<T: Operand + Copy>(items: &[T], zero: T) -> OperatorResult<T> {
//!     items.iter().try_fold(zero, |acc, &item| opal::add(acc, item))
//! }
//! ```
//!
//! # Tracing
//!
//! Resolution emits `tracing` events: `debug` when a slot is synthesized,
//! `warn` when synthesis fails, `trace` on cache hits. Call
//! [`init_tracing`] and set `RUST_LOG=opal=debug` to see them.

mod operator;
mod registry;

pub use operator::{
    add, and_also, bitwise_and, bitwise_not, bitwise_or, capabilities, divide, equal,
    greater_than, greater_than_or_equal, less_than, less_than_or_equal, modulo, multiply, nand,
    nor, not, not_equal, or_else, subtract, xor,
};
pub use registry::{OperatorRegistry, RegistryStats, SlotKey, SlotReport, SlotState};

pub use opal_synth::{
    Callable, Operand, OperatorError, OperatorKind, OperatorResult, OperatorSet, OperatorTable,
    ResolvedOperator, Shape,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or another global subscriber is
/// already installed. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
                .ok();
        }
    });
}
