//! Operator synthesis for opal.
//!
//! Given an operator kind and a closed operand type `T`, this crate builds a
//! callable implementing that operator for `T`, or reports that `T` has no
//! such operator:
//!
//! 1. [`Lambda::emit`] produces the single-operator lambda `(x, y) => x op y`.
//! 2. [`OperatorTable::declared`] asks `T` (through [`Operand`]) which native
//!    operators it provides.
//! 3. The lambda's operator is bound to the matching table entry.
//!
//! [`synthesize`] runs the three steps. Caching lives in the `opal` crate.
//!
//! # Declaring operators
//!
//! ```text
//! impl Operand for Money {
//!     fn declare(ops: &mut OperatorTable<Self>) {
//!         ops.add().subtract().comparison();
//!     }
//! }
//! ```

mod builtins;
mod compile;
mod errors;
mod expr;
mod kind;
mod resolved;
mod table;

pub use compile::synthesize;
pub use errors::{not_supported, OperatorError, OperatorResult};
pub use expr::{Lambda, ResultType};
pub use kind::{OperatorKind, OperatorSet, Shape};
pub use resolved::ResolvedOperator;
pub use table::{BinaryFn, Callable, ComparisonFn, Operand, OperatorTable, UnaryFn};
