//! Lambda compilation and operator synthesis.
//!
//! [`synthesize`] is the whole pipeline for one `(kind, T)` pair: emit the
//! canonical lambda, read `T`'s operator table and bind the lambda's operator
//! to the declared implementation.

use crate::errors::{mismatched_binding, not_supported, OperatorResult};
use crate::expr::{Lambda, ParamIndex, ResultType};
use crate::kind::OperatorKind;
use crate::resolved::ResolvedOperator;
use crate::table::{Operand, OperatorTable};

/// Build the operator `kind` for `T`.
///
/// Pure with respect to program state: emits the canonical lambda, asks `T`
/// for its operator table and compiles. Fails with `NotSupported` when `T`
/// declares no such operator.
#[tracing::instrument(level = "debug", skip_all, fields(kind = %kind))]
pub fn synthesize<T: Operand>(kind: OperatorKind) -> OperatorResult<ResolvedOperator<T>> {
    let lambda = Lambda::emit(kind)?;
    let table = OperatorTable::<T>::declared();
    tracing::debug!(
        %lambda,
        ty = std::any::type_name::<T>(),
        supported = ?table.supported(),
        "compiling operator lambda"
    );
    compile(&lambda, &table)
}

/// Bind an emitted lambda's operator to `table`.
///
/// The lambda comes from [`Lambda::emit`], so its parameters are used once
/// each, in order, and its result type follows the operator's shape.
pub(crate) fn compile<T: 'static>(
    lambda: &Lambda,
    table: &OperatorTable<T>,
) -> OperatorResult<ResolvedOperator<T>> {
    let kind = lambda.kind();
    let shape = kind.shape();
    debug_assert_eq!(
        lambda.body.operands.as_slice(),
        &[ParamIndex::FIRST, ParamIndex::SECOND][..shape.arity()]
    );
    debug_assert_eq!(lambda.result(), ResultType::for_shape(shape));

    let bound = table.get(kind).ok_or_else(|| not_supported::<T>(kind))?;
    if bound.shape() != shape {
        return Err(mismatched_binding::<T>(kind, bound.shape()));
    }
    Ok(ResolvedOperator::new(kind, bound.clone()))
}
