//! Compiled operators.

use crate::errors::{shape_mismatch, OperatorResult};
use crate::kind::{OperatorKind, Shape};
use crate::table::Callable;
use std::fmt;

/// One operator compiled for one closed type.
///
/// Immutable once built; the registry shares it behind an `Arc`.
pub struct ResolvedOperator<T> {
    kind: OperatorKind,
    type_name: &'static str,
    callable: Callable<T>,
}

impl<T> ResolvedOperator<T> {
    pub(crate) fn new(kind: OperatorKind, callable: Callable<T>) -> Self {
        ResolvedOperator {
            kind,
            type_name: std::any::type_name::<T>(),
            callable,
        }
    }

    #[inline]
    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.callable.shape()
    }

    pub fn callable(&self) -> &Callable<T> {
        &self.callable
    }

    #[inline]
    pub fn call_binary(&self, x: T, y: T) -> OperatorResult<T> {
        match &self.callable {
            Callable::Binary(f) => Ok(f(x, y)),
            _ => Err(shape_mismatch(self.kind, Shape::Binary)),
        }
    }

    #[inline]
    pub fn call_unary(&self, x: T) -> OperatorResult<T> {
        match &self.callable {
            Callable::Unary(f) => Ok(f(x)),
            _ => Err(shape_mismatch(self.kind, Shape::Unary)),
        }
    }

    #[inline]
    pub fn call_comparison(&self, x: &T, y: &T) -> OperatorResult<bool> {
        match &self.callable {
            Callable::Comparison(f) => Ok(f(x, y)),
            _ => Err(shape_mismatch(self.kind, Shape::Comparison)),
        }
    }
}

impl<T> fmt::Debug for ResolvedOperator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedOperator")
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .field("shape", &self.shape())
            .finish()
    }
}
