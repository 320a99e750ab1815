//! Error types for operator synthesis and resolution.
//!
//! Errors are `Clone + PartialEq`: a failed slot stores its error once and
//! hands out copies, so every caller for that slot sees the same value.

use crate::kind::{OperatorKind, Shape};
use thiserror::Error;

/// Result of synthesis or resolution.
pub type OperatorResult<T> = Result<T, OperatorError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OperatorError {
    /// The type declares no implementation of the operator.
    #[error("operator `{}` ({kind}) is not supported for type `{type_name}`", .kind.as_symbol())]
    NotSupported {
        kind: OperatorKind,
        type_name: &'static str,
    },

    /// Logical operators work on `bool` directly and have no per-type slot.
    #[error("operator `{}` ({kind}) operates on bool directly and is never synthesized", .kind.as_symbol())]
    NotSynthesizable { kind: OperatorKind },

    /// The type bound a function of the wrong shape to the operator.
    #[error("type `{type_name}` binds {kind} with shape {declared}, expected {}", .kind.shape())]
    MismatchedBinding {
        kind: OperatorKind,
        type_name: &'static str,
        declared: Shape,
    },

    /// A resolved operator was invoked with the wrong arity or result type.
    #[error("operator {kind} has shape {actual}, invoked as {requested}")]
    ShapeMismatch {
        kind: OperatorKind,
        requested: Shape,
        actual: Shape,
    },
}

impl OperatorError {
    /// The operator this error is about.
    pub fn kind(&self) -> OperatorKind {
        match self {
            Self::NotSupported { kind, .. }
            | Self::NotSynthesizable { kind }
            | Self::MismatchedBinding { kind, .. }
            | Self::ShapeMismatch { kind, .. } => *kind,
        }
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported { .. })
    }
}

// Factory functions

/// `T` declares no implementation of `kind`.
#[cold]
pub fn not_supported<T: ?Sized>(kind: OperatorKind) -> OperatorError {
    OperatorError::NotSupported {
        kind,
        type_name: std::any::type_name::<T>(),
    }
}

#[cold]
pub fn mismatched_binding<T: ?Sized>(kind: OperatorKind, declared: Shape) -> OperatorError {
    OperatorError::MismatchedBinding {
        kind,
        type_name: std::any::type_name::<T>(),
        declared,
    }
}

#[cold]
pub fn shape_mismatch(kind: OperatorKind, requested: Shape) -> OperatorError {
    OperatorError::ShapeMismatch {
        kind,
        requested,
        actual: kind.shape(),
    }
}
