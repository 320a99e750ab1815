//! Single-operator lambda IR.
//!
//! Synthesis first emits a [`Lambda`] describing `(x, y) => x op y` (or
//! `(x) => op x`), then compiles it against a type's operator table. The IR
//! holds exactly one operator node whose operands are the parameters in
//! order; only [`Lambda::emit`] builds one.

use crate::errors::{OperatorError, OperatorResult};
use crate::kind::{OperatorKind, Shape};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Reference to a lambda parameter by position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct ParamIndex(u8);

impl ParamIndex {
    pub(crate) const FIRST: ParamIndex = ParamIndex(0);
    pub(crate) const SECOND: ParamIndex = ParamIndex(1);

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A lambda parameter. Parameters always have the operand type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Param {
    pub(crate) name: &'static str,
}

/// Result type of a lambda body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ResultType {
    /// Same type as the operands.
    Operand,
    Bool,
}

impl ResultType {
    pub const fn for_shape(shape: Shape) -> Self {
        match shape {
            Shape::Binary | Shape::Unary => Self::Operand,
            Shape::Comparison | Shape::Logical => Self::Bool,
        }
    }
}

/// The operator node of a lambda body.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct Node {
    pub(crate) op: OperatorKind,
    pub(crate) operands: SmallVec<[ParamIndex; 2]>,
}

/// The canonical lambda for one operator. Built only by [`Lambda::emit`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Lambda {
    pub(crate) params: SmallVec<[Param; 2]>,
    pub(crate) body: Node,
    pub(crate) result: ResultType,
}

impl Lambda {
    const PARAM_NAMES: [&'static str; 2] = ["x", "y"];

    /// Emit the canonical lambda for `kind`.
    ///
    /// Logical kinds are rejected: they are plain `bool` functions.
    pub fn emit(kind: OperatorKind) -> OperatorResult<Lambda> {
        let shape = kind.shape();
        let operands: SmallVec<[ParamIndex; 2]> = match shape {
            Shape::Unary => smallvec![ParamIndex::FIRST],
            Shape::Binary | Shape::Comparison => smallvec![ParamIndex::FIRST, ParamIndex::SECOND],
            Shape::Logical => return Err(OperatorError::NotSynthesizable { kind }),
        };
        let params = Self::PARAM_NAMES[..operands.len()]
            .iter()
            .map(|&name| Param { name })
            .collect();

        Ok(Lambda {
            params,
            body: Node { op: kind, operands },
            result: ResultType::for_shape(shape),
        })
    }

    #[inline]
    pub fn kind(&self) -> OperatorKind {
        self.body.op
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn result(&self) -> ResultType {
        self.result
    }

    fn param_name(&self, index: ParamIndex) -> &'static str {
        self.params.get(index.index()).map_or("?", |param| param.name)
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(param.name)?;
        }
        f.write_str(") => ")?;

        let symbol = self.body.op.as_symbol();
        match self.body.operands.as_slice() {
            [operand] => write!(f, "{symbol}{}", self.param_name(*operand)),
            operands => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {symbol} ")?;
                    }
                    f.write_str(self.param_name(*operand))?;
                }
                Ok(())
            }
        }
    }
}
