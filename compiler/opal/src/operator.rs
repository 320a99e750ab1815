//! Operator functions over the global registry.
//!
//! Each function is generic over `T: Operand` only; whether `T` has the
//! operator is decided on first use and cached. A missing operator is an
//! `Err`, never a default value.

use crate::registry::OperatorRegistry;
use opal_synth::{Operand, OperatorKind, OperatorResult, OperatorSet, OperatorTable};

// Arithmetic

pub fn add<T: Operand>(x: T, y: T) -> OperatorResult<T> {
    OperatorRegistry::global().binary(OperatorKind::Add, x, y)
}

pub fn subtract<T: Operand>(x: T, y: T) -> OperatorResult<T> {
    OperatorRegistry::global().binary(OperatorKind::Subtract, x, y)
}

pub fn multiply<T: Operand>(x: T, y: T) -> OperatorResult<T> {
    OperatorRegistry::global().binary(OperatorKind::Multiply, x, y)
}

/// Native division: integers truncate toward zero.
pub fn divide<T: Operand>(x: T, y: T) -> OperatorResult<T> {
    OperatorRegistry::global().binary(OperatorKind::Divide, x, y)
}

pub fn modulo<T: Operand>(x: T, y: T) -> OperatorResult<T> {
    OperatorRegistry::global().binary(OperatorKind::Modulo, x, y)
}

/// Logical negation (`!` on `bool` and on types declaring `not`).
pub fn not<T: Operand>(x: T) -> OperatorResult<T> {
    OperatorRegistry::global().unary(OperatorKind::Not, x)
}

// Bitwise

pub fn bitwise_and<T: Operand>(x: T, y: T) -> OperatorResult<T> {
    OperatorRegistry::global().binary(OperatorKind::BitwiseAnd, x, y)
}

pub fn bitwise_or<T: Operand>(x: T, y: T) -> OperatorResult<T> {
    OperatorRegistry::global().binary(OperatorKind::BitwiseOr, x, y)
}

pub fn xor<T: Operand>(x: T, y: T) -> OperatorResult<T> {
    OperatorRegistry::global().binary(OperatorKind::Xor, x, y)
}

/// Ones' complement.
pub fn bitwise_not<T: Operand>(x: T) -> OperatorResult<T> {
    OperatorRegistry::global().unary(OperatorKind::BitwiseNot, x)
}

// Comparison

pub fn equal<T: Operand>(x: &T, y: &T) -> OperatorResult<bool> {
    OperatorRegistry::global().compare(OperatorKind::Equal, x, y)
}

pub fn not_equal<T: Operand>(x: &T, y: &T) -> OperatorResult<bool> {
    OperatorRegistry::global().compare(OperatorKind::NotEqual, x, y)
}

pub fn greater_than<T: Operand>(x: &T, y: &T) -> OperatorResult<bool> {
    OperatorRegistry::global().compare(OperatorKind::GreaterThan, x, y)
}

pub fn greater_than_or_equal<T: Operand>(x: &T, y: &T) -> OperatorResult<bool> {
    OperatorRegistry::global().compare(OperatorKind::GreaterThanOrEqual, x, y)
}

pub fn less_than<T: Operand>(x: &T, y: &T) -> OperatorResult<bool> {
    OperatorRegistry::global().compare(OperatorKind::LessThan, x, y)
}

pub fn less_than_or_equal<T: Operand>(x: &T, y: &T) -> OperatorResult<bool> {
    OperatorRegistry::global().compare(OperatorKind::LessThanOrEqual, x, y)
}

// Logical: plain bool functions, no registry

#[inline]
pub fn and_also(x: bool, y: bool) -> bool {
    x && y
}

#[inline]
pub fn or_else(x: bool, y: bool) -> bool {
    x || y
}

#[inline]
pub fn nand(x: bool, y: bool) -> bool {
    !x || !y
}

#[inline]
pub fn nor(x: bool, y: bool) -> bool {
    !x && !y
}

/// Operators `T` declares, without touching the cache.
pub fn capabilities<T: Operand>() -> OperatorSet {
    OperatorTable::<T>::declared().supported()
}

#[cfg(test)]
mod tests;
