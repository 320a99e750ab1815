//! Operator kinds and operator sets.
//!
//! `OperatorKind` is the fixed set of operators the facade exposes. Kinds are
//! partitioned by [`Shape`]: the three synthesized shapes go through the
//! type-indexed cache, the logical shape operates on `bool` directly.

use bitflags::bitflags;
use std::fmt;

/// Arity and result shape of an operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Shape {
    /// `(T, T) -> T`
    Binary,
    /// `(T) -> T`
    Unary,
    /// `(&T, &T) -> bool`
    Comparison,
    /// `(bool, bool) -> bool`, never synthesized.
    Logical,
}

impl Shape {
    /// Number of operands taken by an operator of this shape.
    pub const fn arity(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary | Self::Comparison | Self::Logical => 2,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Binary => "(T, T) -> T",
            Self::Unary => "(T) -> T",
            Self::Comparison => "(&T, &T) -> bool",
            Self::Logical => "(bool, bool) -> bool",
        };
        f.write_str(text)
    }
}

/// Supported operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperatorKind {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    // Bitwise
    BitwiseAnd,
    BitwiseOr,
    Xor,

    // Unary
    Not,
    BitwiseNot,

    // Comparison
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,

    // Logical
    AndAlso,
    OrElse,
    Nand,
    Nor,
}

impl OperatorKind {
    /// Every kind, synthesized kinds first in slot order.
    pub const ALL: [OperatorKind; 20] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::BitwiseAnd,
        Self::BitwiseOr,
        Self::Xor,
        Self::Not,
        Self::BitwiseNot,
        Self::Equal,
        Self::NotEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::AndAlso,
        Self::OrElse,
        Self::Nand,
        Self::Nor,
    ];

    /// Number of kinds that go through synthesis.
    pub const SYNTHESIZED_COUNT: usize = 16;

    /// Kinds that go through synthesis, indexed by [`OperatorKind::slot_index`].
    pub const SYNTHESIZED: [OperatorKind; Self::SYNTHESIZED_COUNT] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::BitwiseAnd,
        Self::BitwiseOr,
        Self::Xor,
        Self::Not,
        Self::BitwiseNot,
        Self::Equal,
        Self::NotEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
    ];

    pub const fn shape(self) -> Shape {
        match self {
            Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Modulo
            | Self::BitwiseAnd
            | Self::BitwiseOr
            | Self::Xor => Shape::Binary,
            Self::Not | Self::BitwiseNot => Shape::Unary,
            Self::Equal
            | Self::NotEqual
            | Self::GreaterThan
            | Self::GreaterThanOrEqual
            | Self::LessThan
            | Self::LessThanOrEqual => Shape::Comparison,
            Self::AndAlso | Self::OrElse | Self::Nand | Self::Nor => Shape::Logical,
        }
    }

    #[inline]
    pub const fn arity(self) -> usize {
        self.shape().arity()
    }

    /// Whether this kind is resolved per type. Logical kinds are not.
    #[inline]
    pub const fn is_synthesized(self) -> bool {
        !matches!(self.shape(), Shape::Logical)
    }

    /// Position of this kind in an operator table, `None` for logical kinds.
    pub const fn slot_index(self) -> Option<usize> {
        let index = match self {
            Self::Add => 0,
            Self::Subtract => 1,
            Self::Multiply => 2,
            Self::Divide => 3,
            Self::Modulo => 4,
            Self::BitwiseAnd => 5,
            Self::BitwiseOr => 6,
            Self::Xor => 7,
            Self::Not => 8,
            Self::BitwiseNot => 9,
            Self::Equal => 10,
            Self::NotEqual => 11,
            Self::GreaterThan => 12,
            Self::GreaterThanOrEqual => 13,
            Self::LessThan => 14,
            Self::LessThanOrEqual => 15,
            Self::AndAlso | Self::OrElse | Self::Nand | Self::Nor => return None,
        };
        Some(index)
    }

    /// Source-level symbol, used in lambda rendering and error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Arithmetic
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            // Bitwise
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::Xor => "^",
            // Unary
            Self::Not => "!",
            Self::BitwiseNot => "~",
            // Comparison
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            // Logical
            Self::AndAlso => "&&",
            Self::OrElse => "||",
            Self::Nand => "!&",
            Self::Nor => "!|",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulo => "modulo",
            Self::BitwiseAnd => "bitwise_and",
            Self::BitwiseOr => "bitwise_or",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::BitwiseNot => "bitwise_not",
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanOrEqual => "greater_than_or_equal",
            Self::LessThan => "less_than",
            Self::LessThanOrEqual => "less_than_or_equal",
            Self::AndAlso => "and_also",
            Self::OrElse => "or_else",
            Self::Nand => "nand",
            Self::Nor => "nor",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of synthesized operators, one bit per table slot.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct OperatorSet: u16 {
        const ADD = 1 << 0;
        const SUBTRACT = 1 << 1;
        const MULTIPLY = 1 << 2;
        const DIVIDE = 1 << 3;
        const MODULO = 1 << 4;
        const BITWISE_AND = 1 << 5;
        const BITWISE_OR = 1 << 6;
        const XOR = 1 << 7;
        const NOT = 1 << 8;
        const BITWISE_NOT = 1 << 9;
        const EQUAL = 1 << 10;
        const NOT_EQUAL = 1 << 11;
        const GREATER_THAN = 1 << 12;
        const GREATER_THAN_OR_EQUAL = 1 << 13;
        const LESS_THAN = 1 << 14;
        const LESS_THAN_OR_EQUAL = 1 << 15;

        const ARITHMETIC = Self::ADD.bits()
            | Self::SUBTRACT.bits()
            | Self::MULTIPLY.bits()
            | Self::DIVIDE.bits()
            | Self::MODULO.bits();
        const BITWISE = Self::BITWISE_AND.bits() | Self::BITWISE_OR.bits() | Self::XOR.bits();
        const EQUALITY = Self::EQUAL.bits() | Self::NOT_EQUAL.bits();
        const ORDERING = Self::GREATER_THAN.bits()
            | Self::GREATER_THAN_OR_EQUAL.bits()
            | Self::LESS_THAN.bits()
            | Self::LESS_THAN_OR_EQUAL.bits();
        const COMPARISON = Self::EQUALITY.bits() | Self::ORDERING.bits();
    }
}

impl OperatorSet {
    /// Single-bit set for `kind`; empty for logical kinds.
    pub fn of(kind: OperatorKind) -> Self {
        match kind.slot_index() {
            Some(index) => Self::from_bits_truncate(1 << index),
            None => Self::empty(),
        }
    }

    pub fn has(self, kind: OperatorKind) -> bool {
        let bit = Self::of(kind);
        !bit.is_empty() && self.contains(bit)
    }

    /// Kinds in this set, in slot order.
    pub fn kinds(self) -> impl Iterator<Item = OperatorKind> {
        OperatorKind::SYNTHESIZED
            .into_iter()
            .filter(move |kind| self.has(*kind))
    }
}
