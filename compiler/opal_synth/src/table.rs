//! Operator tables: what a type declares it supports.
//!
//! An operand type fills an [`OperatorTable`] once per synthesis through
//! [`Operand::declare`]. The declaration helpers bind the type's native Rust
//! operator traits, so a declared `add` is exactly `<T as Add>::add`.
//! Generic code only needs `T: Operand`; which operators exist is a
//! runtime question answered by the table.

use crate::kind::{OperatorKind, OperatorSet, Shape};
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Sub};
use std::sync::Arc;

pub type BinaryFn<T> = Arc<dyn Fn(T, T) -> T + Send + Sync>;
pub type UnaryFn<T> = Arc<dyn Fn(T) -> T + Send + Sync>;
pub type ComparisonFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// A bound operator implementation.
pub enum Callable<T> {
    Binary(BinaryFn<T>),
    Unary(UnaryFn<T>),
    Comparison(ComparisonFn<T>),
}

impl<T> Callable<T> {
    pub fn shape(&self) -> Shape {
        match self {
            Self::Binary(_) => Shape::Binary,
            Self::Unary(_) => Shape::Unary,
            Self::Comparison(_) => Shape::Comparison,
        }
    }
}

// Manual impl: derive would require `T: Clone`.
impl<T> Clone for Callable<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Binary(f) => Self::Binary(Arc::clone(f)),
            Self::Unary(f) => Self::Unary(Arc::clone(f)),
            Self::Comparison(f) => Self::Comparison(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Callable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable<{}>", self.shape())
    }
}

/// A type whose operators can be resolved at runtime.
///
/// `declare` must be deterministic and must not resolve operators for
/// `Self` through a registry: it runs while the slot is being initialised.
pub trait Operand: Sized + 'static {
    fn declare(ops: &mut OperatorTable<Self>);
}

/// Operators declared by one type, at most one binding per kind.
pub struct OperatorTable<T> {
    slots: [Option<Callable<T>>; OperatorKind::SYNTHESIZED_COUNT],
}

impl<T: Operand> OperatorTable<T> {
    /// The table `T` declares.
    pub fn declared() -> Self {
        let mut table = Self::new();
        T::declare(&mut table);
        table
    }
}

impl<T> OperatorTable<T> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    pub fn get(&self, kind: OperatorKind) -> Option<&Callable<T>> {
        kind.slot_index().and_then(|index| self.slots[index].as_ref())
    }

    /// Kinds with a binding.
    pub fn supported(&self) -> OperatorSet {
        OperatorKind::SYNTHESIZED
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .fold(OperatorSet::empty(), |set, kind| set | OperatorSet::of(kind))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Bind `callable` to `kind`, replacing any earlier binding.
    ///
    /// The shape is not checked here; the compiler rejects a binding whose
    /// shape differs from the kind's.
    pub fn bind(&mut self, kind: OperatorKind, callable: Callable<T>) -> &mut Self {
        if let Some(index) = kind.slot_index() {
            self.slots[index] = Some(callable);
        } else {
            tracing::warn!(%kind, "ignoring binding for a logical operator");
        }
        self
    }
}

impl<T> Default for OperatorTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OperatorTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorTable")
            .field("supported", &self.supported())
            .finish()
    }
}

// Declaration helpers

impl<T: 'static> OperatorTable<T> {
    pub fn define_binary<F>(&mut self, kind: OperatorKind, f: F) -> &mut Self
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.bind(kind, Callable::Binary(Arc::new(f)))
    }

    pub fn define_unary<F>(&mut self, kind: OperatorKind, f: F) -> &mut Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.bind(kind, Callable::Unary(Arc::new(f)))
    }

    pub fn define_comparison<F>(&mut self, kind: OperatorKind, f: F) -> &mut Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.bind(kind, Callable::Comparison(Arc::new(f)))
    }

    pub fn add(&mut self) -> &mut Self
    where
        T: Add<Output = T>,
    {
        self.define_binary(OperatorKind::Add, <T as Add>::add)
    }

    pub fn subtract(&mut self) -> &mut Self
    where
        T: Sub<Output = T>,
    {
        self.define_binary(OperatorKind::Subtract, <T as Sub>::sub)
    }

    pub fn multiply(&mut self) -> &mut Self
    where
        T: Mul<Output = T>,
    {
        self.define_binary(OperatorKind::Multiply, <T as Mul>::mul)
    }

    pub fn divide(&mut self) -> &mut Self
    where
        T: Div<Output = T>,
    {
        self.define_binary(OperatorKind::Divide, <T as Div>::div)
    }

    pub fn modulo(&mut self) -> &mut Self
    where
        T: Rem<Output = T>,
    {
        self.define_binary(OperatorKind::Modulo, <T as Rem>::rem)
    }

    pub fn bitwise_and(&mut self) -> &mut Self
    where
        T: BitAnd<Output = T>,
    {
        self.define_binary(OperatorKind::BitwiseAnd, <T as BitAnd>::bitand)
    }

    pub fn bitwise_or(&mut self) -> &mut Self
    where
        T: BitOr<Output = T>,
    {
        self.define_binary(OperatorKind::BitwiseOr, <T as BitOr>::bitor)
    }

    pub fn xor(&mut self) -> &mut Self
    where
        T: BitXor<Output = T>,
    {
        self.define_binary(OperatorKind::Xor, <T as BitXor>::bitxor)
    }

    /// Logical negation through `std::ops::Not`.
    pub fn not(&mut self) -> &mut Self
    where
        T: Not<Output = T>,
    {
        self.define_unary(OperatorKind::Not, <T as Not>::not)
    }

    /// Ones' complement through `std::ops::Not`.
    pub fn bitwise_not(&mut self) -> &mut Self
    where
        T: Not<Output = T>,
    {
        self.define_unary(OperatorKind::BitwiseNot, <T as Not>::not)
    }

    /// `==` and `!=` through `PartialEq`.
    pub fn equality(&mut self) -> &mut Self
    where
        T: PartialEq,
    {
        self.define_comparison(OperatorKind::Equal, <T as PartialEq>::eq)
            .define_comparison(OperatorKind::NotEqual, <T as PartialEq>::ne)
    }

    /// `>`, `>=`, `<` and `<=` through `PartialOrd`.
    pub fn ordering(&mut self) -> &mut Self
    where
        T: PartialOrd,
    {
        self.define_comparison(OperatorKind::GreaterThan, <T as PartialOrd>::gt)
            .define_comparison(OperatorKind::GreaterThanOrEqual, <T as PartialOrd>::ge)
            .define_comparison(OperatorKind::LessThan, <T as PartialOrd>::lt)
            .define_comparison(OperatorKind::LessThanOrEqual, <T as PartialOrd>::le)
    }

    pub fn arithmetic(&mut self) -> &mut Self
    where
        T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T> + Rem<Output = T>,
    {
        self.add().subtract().multiply().divide().modulo()
    }

    pub fn bitwise(&mut self) -> &mut Self
    where
        T: BitAnd<Output = T> + BitOr<Output = T> + BitXor<Output = T>,
    {
        self.bitwise_and().bitwise_or().xor()
    }

    pub fn comparison(&mut self) -> &mut Self
    where
        T: PartialOrd,
    {
        self.equality().ordering()
    }
}

#[cfg(test)]
mod tests;
