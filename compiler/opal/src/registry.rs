//! Type-indexed operator cache.
//!
//! One slot per `(OperatorKind, TypeId)`. A slot moves from unresolved to
//! resolved or failed exactly once and never changes again.
//!
//! # Thread Safety
//! The slot map sits behind a `RwLock` that is only held to find or insert
//! a slot. Each slot owns a `OnceLock`: the first caller synthesizes, racing
//! callers block until the outcome is published, and every caller then reads
//! the same outcome. Resolved operators are invoked with no lock held.

use opal_synth::{synthesize, Operand, OperatorError, OperatorKind, OperatorResult, ResolvedOperator};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Type-erased `ResolvedOperator<T>`.
type Erased = Arc<dyn Any + Send + Sync>;

/// Key of one cache slot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SlotKey {
    pub kind: OperatorKind,
    pub type_id: TypeId,
}

impl SlotKey {
    #[inline]
    pub fn of<T: 'static>(kind: OperatorKind) -> Self {
        SlotKey {
            kind,
            type_id: TypeId::of::<T>(),
        }
    }
}

/// Observable state of a slot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SlotState {
    /// Never requested.
    Unresolved,
    Resolved,
    /// Synthesis failed; the recorded error is returned on every call.
    Failed,
}

/// One row of [`OperatorRegistry::snapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotReport {
    pub kind: OperatorKind,
    pub type_name: &'static str,
    pub state: SlotState,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct RegistryStats {
    /// Slots created, including ones still being synthesized.
    pub slots: usize,
    pub resolved: usize,
    pub failed: usize,
    /// Synthesis runs. Equals `resolved + failed` once all slots settle.
    pub syntheses: usize,
}

struct Slot {
    type_name: &'static str,
    outcome: OnceLock<Result<Erased, OperatorError>>,
}

impl Slot {
    fn new(type_name: &'static str) -> Self {
        Slot {
            type_name,
            outcome: OnceLock::new(),
        }
    }

    fn state(&self) -> SlotState {
        match self.outcome.get() {
            None => SlotState::Unresolved,
            Some(Ok(_)) => SlotState::Resolved,
            Some(Err(_)) => SlotState::Failed,
        }
    }
}

/// Memoizes one [`ResolvedOperator`] per `(kind, type)` pair.
///
/// Entries are never evicted; the map grows with the number of distinct
/// pairs the program uses.
pub struct OperatorRegistry {
    slots: RwLock<FxHashMap<SlotKey, Arc<Slot>>>,
    syntheses: AtomicUsize,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        OperatorRegistry {
            slots: RwLock::new(FxHashMap::default()),
            syntheses: AtomicUsize::new(0),
        }
    }

    /// The process-wide registry used by the free operator functions.
    pub fn global() -> &'static OperatorRegistry {
        static GLOBAL: OnceLock<OperatorRegistry> = OnceLock::new();
        GLOBAL.get_or_init(OperatorRegistry::new)
    }

    /// Resolve `kind` for `T`, synthesizing on first use.
    ///
    /// Every call for the same slot returns the same `Arc`, or a clone of
    /// the same error.
    pub fn resolve<T: Operand>(
        &self,
        kind: OperatorKind,
    ) -> OperatorResult<Arc<ResolvedOperator<T>>> {
        if !kind.is_synthesized() {
            return Err(OperatorError::NotSynthesizable { kind });
        }

        let slot = self.slot::<T>(kind);
        let outcome = match slot.outcome.get() {
            Some(outcome) => {
                tracing::trace!(%kind, ty = slot.type_name, "operator cache hit");
                outcome
            }
            None => slot.outcome.get_or_init(|| self.build::<T>(kind)),
        };

        match outcome {
            Ok(erased) => match Arc::clone(erased).downcast::<ResolvedOperator<T>>() {
                Ok(resolved) => Ok(resolved),
                // The key holds `TypeId::of::<T>()`, so the slot's operator is
                // always a `ResolvedOperator<T>`.
                Err(_) => unreachable!(
                    "slot ({kind}, {}) holds an operator for another type",
                    slot.type_name
                ),
            },
            Err(err) => Err(err.clone()),
        }
    }

    /// Resolve and apply a binary operator.
    #[inline]
    pub fn binary<T: Operand>(&self, kind: OperatorKind, x: T, y: T) -> OperatorResult<T> {
        self.resolve::<T>(kind)?.call_binary(x, y)
    }

    /// Resolve and apply a unary operator.
    #[inline]
    pub fn unary<T: Operand>(&self, kind: OperatorKind, x: T) -> OperatorResult<T> {
        self.resolve::<T>(kind)?.call_unary(x)
    }

    /// Resolve and apply a comparison.
    #[inline]
    pub fn compare<T: Operand>(&self, kind: OperatorKind, x: &T, y: &T) -> OperatorResult<bool> {
        self.resolve::<T>(kind)?.call_comparison(x, y)
    }

    /// Find or create the slot for `(kind, T)`.
    fn slot<T: 'static>(&self, kind: OperatorKind) -> Arc<Slot> {
        let key = SlotKey::of::<T>(kind);

        // Fast path: slot already exists
        {
            let slots = self.slots.read();
            if let Some(slot) = slots.get(&key) {
                return Arc::clone(slot);
            }
        }

        // Slow path: the entry API re-checks under the write lock
        let mut slots = self.slots.write();
        let slot = slots
            .entry(key)
            .or_insert_with(|| Arc::new(Slot::new(std::any::type_name::<T>())));
        Arc::clone(slot)
    }

    /// Run synthesis for a slot. Called at most once per slot.
    fn build<T: Operand>(&self, kind: OperatorKind) -> Result<Erased, OperatorError> {
        self.syntheses.fetch_add(1, Ordering::Relaxed);
        let ty = std::any::type_name::<T>();

        match synthesize::<T>(kind) {
            Ok(resolved) => {
                tracing::debug!(%kind, ty, "operator resolved");
                let erased: Erased = Arc::new(resolved);
                Ok(erased)
            }
            Err(err) => {
                tracing::warn!(%kind, ty, error = %err, "operator resolution failed");
                Err(err)
            }
        }
    }

    // Diagnostics

    pub fn slot_state<T: 'static>(&self, kind: OperatorKind) -> SlotState {
        self.state_of(SlotKey::of::<T>(kind))
    }

    pub fn state_of(&self, key: SlotKey) -> SlotState {
        self.slots
            .read()
            .get(&key)
            .map_or(SlotState::Unresolved, |slot| slot.state())
    }

    /// The error recorded for a failed slot.
    pub fn failure<T: 'static>(&self, kind: OperatorKind) -> Option<OperatorError> {
        let slots = self.slots.read();
        match slots.get(&SlotKey::of::<T>(kind))?.outcome.get()? {
            Ok(_) => None,
            Err(err) => Some(err.clone()),
        }
    }

    pub fn stats(&self) -> RegistryStats {
        let slots = self.slots.read();
        let mut stats = RegistryStats {
            slots: slots.len(),
            syntheses: self.syntheses.load(Ordering::Relaxed),
            ..RegistryStats::default()
        };
        for slot in slots.values() {
            match slot.state() {
                SlotState::Resolved => stats.resolved += 1,
                SlotState::Failed => stats.failed += 1,
                SlotState::Unresolved => {}
            }
        }
        stats
    }

    /// Every slot, ordered by type name then operator.
    pub fn snapshot(&self) -> Vec<SlotReport> {
        let mut reports: Vec<SlotReport> = self
            .slots
            .read()
            .iter()
            .map(|(key, slot)| SlotReport {
                kind: key.kind,
                type_name: slot.type_name,
                state: slot.state(),
            })
            .collect();
        reports.sort_by_key(|report| (report.type_name, report.kind.slot_index()));
        reports
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("stats", &self.stats())
            .finish()
    }
}
