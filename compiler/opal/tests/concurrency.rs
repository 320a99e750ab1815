// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Concurrent first use of the same slot.

use opal::{OperatorKind, OperatorRegistry, OperatorTable, Operand, RegistryStats, SlotState};
use pretty_assertions::assert_eq;
use rayon::prelude::*;
use std::ops::Mul;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 16;

/// Counts how often its operator table is declared.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Counted(u64);

static COUNTED_DECLARATIONS: AtomicUsize = AtomicUsize::new(0);

impl Mul for Counted {
    type Output = Counted;

    fn mul(self, rhs: Counted) -> Counted {
        Counted(self.0 * rhs.0)
    }
}

impl Operand for Counted {
    fn declare(ops: &mut OperatorTable<Self>) {
        COUNTED_DECLARATIONS.fetch_add(1, Ordering::SeqCst);
        // Widen the race window for the other threads
        thread::sleep(std::time::Duration::from_millis(20));
        ops.multiply();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct NoOperators;

impl Operand for NoOperators {
    fn declare(_ops: &mut OperatorTable<Self>) {}
}

#[test]
fn racing_callers_share_one_resolved_function() {
    let registry = OperatorRegistry::new();
    let barrier = Barrier::new(THREADS);

    let resolved: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry.resolve::<Counted>(OperatorKind::Multiply).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &resolved[0];
    assert!(resolved.iter().all(|r| Arc::ptr_eq(r, first)));
    assert_eq!(first.call_binary(Counted(6), Counted(7)).unwrap(), Counted(42));
    assert_eq!(COUNTED_DECLARATIONS.load(Ordering::SeqCst), 1);
    assert_eq!(
        registry.stats(),
        RegistryStats {
            slots: 1,
            resolved: 1,
            failed: 0,
            syntheses: 1,
        }
    );
}

#[test]
fn racing_callers_share_one_failure() {
    let registry = OperatorRegistry::new();
    let barrier = Barrier::new(THREADS);

    let errors: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry
                        .binary(OperatorKind::Add, NoOperators, NoOperators)
                        .unwrap_err()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(errors.iter().all(|e| *e == errors[0]));
    assert!(errors[0].is_not_supported());
    assert_eq!(
        registry.slot_state::<NoOperators>(OperatorKind::Add),
        SlotState::Failed
    );
    assert_eq!(registry.stats().syntheses, 1);
}

#[test]
fn parallel_mixed_slots() {
    let registry = OperatorRegistry::new();

    let total: i64 = (0..10_000_i64)
        .into_par_iter()
        .map(|i| {
            let sum = registry.binary(OperatorKind::Add, i, 1).unwrap();
            let less = registry
                .compare(OperatorKind::LessThan, &(i as u32), &5000)
                .unwrap();
            assert!(registry.binary(OperatorKind::Add, 'a', 'b').is_err());
            if less {
                sum
            } else {
                0
            }
        })
        .sum();

    assert_eq!(total, (1..=5000).sum::<i64>());
    let stats = registry.stats();
    assert_eq!(stats.slots, 3);
    assert_eq!(stats.resolved, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.syntheses, 3);
}

#[test]
fn global_registry_across_threads() {
    let results: Vec<u16> = (0..64_u16)
        .into_par_iter()
        .map(|i| opal::bitwise_or(i, 0x100).unwrap())
        .collect();
    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(usize::from(result), i | 0x100);
    }
    assert_eq!(
        OperatorRegistry::global().slot_state::<u16>(OperatorKind::BitwiseOr),
        SlotState::Resolved
    );
}
