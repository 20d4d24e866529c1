//! Property tests for the linear-timeline invariants.

use proptest::prelude::*;
use trellis_history::History;

/// Operations a UI could issue against a history store.
#[derive(Debug, Clone)]
enum Op {
    Set(i64),
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i64>().prop_map(Op::Set),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

proptest! {
    /// undo(set(s, v)) restores the old present; redo restores v.
    #[test]
    fn set_undo_redo_round_trip(initial in any::<i64>(), v in any::<i64>()) {
        let mut h = History::new(initial);
        h.set(v);
        prop_assert!(h.undo());
        prop_assert_eq!(*h.present(), initial);
        prop_assert!(h.redo());
        prop_assert_eq!(*h.present(), v);
    }

    /// After any operation sequence, undoing everything walks back to the
    /// oldest retained snapshot, and the timeline lengths stay consistent.
    #[test]
    fn full_unwind_reaches_oldest(ops in prop::collection::vec(op(), 0..64)) {
        let mut h = History::new(0i64);
        for op in ops {
            match op {
                Op::Set(v) => h.set(v),
                Op::Undo => { h.undo(); },
                Op::Redo => { h.redo(); },
            }
            // can_undo/can_redo always agree with the stack lengths.
            prop_assert_eq!(h.can_undo(), h.past_len() > 0);
            prop_assert_eq!(h.can_redo(), h.future_len() > 0);
        }

        let expected_oldest = h.past().first().copied().unwrap_or(*h.present());
        let steps = h.past_len();
        for _ in 0..steps {
            prop_assert!(h.undo());
        }
        prop_assert!(!h.undo());
        prop_assert_eq!(*h.present(), expected_oldest);
    }

    /// A set always empties the redo side, regardless of prior history.
    #[test]
    fn set_discards_future(ops in prop::collection::vec(op(), 0..32), v in any::<i64>()) {
        let mut h = History::new(0i64);
        for op in ops {
            match op {
                Op::Set(v) => h.set(v),
                Op::Undo => { h.undo(); },
                Op::Redo => { h.redo(); },
            }
        }
        h.set(v);
        prop_assert!(!h.can_redo());
        prop_assert_eq!(*h.present(), v);
    }

    /// Undo then redo is the identity away from the boundaries.
    #[test]
    fn undo_redo_identity(ops in prop::collection::vec(op(), 0..32)) {
        let mut h = History::new(0i64);
        for op in ops {
            match op {
                Op::Set(v) => h.set(v),
                Op::Undo => { h.undo(); },
                Op::Redo => { h.redo(); },
            }
        }
        let before = h.clone();
        if h.undo() {
            prop_assert!(h.redo());
            prop_assert_eq!(h, before);
        }
    }
}
