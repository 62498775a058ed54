//! Integration test: bulk operation scenarios over seeded data.
//!
//! Pins the exact results of the overlapping copy variants on the canned
//! five-element array, checks that hazardous copies are traced, and
//! cross-checks the search family against plain slice scans.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use skein_core::{Cursor, Position};
use skein_seq::{declare_sequence, FixedSeq, HeapSeq};
use skein_test_utils::{canned, seeded_small, seeded_values};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

declare_sequence!(Samples, u32);

fn canned_seq() -> FixedSeq<i32, 5> {
    FixedSeq::from(canned())
}

// ── Copy scenarios ──────────────────────────────────────────────

#[test]
fn copy_down_onto_upper_slots() {
    let mut seq = canned_seq();
    assert_eq!(
        seq.copy_down(Position::At(0), Position::At(3), Position::At(4)),
        Ok(3)
    );
    assert_eq!(seq.as_slice(), &[10, 20, 30, 20, 10]);
}

#[test]
fn copy_back_onto_lower_slots() {
    let mut seq = canned_seq();
    assert_eq!(
        seq.copy_back(Position::At(4), Position::At(1), Position::At(0)),
        Ok(3)
    );
    assert_eq!(seq.as_slice(), &[50, 40, 30, 40, 50]);
}

#[test]
fn shift_left_with_copy_shift_right_with_copy_back_down() {
    let mut left = canned_seq();
    left.copy(Position::At(1), left.end(), Position::At(0)).unwrap();
    assert_eq!(left.as_slice(), &[20, 30, 40, 50, 50]);

    let mut right = canned_seq();
    right
        .copy_back_down(Position::At(3), right.end_back(), Position::At(4))
        .unwrap();
    assert_eq!(right.as_slice(), &[10, 10, 20, 30, 40]);
}

// ── Overlap tracing ─────────────────────────────────────────────

struct CountDebug(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for CountDebug {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == tracing::Level::DEBUG && meta.target().starts_with("skein_seq") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn debug_events_during(f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(CountDebug(Arc::clone(&count)));
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}

#[test]
fn hazardous_copy_is_traced() {
    let events = debug_events_during(|| {
        let mut seq = canned_seq();
        seq.copy(Position::At(0), Position::At(4), Position::At(1)).unwrap();
        assert_eq!(seq.as_slice(), &[10, 10, 10, 10, 10]);
    });
    assert_eq!(events, 1);
}

#[test]
fn safe_copies_are_silent() {
    let events = debug_events_during(|| {
        let mut seq = canned_seq();
        seq.copy(Position::At(1), Position::At(5), Position::At(0)).unwrap();
        seq.copy_down(Position::At(0), Position::At(3), Position::At(4)).unwrap();
        let mut other = canned_seq();
        other
            .copy_back_down(Position::At(3), Position::BeforeFirst, Position::At(4))
            .unwrap();
    });
    assert_eq!(events, 0);
}

// ── Search ──────────────────────────────────────────────────────

#[test]
fn search_family_agrees_with_slice_scans() {
    let values = seeded_small(42, 200, 5);
    let mut seq: Samples = Samples::open_heap(values.len()).unwrap();
    assert_eq!(seq.set_many(seq.begin(), seq.end(), &values), Ok(200));

    for needle in 0..6 {
        let forward: Vec<usize> = (0..values.len()).filter(|&i| values[i] == needle).collect();
        let backward: Vec<usize> = forward.iter().rev().copied().collect();

        assert_eq!(seq.find(seq.begin(), seq.end(), &needle), Ok(forward.first().copied()));
        assert_eq!(
            seq.find_back(seq.begin_back(), seq.end_back(), &needle),
            Ok(backward.first().copied())
        );
        assert_eq!(seq.find_all(seq.begin(), seq.end(), &needle).unwrap().to_vec(), forward);
        assert_eq!(
            seq.find_back_all(seq.begin_back(), seq.end_back(), &needle).unwrap().to_vec(),
            backward
        );

        let mut out = [0usize; 10];
        let n = seq.find_many(seq.begin(), seq.end(), &needle, &mut out).unwrap();
        assert_eq!(n, forward.len().min(10));
        assert_eq!(&out[..n], &forward[..n]);
    }
}

#[test]
fn subrange_search_respects_bounds() {
    let mut seq = HeapSeq::<u32>::open_heap(8).unwrap();
    seq.set(1, 9).unwrap();
    seq.set(6, 9).unwrap();
    assert_eq!(seq.find(Position::At(2), Position::At(6), &9), Ok(None));
    assert_eq!(seq.find(Position::At(2), Position::At(7), &9), Ok(Some(6)));
    assert_eq!(seq.find_back(Position::At(5), Position::At(0), &9), Ok(Some(1)));
    assert_eq!(seq.find_back(Position::At(5), Position::At(1), &9), Ok(None));
}

// ── Transfer ────────────────────────────────────────────────────

#[test]
fn get_and_set_many_round_trip_in_both_directions() {
    let values = seeded_values(3, 64);
    let mut seq = HeapSeq::<u32>::open_heap(64).unwrap();
    seq.set_back_many(seq.begin_back(), seq.end_back(), &values).unwrap();

    let mut forward = vec![0u32; 64];
    seq.get_many(seq.begin(), seq.end(), &mut forward).unwrap();
    let reversed: Vec<u32> = values.iter().rev().copied().collect();
    assert_eq!(forward, reversed);

    let mut backward = vec![0u32; 64];
    seq.get_back_many(seq.begin_back(), seq.end_back(), &mut backward).unwrap();
    assert_eq!(backward, values);
}
