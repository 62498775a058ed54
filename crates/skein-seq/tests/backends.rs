//! Integration test: sequence lifecycle over every storage backend.
//!
//! Opens, resizes and releases sequences over caller memory, inline arrays
//! and both heap flavours, and checks that indexed access and the cursor
//! protocol track the backend's extent through every step.

use skein_core::{AccessError, Cursor, Position};
use skein_seq::{BoundSeq, FixedSeq, HeapSeq, Sequence, SpaceSeq};
use skein_store::{Capped, Heap, Space, StoreConfig, StoreError};
use skein_test_utils::{ascending, seeded_values};

// ── Heap lifecycle ──────────────────────────────────────────────

#[test]
fn zero_capacity_heap_rejects_access() {
    let mut seq = HeapSeq::<i32>::open_heap(0).unwrap();
    for index in [0, 1, 1000] {
        assert_eq!(
            seq.get(index),
            Err(AccessError::OutOfRange {
                position: Position::At(index),
                len: 0
            })
        );
        assert!(seq.set(index, 1).is_err());
    }
}

#[test]
fn reopen_preserves_prefix_both_ways() {
    let values = seeded_values(11, 32);
    let mut seq = HeapSeq::<u32>::open_heap(32).unwrap();
    seq.set_many(seq.begin(), seq.end(), &values).unwrap();

    seq.reopen(48).unwrap();
    assert_eq!(seq.size(), 48);
    assert_eq!(&seq.as_slice()[..32], &values[..]);
    assert!(seq.as_slice()[32..].iter().all(|&v| v == 0));

    seq.reopen(5).unwrap();
    assert_eq!(seq.size(), 5);
    assert_eq!(seq.as_slice(), &values[..5]);
    assert_eq!(seq.end(), Position::At(5));
}

#[test]
fn close_then_open_is_fresh() {
    let mut seq = HeapSeq::<u32>::open_heap(16).unwrap();
    seq.fill(seq.begin(), seq.end(), 0xDEAD).unwrap();
    seq.close();

    let seq = HeapSeq::<u32>::open_heap(24).unwrap();
    assert_eq!(seq.size(), 24);
    assert_eq!(seq.find(seq.begin(), seq.end(), &0xDEAD), Ok(None));
}

// ── Allocation failure ──────────────────────────────────────────

#[test]
fn capped_heap_keeps_region_on_failed_reopen() {
    let config = StoreConfig::new(64);
    let mut seq = Sequence::<u32, Heap<u32, Capped>>::open_heap_in(16, config.allocator()).unwrap();
    seq.set_many(seq.begin(), seq.end(), &ascending(16)).unwrap();

    let err = seq.reopen(17).unwrap_err();
    assert_eq!(
        err,
        StoreError::AllocationFailed {
            requested: 17,
            element_size: 4
        }
    );
    assert_eq!(seq.size(), 16);
    assert_eq!(seq.as_slice(), &ascending(16)[..]);
}

#[test]
fn capped_space_empties_on_failed_reopen() {
    let config = StoreConfig::new(64);
    let mut seq =
        Sequence::<u32, Space<u32, Capped>>::open_heap_in(16, config.allocator()).unwrap();
    assert!(seq.reopen(config.max_elements::<u32>() + 1).is_err());
    assert_eq!(seq.size(), 0);
    assert_eq!(seq.count(seq.begin(), seq.end()), Ok(0));
    assert!(seq.get(0).is_err());

    seq.reopen(2).unwrap();
    assert_eq!(seq.as_slice(), &[0, 0]);
}

#[test]
fn overflowing_request_is_reported() {
    let err = SpaceSeq::<u64>::open_heap(usize::MAX).unwrap_err();
    assert!(matches!(err, StoreError::CapacityOverflow { .. }));
}

// ── Caller memory ───────────────────────────────────────────────

#[test]
fn bound_writes_reach_caller_memory() {
    let mut backing = [0u16; 6];
    {
        let mut seq = BoundSeq::open(&mut backing);
        seq.set_many(seq.begin(), seq.end(), &[1, 2, 3, 4, 5, 6]).unwrap();
        seq.copy(Position::At(3), seq.end(), Position::At(0)).unwrap();
    }
    assert_eq!(backing, [4, 5, 6, 4, 5, 6]);
}

#[test]
fn bound_bytes_reinterprets_elements() {
    let mut words = [0u32; 4];
    {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
        let mut seq = BoundSeq::<u32>::open_bytes(bytes, 3).unwrap();
        assert_eq!(seq.size(), 3);
        seq.set(2, 7).unwrap();
    }
    assert_eq!(words, [0, 0, 7, 0]);
}

#[test]
fn fixed_has_compile_time_extent() {
    let mut seq = FixedSeq::<u8, 3>::new();
    assert_eq!(seq.begin_back(), Position::At(2));
    assert!(seq.set(3, 1).is_err());
    seq.fill(seq.begin(), seq.end(), 4).unwrap();
    assert_eq!(seq.into_storage().into_inner(), [4, 4, 4]);
}
