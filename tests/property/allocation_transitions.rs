// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Allocation State Machine
//!
//! Drives the two-state allocation machine with arbitrary command
//! sequences and checks that exclusivity can never be violated: whatever
//! the sequence, the resource ends up attached to at most one room.

use proptest::prelude::*;
use uuid::Uuid;

use room_booking::domain::AllocationState;

/// Commands the state machine can receive
#[derive(Debug, Clone)]
enum Transition {
    Allocate(u8),
    Deallocate(u8),
}

/// Small room pool so sequences revisit the same rooms
fn room_pool() -> Vec<Uuid> {
    (0u8..4)
        .map(|i| Uuid::from_u128(0x0193_4f4a_0000_0000_0000_0000_0000_1000 + i as u128))
        .collect()
}

fn transition() -> impl Strategy<Value = Transition> {
    prop_oneof![
        (0u8..4).prop_map(Transition::Allocate),
        (0u8..4).prop_map(Transition::Deallocate),
    ]
}

fn transition_sequence() -> impl Strategy<Value = Vec<Transition>> {
    prop::collection::vec(transition(), 0..40)
}

proptest! {
    /// No sequence of transitions attaches a resource to two rooms
    #[test]
    fn prop_exclusivity_holds_under_any_sequence(sequence in transition_sequence()) {
        let rooms = room_pool();
        let mut state = AllocationState::Unallocated;

        for step in sequence {
            let result = match step {
                Transition::Allocate(i) => state.allocate(rooms[i as usize]),
                Transition::Deallocate(i) => state.deallocate(rooms[i as usize]),
            };
            // Rejected transitions leave the state unchanged
            if let Ok(next) = result {
                state = next;
            }
            match state {
                AllocationState::Unallocated => {}
                AllocationState::Allocated { room_id } => {
                    prop_assert!(rooms.contains(&room_id));
                }
            }
        }
    }

    /// Allocate then deallocate with the same room always round-trips
    #[test]
    fn prop_allocate_deallocate_round_trip(i in 0u8..4) {
        let rooms = room_pool();
        let allocated = AllocationState::Unallocated.allocate(rooms[i as usize]).unwrap();
        let back = allocated.deallocate(rooms[i as usize]).unwrap();
        prop_assert_eq!(back, AllocationState::Unallocated);
    }

    /// Re-allocating to the holding room is a no-op for any room
    #[test]
    fn prop_reallocation_is_idempotent(i in 0u8..4) {
        let rooms = room_pool();
        let state = AllocationState::Allocated { room_id: rooms[i as usize] };
        prop_assert_eq!(state.allocate(rooms[i as usize]).unwrap(), state);
    }
}
