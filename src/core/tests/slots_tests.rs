use std::collections::HashSet;

use crate::core::slots::{Slot, SlotError, SlotTable, MAX_SLOTS};
use crate::core::types::{Chord, Modifier};

#[test]
fn test_chords_pairwise_distinct_for_every_count() {
    // Property: for all N in 1..=7 the generated chords are pairwise distinct
    for count in 1..=MAX_SLOTS {
        let table = SlotTable::with_count(count).unwrap();

        let chords: HashSet<_> = table.slots().iter().map(|s| s.chord.clone()).collect();
        assert_eq!(
            chords.len(),
            usize::from(count),
            "count {} produced duplicate chords",
            count
        );

        let ids: HashSet<_> = table
            .slots()
            .iter()
            .map(|s| s.chord.native_id().unwrap())
            .collect();
        assert_eq!(ids.len(), usize::from(count));
    }
}

#[test]
fn test_count_out_of_range_rejected() {
    assert!(matches!(
        SlotTable::with_count(0),
        Err(SlotError::InvalidCount(0))
    ));
    assert!(matches!(
        SlotTable::with_count(8),
        Err(SlotError::InvalidCount(8))
    ));
}

#[test]
fn test_vault_keys_follow_slot_numbering() {
    let table = SlotTable::with_count(3).unwrap();

    assert_eq!(table.vault_key_of(1), Some("str1"));
    assert_eq!(table.vault_key_of(2), Some("str2"));
    assert_eq!(table.vault_key_of(3), Some("str3"));
    assert_eq!(table.vault_key_of(4), None);
}

#[test]
fn test_resolve_round_trips_native_ids() {
    let table = SlotTable::with_count(5).unwrap();

    for slot in table.slots() {
        let native_id = slot.chord.native_id().unwrap();
        assert_eq!(table.resolve(native_id), Some(slot.index));
    }

    assert_eq!(table.resolve(0xDEAD_BEEF), None);
}

#[test]
fn test_chord_of_matches_default_list() {
    let table = SlotTable::with_count(2).unwrap();

    let expected = Chord::new(vec![Modifier::Ctrl, Modifier::Shift], "Z");
    assert_eq!(table.chord_of(1), Some(&expected));

    let expected = Chord::new(vec![Modifier::Ctrl, Modifier::Shift], "X");
    assert_eq!(table.chord_of(2), Some(&expected));
}

#[test]
fn test_empty_table_is_legal() {
    let table = SlotTable::new(vec![]).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn test_duplicate_chord_rejected() {
    let chord = Chord::new(vec![Modifier::Ctrl, Modifier::Shift], "Z");
    let slots = vec![
        Slot {
            index: 1,
            chord: chord.clone(),
            vault_key: "str1".to_string(),
        },
        Slot {
            index: 2,
            chord,
            vault_key: "str2".to_string(),
        },
    ];

    assert!(matches!(
        SlotTable::new(slots),
        Err(SlotError::DuplicateChord(_))
    ));
}

#[test]
fn test_unknown_key_rejected() {
    let slots = vec![Slot {
        index: 1,
        chord: Chord::new(vec![Modifier::Ctrl], "NOSUCHKEY"),
        vault_key: "str1".to_string(),
    }];

    assert!(matches!(
        SlotTable::new(slots),
        Err(SlotError::UnknownKey(_))
    ));
}
