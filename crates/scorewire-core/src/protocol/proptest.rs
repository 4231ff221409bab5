//! Property-based tests for the packet codec.
//!
//! These verify:
//! - Codec roundtrip for arbitrary packets
//! - Codec never panics on arbitrary input
//! - Length prefix correctness

#![cfg(test)]

use bytes::BytesMut;
use proptest::prelude::*;

use crate::protocol::{
    Codec, DisplaySlot, Packet, RemoveObjectivePayload, ScoreAction, ScoreEntry,
    SetDisplayObjectivePayload, SetScorePayload, SortOrder,
};

// =============================================================================
// Arbitrary Generators
// =============================================================================

fn arb_display_slot() -> impl Strategy<Value = DisplaySlot> {
    prop_oneof![
        Just(DisplaySlot::Sidebar),
        Just(DisplaySlot::List),
        Just(DisplaySlot::BelowName),
    ]
}

fn arb_sort_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
}

fn arb_score_action() -> impl Strategy<Value = ScoreAction> {
    prop_oneof![Just(ScoreAction::Change), Just(ScoreAction::Remove)]
}

prop_compose! {
    fn arb_set_display_objective()(
        objective_name in "[a-zA-Z0-9_]{1,16}",
        display_name in ".{0,64}",
        sort_order in arb_sort_order(),
        display_slot in arb_display_slot(),
    ) -> SetDisplayObjectivePayload {
        SetDisplayObjectivePayload {
            objective_name,
            display_name,
            sort_order,
            criteria: "dummy".to_string(),
            display_slot,
        }
    }
}

prop_compose! {
    fn arb_entries()(
        objective in "[a-zA-Z0-9_]{1,16}",
        rows in prop::collection::vec((0usize..64, ".{0,32}"), 0..16),
        removal in any::<bool>(),
    ) -> Vec<ScoreEntry> {
        rows.into_iter()
            .map(|(row, text)| if removal {
                ScoreEntry::removal(&objective, row)
            } else {
                ScoreEntry::fake_player(&objective, row, text)
            })
            .collect()
    }
}

fn arb_packet() -> impl Strategy<Value = Packet> {
    prop_oneof![
        arb_set_display_objective().prop_map(Packet::SetDisplayObjective),
        "[a-zA-Z0-9_]{1,16}".prop_map(|objective_name| {
            Packet::RemoveObjective(RemoveObjectivePayload { objective_name })
        }),
        (arb_score_action(), arb_entries()).prop_map(|(action, entries)| {
            Packet::SetScore(SetScorePayload { action, entries })
        }),
    ]
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn roundtrip_arbitrary_packet(packet in arb_packet()) {
        let encoded = Codec::encode(&packet).unwrap();
        let decoded = Codec::decode_slice(&encoded).unwrap().unwrap();
        prop_assert_eq!(packet, decoded);
    }

    #[test]
    fn codec_never_panics_on_arbitrary_input(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let mut buf = BytesMut::from(&data[..]);
        // May return Ok(None) or Err, must not panic.
        let _ = Codec::decode(&mut buf);
    }

    #[test]
    fn encoded_length_prefix_matches_payload(packet in arb_packet()) {
        let encoded = Codec::encode(&packet).unwrap();
        let len = u32::from_le_bytes([encoded[0], encoded[1], encoded[2], encoded[3]]) as usize;
        prop_assert_eq!(len, encoded.len() - 4);
    }

    #[test]
    fn truncated_header_returns_none(packet in arb_packet(), cut_at in 0usize..=3) {
        let encoded = Codec::encode(&packet).unwrap();
        if cut_at < encoded.len() {
            let result = Codec::decode_slice(&encoded[..cut_at]);
            prop_assert!(result.is_ok());
            prop_assert!(result.unwrap().is_none());
        }
    }
}
