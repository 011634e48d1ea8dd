//! Property-based tests for card identifiers, the whitelist and the access log.
//!
//! These tests use proptest to generate random inputs and verify that the
//! core collection invariants hold for every sequence of operations.

use proptest::prelude::*;
use tagkeeper_core::{
    AccessDecision, AdminSet, CardId, LogEntry, RollingLog, Whitelist,
    constants::MAX_PERSISTED_LOG_ENTRIES,
};

/// Strategy for generating raw UIDs (4, 7 or 10 bytes, as issued by ISO 14443 cards).
fn valid_uid() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 4),
        prop::collection::vec(any::<u8>(), 7),
        prop::collection::vec(any::<u8>(), 10),
    ]
}

/// Strategy for generating short decimal card identifiers.
fn valid_card_id() -> impl Strategy<Value = CardId> {
    prop::string::string_regex("[0-9]{1,6}")
        .expect("Failed to create card id regex strategy")
        .prop_map(|s| CardId::new(&s).expect("regex only yields digits"))
}

proptest! {
    /// Property: decoding a UID yields the decimal value of its little-endian bytes.
    #[test]
    fn prop_uid_decodes_little_endian(uid in valid_uid()) {
        let expected = uid
            .iter()
            .rev()
            .fold(0u128, |acc, b| (acc << 8) | u128::from(*b));

        let card = CardId::from_uid(&uid).unwrap();
        prop_assert_eq!(card.as_str(), expected.to_string());
    }

    /// Property: the persisted log tail never exceeds its capacity and always
    /// holds the most recent entries in insertion order.
    #[test]
    fn prop_persisted_log_is_bounded_tail(count in 0usize..60) {
        let mut log = RollingLog::new();
        for i in 0..count {
            log.push(LogEntry::new("01-01-25 00:00", CardId::new(&i.to_string()).unwrap()));
        }

        let tail = log.persisted();
        prop_assert_eq!(tail.len(), count.min(MAX_PERSISTED_LOG_ENTRIES));

        let first = count.saturating_sub(MAX_PERSISTED_LOG_ENTRIES);
        for (offset, entry) in tail.iter().enumerate() {
            prop_assert_eq!(entry.card.as_str(), (first + offset).to_string());
        }
    }

    /// Property: inserting then removing a card restores the original membership.
    #[test]
    fn prop_whitelist_insert_remove(
        initial in prop::collection::vec(valid_card_id(), 0..10),
        card in valid_card_id(),
    ) {
        let mut whitelist = Whitelist::from(initial);
        let was_member = whitelist.contains(&card);
        let before = whitelist.len();

        let inserted = whitelist.insert(card.clone());
        prop_assert_eq!(inserted, !was_member);
        prop_assert!(whitelist.contains(&card));

        // Second insert is a no-op.
        prop_assert!(!whitelist.insert(card.clone()));

        prop_assert!(whitelist.remove(&card));
        prop_assert!(!whitelist.contains(&card));
        prop_assert_eq!(whitelist.len(), if was_member { before - 1 } else { before });
    }

    /// Property: whitelisted cards are granted unless they are admin cards.
    #[test]
    fn prop_whitelisted_cards_are_granted(card in valid_card_id()) {
        let admins = AdminSet::builtin();
        let mut whitelist = Whitelist::new();
        whitelist.insert(card.clone());

        let decision = AccessDecision::decide(&card, &admins, &whitelist);
        prop_assert!(decision.is_grant());
        prop_assert_eq!(decision, AccessDecision::Granted);
    }
}
