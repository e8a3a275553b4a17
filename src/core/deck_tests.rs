#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use crate::{
        core::{
            deck::DeckStore,
            models::{
                Card,
                DeckState,
                Direction,
            },
            FlashdeckError,
        },
        persistence::MemoryStarStorage,
    };

    const TWO_CARDS: &str = r#"[{"id":"1","title":"Q1","definition":"A1"},{"id":"2","title":"Q2","definition":"A2"}]"#;

    fn deck_json(count: usize) -> String {
        let cards: Vec<Card> = (0..count)
            .map(|i| Card::new(i.to_string(), format!("Q{i}"), format!("A{i}")))
            .collect();
        serde_json::to_string(&cards).unwrap()
    }

    fn ids<S: crate::persistence::StarStorage>(store: &DeckStore<S>) -> Vec<String> {
        store.displayed().map(|card| card.id.clone()).collect()
    }

    fn scenario_a() -> DeckStore<MemoryStarStorage> {
        let mut store = DeckStore::new(MemoryStarStorage::new());
        assert_eq!(store.load(TWO_CARDS).unwrap(), 2);
        store
    }

    #[test]
    fn test_load_two_cards() {
        let store = scenario_a();

        assert_eq!(store.current_index(), 0);
        assert_eq!(store.current_card().map(|c| c.id.as_str()), Some("1"));
        assert_eq!(store.state(), DeckState::Viewing);
    }

    #[test]
    fn test_navigate_stops_at_ends() {
        let mut store = scenario_a();

        assert!(!store.navigate(Direction::Prev));
        assert_eq!(store.current_index(), 0);

        assert!(store.navigate(Direction::Next));
        assert_eq!(store.current_index(), 1);
        assert_eq!(store.current_card().map(|c| c.id.as_str()), Some("2"));

        assert!(!store.navigate(Direction::Next));
        assert_eq!(store.current_index(), 1);
        assert_eq!(store.current_card().map(|c| c.id.as_str()), Some("2"));
    }

    #[test]
    fn test_navigate_on_empty_view_is_noop() {
        let mut store = DeckStore::new(MemoryStarStorage::new());

        assert!(!store.navigate(Direction::Next));
        assert!(!store.navigate(Direction::Prev));
        assert_eq!(store.current_index(), 0);
        assert_eq!(store.state(), DeckState::Empty);
    }

    #[test]
    fn test_star_then_filter_then_unstar() {
        let mut store = scenario_a();

        assert_eq!(store.toggle_star().unwrap(), Some(true));
        assert_eq!(store.storage().saves, 1);
        assert!(store.storage().starred.contains("1"));

        store.set_filter(true);
        assert_eq!(ids(&store), vec!["1"]);
        assert_eq!(store.current_index(), 0);

        assert_eq!(store.toggle_star().unwrap(), Some(false));
        assert_eq!(store.displayed_len(), 0);
        assert_eq!(store.state(), DeckState::Empty);
        assert!(store.current_card().is_none());
        assert!(store.show_starred_only());
        assert_eq!(store.deck_len(), 2);
    }

    #[test]
    fn test_load_empty_array() {
        let mut store = DeckStore::new(MemoryStarStorage::new());

        assert_eq!(store.load("[]").unwrap(), 0);
        assert_eq!(store.state(), DeckState::Empty);
        assert!(store.has_loaded());
    }

    #[test]
    fn test_schema_error_keeps_previous_deck() {
        let mut store = scenario_a();
        store.navigate(Direction::Next);

        let err = store.load(r#"{"not":"an array"}"#).unwrap_err();
        assert!(matches!(err, FlashdeckError::Schema(_)));
        assert_eq!(store.deck_len(), 2);
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn test_parse_error_rolls_back() {
        let mut store = scenario_a();
        let deck_before = store.deck().to_vec();
        let view_before = ids(&store);
        let index_before = store.current_index();

        assert!(matches!(store.load("not json"), Err(FlashdeckError::Parse(_))));

        assert_eq!(store.deck(), deck_before.as_slice());
        assert_eq!(ids(&store), view_before);
        assert_eq!(store.current_index(), index_before);
    }

    #[test]
    fn test_load_keeps_filter_and_stale_stars() {
        let mut store = DeckStore::new(MemoryStarStorage::with_ids(["2", "gone"]));
        store.set_filter(true);
        store.load(TWO_CARDS).unwrap();

        assert_eq!(ids(&store), vec!["2"]);

        store.load(&deck_json(3)).unwrap();
        assert_eq!(ids(&store), vec!["2"]);
        assert!(store.is_starred("gone"));
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut store = scenario_a();
        store.navigate(Direction::Next);

        store.toggle_star().unwrap();
        store.toggle_star().unwrap();

        assert!(!store.is_starred("2"));
        assert!(store.storage().starred.is_empty());
        assert_eq!(store.storage().saves, 2);
    }

    #[test]
    fn test_toggle_on_empty_view_does_nothing() {
        let mut store = DeckStore::new(MemoryStarStorage::new());

        assert_eq!(store.toggle_star().unwrap(), None);
        assert_eq!(store.storage().saves, 0);
    }

    #[test]
    fn test_failed_save_rolls_back_star() {
        let mut store = DeckStore::new(MemoryStarStorage::failing());
        store.load(TWO_CARDS).unwrap();

        assert!(matches!(store.toggle_star(), Err(FlashdeckError::Storage(_))));
        assert!(!store.is_starred("1"));
        assert!(store.starred_ids().is_empty());
    }

    #[test]
    fn test_unfiltered_star_keeps_position() {
        let mut store = scenario_a();
        store.navigate(Direction::Next);

        store.toggle_star().unwrap();
        store.toggle_star().unwrap();

        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn test_default_deck_only_applies_before_first_load() {
        let mut store = DeckStore::new(MemoryStarStorage::new());
        assert_eq!(store.load_default(&deck_json(3)).unwrap(), Some(3));

        store.load(TWO_CARDS).unwrap();
        assert_eq!(store.load_default(&deck_json(5)).unwrap(), None);
        assert_eq!(store.deck_len(), 2);

        let mut fresh = DeckStore::new(MemoryStarStorage::new());
        fresh.load("[]").unwrap();
        assert_eq!(fresh.load_default("not even json").unwrap(), None);
    }

    #[test]
    fn test_failed_user_load_does_not_block_default() {
        let mut store = DeckStore::new(MemoryStarStorage::new());
        assert!(store.load("[oops").is_err());

        assert_eq!(store.load_default(TWO_CARDS).unwrap(), Some(2));
    }

    #[test]
    fn test_shuffle_single_card_is_noop() {
        let mut store = DeckStore::new(MemoryStarStorage::new());
        store.load(&deck_json(1)).unwrap();

        assert!(!store.shuffle());
        assert_eq!(ids(&store), vec!["0"]);
    }

    #[test]
    fn test_shuffle_resets_index_and_leaves_deck_order() {
        let mut store = DeckStore::new(MemoryStarStorage::new());
        store.load(&deck_json(20)).unwrap();
        store.navigate(Direction::Next);

        let mut rng = StdRng::seed_from_u64(7);
        assert!(store.shuffle_with(&mut rng));

        assert_eq!(store.current_index(), 0);
        let deck_ids: Vec<String> = store.deck().iter().map(|c| c.id.clone()).collect();
        assert_eq!(deck_ids, (0..20).map(|i| i.to_string()).collect::<Vec<_>>());

        let mut shuffled = ids(&store);
        shuffled.sort();
        let mut expected = deck_ids.clone();
        expected.sort();
        assert_eq!(shuffled, expected);

        store.set_filter(false);
        assert_eq!(ids(&store), deck_ids);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut first_counts = [0usize; 3];

        for _ in 0..3000 {
            let mut store = DeckStore::new(MemoryStarStorage::new());
            store.load(&deck_json(3)).unwrap();
            store.shuffle_with(&mut rng);

            let first: usize = store.current_card().unwrap().id.parse().unwrap();
            first_counts[first] += 1;
        }

        for count in first_counts {
            assert!((800..1200).contains(&count), "skewed first-card counts: {first_counts:?}");
        }
    }

    #[derive(Debug, Clone)]
    enum Op {
        Load(usize),
        LoadInvalid,
        Filter(bool),
        Next,
        Prev,
        Shuffle,
        Star,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..6).prop_map(Op::Load),
            Just(Op::LoadInvalid),
            any::<bool>().prop_map(Op::Filter),
            Just(Op::Next),
            Just(Op::Prev),
            Just(Op::Shuffle),
            Just(Op::Star),
        ]
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_view(ops in prop::collection::vec(op_strategy(), 1..40), seed in any::<u64>()) {
            let mut store = DeckStore::new(MemoryStarStorage::new());
            let mut rng = StdRng::seed_from_u64(seed);

            for op in ops {
                match op {
                    Op::Load(n) => { store.load(&deck_json(n)).unwrap(); }
                    Op::LoadInvalid => { let _ = store.load("{"); }
                    Op::Filter(on) => store.set_filter(on),
                    Op::Next => { store.navigate(Direction::Next); }
                    Op::Prev => { store.navigate(Direction::Prev); }
                    Op::Shuffle => { store.shuffle_with(&mut rng); }
                    Op::Star => { store.toggle_star().unwrap(); }
                }

                if store.displayed_len() > 0 {
                    prop_assert!(store.current_index() < store.displayed_len());
                    prop_assert!(store.current_card().is_some());
                } else {
                    prop_assert_eq!(store.current_index(), 0);
                    prop_assert_eq!(store.state(), DeckState::Empty);
                }

                if store.show_starred_only() {
                    for card in store.displayed() {
                        prop_assert!(store.is_starred(&card.id));
                    }
                }
            }
        }

        #[test]
        fn prop_filter_off_restores_deck(n in 0usize..12, starred in prop::collection::vec(0usize..12, 0..6), seed in any::<u64>()) {
            let storage = MemoryStarStorage::with_ids(starred.iter().map(|i| i.to_string()));
            let mut store = DeckStore::new(storage);
            let mut rng = StdRng::seed_from_u64(seed);

            store.load(&deck_json(n)).unwrap();
            store.set_filter(true);
            store.shuffle_with(&mut rng);
            store.set_filter(false);

            let deck_ids: Vec<String> = store.deck().iter().map(|c| c.id.clone()).collect();
            prop_assert_eq!(ids(&store), deck_ids);
        }

        #[test]
        fn prop_shuffle_is_permutation(n in 2usize..30, seed in any::<u64>()) {
            let mut store = DeckStore::new(MemoryStarStorage::new());
            let mut rng = StdRng::seed_from_u64(seed);
            store.load(&deck_json(n)).unwrap();

            let mut before = ids(&store);
            prop_assert!(store.shuffle_with(&mut rng));
            let mut after = ids(&store);

            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
            prop_assert_eq!(store.current_index(), 0);
        }
    }
}
