mod common;

use common::{Audit, Example, MemoryStore, RetentionPolicy};
use cqlmap::{
    prelude::*,
    quotes::{add_quotes, remove_quotes},
};
use proptest::prelude::*;

fn retention() -> impl Strategy<Value = Option<RetentionPolicy>> {
    prop_oneof![
        Just(None),
        Just(Some(RetentionPolicy::Source)),
        Just(Some(RetentionPolicy::Class)),
        Just(Some(RetentionPolicy::Runtime)),
    ]
}

prop_compose! {
    fn example()(
        user_rank in any::<i32>(),
        user_id in any::<u128>(),
        user_name in proptest::option::of("[a-zA-Z' ]{0,12}"),
        data in proptest::option::of(proptest::collection::vec(any::<u8>(), 0..16)),
        number in any::<i32>(),
        enable in any::<bool>(),
        retention_policy in retention(),
        created_at in any::<i64>(),
    ) -> Example {
        Example {
            user_rank,
            user_id: Uuid::from_u128(user_id),
            user_name,
            data,
            number,
            enable,
            retention_policy,
            audit: Audit { created_at: Timestamp::from_millis(created_at) },
            cached: None,
        }
    }
}

proptest! {
    #[test]
    fn store_round_trip_reproduces_entity(example in example()) {
        let session = Session::new(MemoryStore::keyed(&["user_rank", "user_id"]));

        session.insert(&example).unwrap();
        let stored = session.reload(Example::new(example.user_rank, example.user_id, "")).unwrap();

        prop_assert_eq!(stored, example);
    }

    #[test]
    fn quoting_is_normalising(name in "[a-zA-Z_][a-zA-Z0-9_]{0,16}") {
        let quoted = add_quotes(&name);

        prop_assert_eq!(remove_quotes(&quoted).unwrap(), name.clone());
        prop_assert_eq!(add_quotes(&remove_quotes(&quoted).unwrap()), add_quotes(&quoted));
    }

    #[test]
    fn one_ended_quoting_is_rejected(name in "[a-z]{1,8}") {
        let leading = format!("\"{name}");
        let trailing = format!("{name}\"");

        prop_assert!(remove_quotes(&leading).is_err());
        prop_assert!(remove_quotes(&trailing).is_err());
    }
}
