//! Behavioral invariants of type-locked cells, checked over generated values.

use crate::common::*;
use proptest::prelude::*;

fn number() -> impl Strategy<Value = Value> {
    (-1.0e9f64..1.0e9).prop_map(Value::Number)
}

fn string() -> impl Strategy<Value = Value> {
    "[a-z]{0,8}".prop_map(Value::from)
}

fn boolean() -> impl Strategy<Value = Value> {
    any::<bool>().prop_map(Value::Bool)
}

fn array() -> impl Strategy<Value = Value> {
    prop::collection::vec(number(), 0..4).prop_map(Value::Array)
}

fn object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z]{1,4}", number(), 0..4)
        .prop_map(|fields| Value::Object(fields.into_iter().collect()))
}

fn existing() -> impl Strategy<Value = Value> {
    prop_oneof![number(), string(), boolean(), array(), object()]
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        8 => existing(),
        1 => Just(Value::Null),
        1 => Just(Value::Undefined),
    ]
}

fn same_kind_pair() -> impl Strategy<Value = (Value, Value)> {
    prop_oneof![
        (number(), number()),
        (string(), string()),
        (boolean(), boolean()),
        (array(), array()),
        (object(), object()),
    ]
}

proptest! {
    #[test]
    fn get_returns_initial_value(initial in existing()) {
        let cell = quiet_factory().create_cell(initial.clone()).unwrap();
        prop_assert_eq!(cell.get(), initial.clone());
        prop_assert_eq!(cell.tag(), &initial.type_tag());
    }

    #[test]
    fn same_type_write_is_accepted((initial, candidate) in same_kind_pair()) {
        let cell = quiet_factory().create_cell(initial.clone()).unwrap();
        let outcome = cell.set(candidate.clone());

        prop_assert!(outcome.is_accepted());
        if candidate == initial {
            prop_assert_eq!(outcome, SetOutcome::Unchanged);
        } else {
            prop_assert_eq!(outcome, SetOutcome::Updated);
        }
        prop_assert_eq!(cell.get(), candidate);
    }

    #[test]
    fn wrong_type_write_keeps_old_value(initial in existing(), candidate in any_value()) {
        prop_assume!(initial.type_tag() != candidate.type_tag());
        let cell = quiet_factory().create_cell(initial.clone()).unwrap();

        let outcome = cell.set(candidate.clone());
        prop_assert_eq!(
            outcome,
            SetOutcome::Rejected {
                expected: initial.type_tag(),
                actual: candidate.type_tag(),
            }
        );
        prop_assert_eq!(cell.get(), initial);
    }

    #[test]
    fn repeated_write_is_idempotent((initial, candidate) in same_kind_pair()) {
        let once = quiet_factory().create_cell(initial.clone()).unwrap();
        let twice = quiet_factory().create_cell(initial).unwrap();

        once.set(candidate.clone());
        twice.set(candidate.clone());
        prop_assert_eq!(twice.set(candidate), SetOutcome::Unchanged);
        prop_assert_eq!(once.get(), twice.get());
    }

    #[test]
    fn tag_never_changes(initial in existing(), writes in prop::collection::vec(any_value(), 0..16)) {
        let cell = quiet_factory().create_cell(initial.clone()).unwrap();
        let tag = cell.tag().clone();
        for candidate in writes {
            cell.set(candidate);
            prop_assert_eq!(cell.tag(), &tag);
            prop_assert_eq!(cell.get().type_tag(), tag.clone());
        }
    }
}

#[test]
fn create_from_null_fails() {
    let err = quiet_factory().create_cell(Value::Null).unwrap_err();
    assert_eq!(err, typelock::Error::InvalidState { tag: TypeTag::NULL });
}

#[test]
fn create_from_undefined_fails() {
    let err = typelock::create_cell(Value::Undefined).unwrap_err();
    assert!(matches!(err, typelock::Error::InvalidState { ref tag } if tag.as_str() == "undefined"));
    assert!(err.to_string().contains("undefined"));
}
