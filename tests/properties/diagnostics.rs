//! Rejected writes are reported through `tracing`, not through errors.

use crate::common::*;
use serde_json::json;
use std::sync::Arc;

#[test]
fn rejection_logs_a_warning() {
    let logs = CapturedLogs::default();
    let factory = PropertyFactory::default();

    let outcome = logs.capture(|| {
        let cell = factory.create_cell(Value::from(1)).unwrap();
        cell.set(Value::from("y"))
    });

    assert!(outcome.is_rejected());
    let output = logs.contents();
    assert!(output.contains("WARN"), "missing level in: {output}");
    assert!(output.contains("Cannot change property type Number with String"));
    assert!(output.contains("typelock::cell"));
}

#[test]
fn accepted_writes_do_not_warn() {
    let logs = CapturedLogs::default();
    let factory = PropertyFactory::default();

    logs.capture(|| {
        let cell = factory.create_cell(Value::from(1)).unwrap();
        cell.set(Value::from(2));
        cell.set(Value::from(2));
    });

    assert!(!logs.contents().contains("WARN"));
}

#[test]
fn quiet_config_suppresses_rejection_log() {
    let logs = CapturedLogs::default();

    let outcome = logs.capture(|| {
        let cell = quiet_factory().create_cell(Value::from(true)).unwrap();
        cell.set(Value::from(0))
    });

    assert_eq!(
        outcome,
        SetOutcome::Rejected {
            expected: TypeTag::BOOLEAN,
            actual: TypeTag::NUMBER,
        }
    );
    assert!(!logs.contents().contains("Cannot change property type"));
}

#[test]
fn property_writes_carry_the_property_name() {
    let logs = CapturedLogs::default();
    let builder = PropertySetBuilder::new(PropertyFactory::new(
        Arc::new(PredicateRegistry::standard()),
        FactoryConfig::default(),
    ));

    logs.capture(|| {
        let props = builder.build(&json_values(json!({"width": 10}))).unwrap();
        props.set("width", "wide").unwrap();
    });

    let output = logs.contents();
    assert!(output.contains("Installing properties"));
    assert!(output.contains("set_property"));
    assert!(output.contains("width"));
    assert!(output.contains("Cannot change property type Number with String"));
}
