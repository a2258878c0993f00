#![cfg(feature = "serde-derive")]

use cauchy_core::{Grid, GridError};
use cauchy_oscillator::{Config, ConfigError, GridSpec};

#[test]
fn reference_run_from_toml() {
    let text = r#"
        capacitance = 1.0
        inductance = 1.0
        initial_voltage = 1.0
        initial_current = 0.0
        t_start = 0.0
        t_end = 100.0
        grid = { step = 0.1 }
    "#;

    let config: Config = toml::from_str(text).expect("valid TOML");

    assert_eq!(config, Config::default());
    assert_eq!(config.grid().expect("valid grid").size(), 1001);
}

#[test]
fn node_count_from_toml() {
    let text = r#"
        capacitance = 2.0
        inductance = 0.5
        initial_voltage = 4.0
        initial_current = 0.0
        t_start = 0.0
        t_end = 10.0

        [grid]
        nodes = 35
    "#;

    let config: Config = toml::from_str(text).expect("valid TOML");

    assert_eq!(config.grid, GridSpec::Nodes(35));
    let circuit = config.circuit().expect("valid circuit");
    assert_eq!(circuit.initial_charge, 2.0);
    assert_eq!(circuit.params().omega2, 4.0);
}

#[test]
fn default_round_trips() {
    let text = toml::to_string(&Config::default()).expect("serializable");
    let config: Config = toml::from_str(&text).expect("valid TOML");
    assert_eq!(config, Config::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let text = r#"
        capacitance = 1.0
        inductance = 1.0
        initial_voltage = 1.0
        initial_current = 0.0
        t_start = 0.0
        t_end = 1.0
        grid = { nodes = 11 }
        resistance = 5.0
    "#;

    assert!(toml::from_str::<Config>(text).is_err());
}

#[test]
fn parsed_but_invalid_values_fail_validation() {
    let text = r#"
        capacitance = 1.0
        inductance = -1.0
        initial_voltage = 1.0
        initial_current = 0.0
        t_start = 0.0
        t_end = 1.0
        grid = { nodes = 11 }
    "#;

    let config: Config = toml::from_str(text).expect("valid TOML");

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositive {
            name: "inductance",
            ..
        })
    ));
}

#[test]
fn oversized_node_count_is_a_validation_error() {
    let text = r#"
        capacitance = 1.0
        inductance = 1.0
        initial_voltage = 1.0
        initial_current = 0.0
        t_start = 0.0
        t_end = 1.0
        grid = { nodes = 9223372036854775807 }
    "#;

    let config: Config = toml::from_str(text).expect("valid TOML");

    assert!(matches!(
        config.validate(),
        Err(ConfigError::Grid(GridError::TooManyNodes { .. }))
    ));
}
