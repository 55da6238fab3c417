//! Config files on disk feeding a working pipeline.

mod common;

use scansort::config::load_config;
use scansort::ConfigError;

use common::TestHarness;

#[test]
fn test_written_config_round_trips() {
    let harness = TestHarness::new();
    let config = harness.config_with_senders(&[("Hausverwaltung Meier", r"hausverwaltung\s+meier")]);
    let path = harness.write_config(&config);

    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_configured_sender_names_the_file() {
    let harness = TestHarness::new();
    let path = harness.write_config(
        &harness.config_with_senders(&[("Hausverwaltung Meier", r"hausverwaltung\s+meier")]),
    );
    let config = load_config(&path).unwrap();
    let source = harness.write_text_input(
        "scan.txt",
        "Hausverwaltung  Meier\nNebenkostenabrechnung 2023\nNachzahlung 120,50 EUR\n01.06.2024",
    );

    let result = harness.pipeline_from(&config).process_document(&source);

    assert!(result.success, "{:?}", result.error);
    assert_eq!(
        harness.filed_names("Invoices"),
        vec!["01.06.2024 - Hausverwaltung Meier - 120,50EUR - Invoice - Invoices.txt"]
    );
}

#[test]
fn test_config_file_with_bad_pattern() {
    let harness = TestHarness::new();
    let path = harness.write_config(&harness.config_with_senders(&[("Broken", "[a-")]));

    match load_config(&path) {
        Err(ConfigError::InvalidPattern { name, .. }) => assert_eq!(name, "Broken"),
        other => panic!("Expected InvalidPattern error, got {:?}", other),
    }
}

#[test]
fn test_configured_sender_pattern_with_capitals_matches() {
    let harness = TestHarness::new();
    let path = harness.write_config(&harness.config_with_senders(&[("Meier", r"Meier GmbH")]));
    let config = load_config(&path).unwrap();
    let source = harness.write_text_input("scan.txt", "Meier GmbH\nMietvertrag vom 02.05.2024");

    let result = harness.pipeline_from(&config).process_document(&source);

    assert!(result.success, "{:?}", result.error);
    assert_eq!(
        harness.filed_names("Contracts"),
        vec!["02.05.2024 - Meier - Contract - Contracts.txt"]
    );
}
