//! FilingEngine behaviour that needs real directories and several threads.

mod common;

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use scansort::{Category, StorageError};

use common::TestHarness;

#[test]
fn test_concurrent_filers_never_share_a_name() {
    let harness = TestHarness::new();
    let engine = Arc::new(harness.filing());
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let sources: Vec<_> = (0..threads)
        .map(|i| harness.write_input(&format!("scan_{}.pdf", i), format!("doc {}", i).as_bytes()))
        .collect();

    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| {
            let engine = Arc::clone(&engine);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                engine
                    .file_document(&source, Category::Invoices, "01.01.2024 - Amazon - Invoices")
                    .unwrap()
            })
        })
        .collect();

    let destinations: HashSet<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().destination)
        .collect();

    assert_eq!(destinations.len(), threads);
    assert_eq!(harness.filed_names("Invoices").len(), threads);

    // Every original content survives exactly once.
    let mut contents: Vec<String> = destinations
        .iter()
        .map(|p| std::fs::read_to_string(p).unwrap())
        .collect();
    contents.sort();
    let mut expected: Vec<String> = (0..threads).map(|i| format!("doc {}", i)).collect();
    expected.sort();
    assert_eq!(contents, expected);
}

#[test]
fn test_existing_files_are_never_touched() {
    let harness = TestHarness::new();
    let engine = harness.filing();
    let dir = engine.category_dir(Category::Other);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("Name.pdf"), b"original").unwrap();
    std::fs::write(dir.join("Name (1).pdf"), b"original 1").unwrap();

    let source = harness.write_input("new.pdf", b"new");
    let decision = engine.file_document(&source, Category::Other, "Name").unwrap();

    assert_eq!(decision.destination, dir.join("Name (2).pdf"));
    assert_eq!(std::fs::read(dir.join("Name.pdf")).unwrap(), b"original");
    assert_eq!(std::fs::read(dir.join("Name (1).pdf")).unwrap(), b"original 1");
}

#[test]
fn test_reserved_characters_never_reach_the_disk() {
    let harness = TestHarness::new();
    let config = harness.config_with_senders(&[("A/B:C", r"abc\s+gmbh")]);
    let source = harness.write_text_input("scan.txt", "ABC GmbH 07.07.2023");

    let result = harness.pipeline_from(&config).process_document(&source);

    assert!(result.success, "{:?}", result.error);
    assert_eq!(
        harness.filed_names("Other"),
        vec!["07.07.2023 - ABC - Other.txt"]
    );
}

#[test]
fn test_refile_round_trip() {
    let harness = TestHarness::new();
    let engine = harness.filing();
    let source = harness.write_input("scan.pdf", b"doc");

    let filed = engine
        .file_document(&source, Category::Other, "01.01.2024 - Unknown - Other")
        .unwrap();
    let refiled = engine
        .update_category(&filed.destination, Category::Certificates)
        .unwrap();
    let back = engine
        .update_category(&refiled.destination, Category::Other)
        .unwrap();

    assert_eq!(back.destination, filed.destination);
    assert_eq!(std::fs::read(&back.destination).unwrap(), b"doc");
    assert!(harness.filed_names("Certificates").is_empty());
}

#[test]
fn test_refile_missing_document() {
    let harness = TestHarness::new();

    let result = harness.filing().update_category(
        &harness.output_dir.join("Other/gone.pdf"),
        Category::Invoices,
    );

    assert!(matches!(result, Err(StorageError::SourceNotFound(_))));
}
