//! End-to-end runs of the real pipeline over text documents.
//!
//! Each case is a text body and the file name it must end up under.

mod common;

use scansort::Category;

use common::TestHarness;

struct TestCase {
    name: &'static str,
    text: &'static str,
    expected_category: Category,
    expected_file: &'static str,
}

const TEST_CASES: &[TestCase] = &[
    TestCase {
        name: "invoice_with_amount",
        text: "Rechnung Nr. 123 RWE Betrag 54,00 EUR vom 01.02.2023",
        expected_category: Category::Invoices,
        expected_file: "01.02.2023 - RWE - 54,00EUR - Invoice - Invoices.txt",
    },
    TestCase {
        name: "reminder_keeps_invoice_category",
        text: "Telekom Deutschland GmbH\nZahlungserinnerung\nOffener Betrag: 39,95 €\nBonn, 12.09.2023",
        expected_category: Category::Invoices,
        expected_file: "12.09.2023 - Telekom - 39,95EUR - Reminder - Invoices.txt",
    },
    TestCase {
        name: "contract_without_amount",
        text: "ALLIANZ Versicherungs-AG\nIhr Versicherungsvertrag, Laufzeit ab 1. 3. 2022",
        expected_category: Category::Contracts,
        expected_file: "01.03.2022 - Allianz - Contract - Contracts.txt",
    },
    TestCase {
        name: "certificate_iso_date",
        text: "Jobcenter Köln\nBescheinigung über den Leistungsbezug\nErstellt: 2021-11-30",
        expected_category: Category::Certificates,
        expected_file: "30.11.2021 - Jobcenter - Certificate - Certificates.txt",
    },
    TestCase {
        name: "two_digit_year",
        text: "Finanzamt Musterstadt, Bescheid vom 5.6.23",
        expected_category: Category::Other,
        expected_file: "05.06.2023 - Finanzamt - Other.txt",
    },
    TestCase {
        name: "german_umlaut_sender",
        text: "Bundesagentur für Arbeit\nNachweis der Arbeitssuche\n15/03/2023",
        expected_category: Category::Certificates,
        expected_file: "15.03.2023 - Bundesagentur für Arbeit - Certificates.txt",
    },
];

#[test]
fn test_all_cases() {
    for case in TEST_CASES {
        let harness = TestHarness::new();
        let source = harness.write_text_input("scan.txt", case.text);

        let result = harness.pipeline().process_document(&source);

        assert!(result.success, "{}: {:?}", case.name, result.error);
        assert_eq!(
            result.category,
            Some(case.expected_category),
            "{}: category",
            case.name
        );
        let expected = harness
            .output_dir
            .join(case.expected_category.label())
            .join(case.expected_file);
        assert_eq!(
            result.destination.as_deref(),
            Some(expected.as_path()),
            "{}: destination",
            case.name
        );
        assert!(expected.exists(), "{}: file missing", case.name);
        assert!(!source.exists(), "{}: source still present", case.name);
        assert_eq!(
            std::fs::read_to_string(&expected).unwrap(),
            case.text,
            "{}: content changed",
            case.name
        );
    }
}

#[test]
fn test_document_without_date_is_named_with_today() {
    let harness = TestHarness::new();
    let source = harness.write_text_input("note.txt", "Einladung zum Sommerfest");

    let result = harness.pipeline().process_document(&source);

    let name = result
        .destination
        .unwrap()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    assert!(name.ends_with(" - Unknown - Other.txt"), "unexpected name {}", name);
    let date = chrono::NaiveDate::parse_from_str(&name[..10], "%d.%m.%Y").unwrap();
    let today = chrono::Local::now().date_naive();
    assert!((today - date).num_days().abs() <= 1);
}

#[test]
fn test_batch_of_identical_documents_never_overwrites() {
    let harness = TestHarness::new();
    let pipeline = harness.pipeline();

    for i in 0..4 {
        let source = harness.write_text_input(&format!("scan_{}.txt", i), "Vertrag Vodafone 01.01.2024");
        assert!(pipeline.process_document(&source).success);
    }

    assert_eq!(
        harness.filed_names("Contracts"),
        vec![
            "01.01.2024 - Vodafone - Contract - Contracts (1).txt",
            "01.01.2024 - Vodafone - Contract - Contracts (2).txt",
            "01.01.2024 - Vodafone - Contract - Contracts (3).txt",
            "01.01.2024 - Vodafone - Contract - Contracts.txt",
        ]
    );
}

#[test]
fn test_unsupported_file_stays_in_input() {
    let harness = TestHarness::new();
    let source = harness.write_input("letter.docx", b"PK\x03\x04");

    let result = harness.pipeline().process_document(&source);

    assert!(!result.success);
    assert!(source.exists());
    assert!(!harness.output_dir.exists());
}

#[test]
fn test_image_with_ocr_disabled_stays_in_input() {
    let harness = TestHarness::new();
    let source = harness.write_input("scan.jpg", b"\xff\xd8\xff");

    let result = harness.pipeline().process_document(&source);

    assert!(!result.success);
    assert!(result.error.unwrap().contains("OCR"));
    assert!(source.exists());
}

#[test]
fn test_scan_then_process_empties_input() {
    let harness = TestHarness::new();
    harness.write_text_input("a.txt", "Rechnung Amazon 12,99 EUR 02.02.2024");
    harness.write_text_input("b.txt", "Mietvertrag 03.03.2024");
    harness.write_text_input("c.docx", "ignored");

    let pipeline = harness.pipeline();
    let jobs = scansort::DirectoryScanner::new(&harness.input_dir).scan().unwrap();
    assert_eq!(jobs.len(), 2);
    for job in jobs {
        assert!(pipeline.process_document(&job.source_path).success);
    }

    assert_eq!(
        harness.filed_names("Invoices"),
        vec!["02.02.2024 - Amazon - 12,99EUR - Invoice - Invoices.txt"]
    );
    assert_eq!(
        harness.filed_names("Contracts"),
        vec!["03.03.2024 - Unknown - Contract - Contracts.txt"]
    );
    assert!(harness.input_dir.join("c.docx").exists());
}
