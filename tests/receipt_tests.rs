//! # Receipt Tests
//!
//! End-to-end checks of composed receipt transcripts and of the full
//! print pipeline against a loopback listener.

use std::io::Read;
use std::net::TcpListener;
use std::thread;

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use uriage::receipt::{self, CHANGE_LABEL, DEPOSIT_LABEL, TOTAL_LABEL};
use uriage::{Printer, PrinterConfig, ReceiptLineItem, ReceiptSummary, TextEncoding};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn created_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn sjis(text: &str) -> Vec<u8> {
    TextEncoding::shift_jis().encode(text).unwrap()
}

/// Bytes of one key/value row as the composer lays it out.
fn row(key: &str, value: i64, position: u8) -> Vec<u8> {
    let mut out = vec![0x1B, 0x24, 12, 0];
    out.extend(sjis(key));
    out.extend([0x1B, 0x24, position, 0]);
    out.extend(sjis(&format!("{}円", value)));
    out.push(0x0A);
    out
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|window| *window == needle)
        .count()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    count(haystack, needle) > 0
}

fn compose(summary: &ReceiptSummary) -> Vec<u8> {
    receipt::compose(summary, TextEncoding::shift_jis()).unwrap()
}

// ============================================================================
// TRANSCRIPT TESTS
// ============================================================================

#[test]
fn test_session_starts_with_reset_and_spacing() {
    let bytes = compose(&ReceiptSummary::new(vec![], 0, created_at()));
    // Reset, line spacing, then the composer's first call (center)
    assert_eq!(
        &bytes[..8],
        &[0x1B, 0x40, 0x1B, 0x33, 0x28, 0x1B, 0x61, 0x01]
    );
}

#[test]
fn test_single_item_exact_change() {
    let summary = ReceiptSummary::new(vec![ReceiptLineItem::new("Pencil", 100)], 100, created_at());
    let bytes = compose(&summary);

    assert!(contains(&bytes, &row("Pencil", 100, 190)));
    assert!(contains(&bytes, &row(TOTAL_LABEL, 100, 190)));
    assert!(contains(&bytes, &row(DEPOSIT_LABEL, 100, 190)));
    assert!(contains(&bytes, &row(CHANGE_LABEL, 0, 214)));

    // No store, staff or barcode
    assert!(!contains(&bytes, &sjis("店舗名")));
    assert!(!contains(&bytes, &sjis("担当")));
    assert!(!contains(&bytes, &[0x1D, 0x6B, 0x45]));
}

#[test]
fn test_negative_change_is_printed_as_is() {
    let summary = ReceiptSummary::new(
        vec![
            ReceiptLineItem::new("Notebook", 300),
            ReceiptLineItem::new("Eraser", 200),
        ],
        300,
        created_at(),
    );
    assert_eq!(summary.change(), -200);

    let bytes = compose(&summary);
    assert!(contains(&bytes, &row(TOTAL_LABEL, 500, 190)));
    assert!(contains(&bytes, &row(DEPOSIT_LABEL, 300, 190)));
    assert!(contains(&bytes, &sjis("-200円")));
    assert!(contains(&bytes, &row(CHANGE_LABEL, -200, 178)));
}

#[test]
fn test_transaction_id_barcode_ends_transcript() {
    let summary = ReceiptSummary::new(vec![ReceiptLineItem::new("Pencil", 100)], 100, created_at())
        .transaction_id("A01000001A");
    let bytes = compose(&summary);

    let mut block = vec![
        0x1D, 0x68, 0x50, 0x1D, 0x67, 0x02, 0x1D, 0x48, 0x00, 0x1D, 0x6B, 0x45, 10,
    ];
    block.extend(b"A01000001A");
    block.extend(b"01000001");
    block.push(0x0A);
    assert!(bytes.ends_with(&block));
}

#[test]
fn test_total_row_matches_item_sum() {
    let prices = [0, 5, 98, 1_200, 45_000];
    let items: Vec<_> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| ReceiptLineItem::new(format!("item{}", i), *price))
        .collect();
    let summary = ReceiptSummary::new(items, 50_000, created_at());
    assert_eq!(summary.total(), prices.iter().sum::<i64>());

    let bytes = compose(&summary);
    // 46303 has five digits: 226 - 60
    assert!(contains(&bytes, &row(TOTAL_LABEL, 46_303, 166)));
    for (i, price) in prices.iter().enumerate() {
        let position = receipt::value_position(*price).unwrap();
        assert!(contains(&bytes, &row(&format!("item{}", i), *price, position)));
    }
}

#[test]
fn test_repeated_items_are_repeated_rows() {
    let summary = ReceiptSummary::new(
        vec![
            ReceiptLineItem::new("Pencil", 100),
            ReceiptLineItem::new("Pencil", 100),
        ],
        200,
        created_at(),
    );
    let bytes = compose(&summary);
    assert_eq!(count(&bytes, &row("Pencil", 100, 190)), 2);
    assert!(contains(&bytes, &row(TOTAL_LABEL, 200, 190)));
}

#[test]
fn test_three_horizontal_rules() {
    let bytes = compose(&ReceiptSummary::new(vec![], 0, created_at()));
    let mut rule = vec![b'-'; 24];
    rule.push(0x0A);
    assert_eq!(count(&bytes, &rule), 3);
}

#[test]
fn test_compose_is_deterministic() {
    let summary = ReceiptSummary::new(vec![ReceiptLineItem::new("Pencil", 100)], 100, created_at())
        .store_name("渋谷店")
        .staff_name("佐藤")
        .transaction_id("A01000001A");
    assert_eq!(compose(&summary), compose(&summary));
}

// ============================================================================
// PIPELINE TESTS
// ============================================================================

#[test]
fn test_printer_sends_rendered_job_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let device = thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut received = Vec::new();
        conn.read_to_end(&mut received).unwrap();
        received
    });

    let printer = Printer::new(PrinterConfig::new("127.0.0.1").with_port(port)).unwrap();
    let summary = ReceiptSummary::new(vec![ReceiptLineItem::new("Pencil", 100)], 100, created_at())
        .transaction_id("A01000001A");

    let expected = printer.render(&summary).unwrap();
    printer.print(&summary).unwrap();

    let received = device.join().unwrap();
    assert_eq!(received, expected);
    assert!(received.ends_with(&[0x1B, 0x64, 0x04, 0x1D, 0x56, 0x30, 0x00]));
}
