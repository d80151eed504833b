//! # Receipt Composer
//!
//! Turns one [`ReceiptSummary`] into a complete command transcript. The
//! layout is a fixed script, top to bottom:
//!
//! ```text
//!            <title>
//!   2026年10月18日(日) 14時05分09秒
//!
//! 店舗名: Shibuya
//!  担当 : Sato
//! ------------------------
//!   Pencil            100円
//!   Notebook          250円
//! ------------------------
//!   ごうけい          350円
//!   あずかり         1000円
//!    おつり           650円
//! ------------------------
//!
//!      <fold instructions>
//!
//!        ||||||||||||||
//!          01000001
//! ```
//!
//! The composer validates nothing. Negative change, an empty item list or
//! missing names all produce a well-formed transcript; rejecting them is
//! up to whoever builds the summary.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::encoder::CommandEncoder;
use crate::encoding::TextEncoding;
use crate::error::UriageError;
use crate::protocol::text::{self, Alignment};

/// Print position of every row label, in dots.
pub const KEY_POSITION: u16 = 12;

/// Right anchor of the value column before subtracting its width.
pub const VALUE_ANCHOR: i64 = 226;

/// Width of one value character, in dots.
pub const VALUE_CELL_WIDTH: i64 = 12;

/// Unit printed after every amount.
pub const CURRENCY_SUFFIX: &str = "円";

pub const TOTAL_LABEL: &str = "ごうけい";
pub const DEPOSIT_LABEL: &str = "あずかり";
pub const CHANGE_LABEL: &str = " おつり ";

/// Printed centered under the totals block.
pub const FOLD_NOTICE: [&str; 2] = ["レシートは二つ折りにして", "お持ち帰りください"];

const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

// ============================================================================
// DATA MODEL
// ============================================================================

/// One purchased item. Repeated purchases are repeated entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLineItem {
    pub name: String,
    /// Whole yen
    pub price: i64,
}

impl ReceiptLineItem {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Everything printed on one sale receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptSummary {
    pub items: Vec<ReceiptLineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,
    pub deposit: i64,
    /// Printed as a CODE39 barcode, framing characters included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub created_at: NaiveDateTime,
}

impl ReceiptSummary {
    /// Create a summary with no store, staff or transaction id.
    pub fn new(items: Vec<ReceiptLineItem>, deposit: i64, created_at: NaiveDateTime) -> Self {
        Self {
            items,
            store_name: None,
            staff_name: None,
            deposit,
            transaction_id: None,
            created_at,
        }
    }

    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    pub fn staff_name(mut self, name: impl Into<String>) -> Self {
        self.staff_name = Some(name.into());
        self
    }

    pub fn transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }

    /// Sum of all item prices.
    pub fn total(&self) -> i64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// `deposit - total`, not clamped. Negative when the deposit falls
    /// short of the total.
    pub fn change(&self) -> i64 {
        self.deposit - self.total()
    }
}

// ============================================================================
// COMPOSER
// ============================================================================

/// Compose `summary` into a fresh session and return its bytes.
///
/// The transcript starts with the session preamble and ends after the
/// barcode block (or the fold notice when there is no transaction id).
/// No cut is appended; see [`crate::printer::Printer`] for the full job.
///
/// ## Errors
///
/// [`UriageError::Encoding`] if any text is unmappable in `encoding`,
/// [`UriageError::InvalidCommand`] if an amount is too wide to lay out.
pub fn compose(summary: &ReceiptSummary, encoding: TextEncoding) -> Result<Vec<u8>, UriageError> {
    let mut encoder = CommandEncoder::new(encoding);
    compose_into(&mut encoder, summary)?;
    Ok(encoder.into_bytes())
}

/// Script an existing encoder session from `summary`.
pub fn compose_into(
    encoder: &mut CommandEncoder,
    summary: &ReceiptSummary,
) -> Result<(), UriageError> {
    // Header
    encoder.set_gravity(Alignment::Center);
    encoder.write_raw(&text::title());
    encoder.write_text_line(&format_timestamp(&summary.created_at))?;
    encoder.new_line();

    encoder.set_gravity(Alignment::Left);
    if let Some(store) = summary.store_name.as_deref().filter(|s| !s.is_empty()) {
        encoder.write_text_line(&format!("店舗名: {}", store))?;
    }
    if let Some(staff) = summary.staff_name.as_deref().filter(|s| !s.is_empty()) {
        encoder.write_text_line(&format!(" 担当 : {}", staff))?;
    }
    encoder.draw_line()?;

    // Items
    for item in &summary.items {
        key_value_row(encoder, &item.name, item.price)?;
    }
    encoder.draw_line()?;

    // Totals
    key_value_row(encoder, TOTAL_LABEL, summary.total())?;
    key_value_row(encoder, DEPOSIT_LABEL, summary.deposit)?;
    key_value_row(encoder, CHANGE_LABEL, summary.change())?;
    encoder.draw_line()?;

    // Footer
    encoder.set_gravity(Alignment::Center);
    encoder.new_line();
    for line in FOLD_NOTICE {
        encoder.write_text_line(line)?;
    }
    encoder.new_line();

    if let Some(id) = &summary.transaction_id {
        encoder.draw_barcode(id)?;
    }

    Ok(())
}

/// Label at [`KEY_POSITION`], amount at [`value_position`], line feed.
pub fn key_value_row(
    encoder: &mut CommandEncoder,
    key: &str,
    value: i64,
) -> Result<(), UriageError> {
    let position = value_position(value)?;

    encoder.set_print_position(KEY_POSITION);
    encoder.write_text(key)?;
    encoder.set_print_position(u16::from(position));
    encoder.write_text(&format!("{}{}", value, CURRENCY_SUFFIX))?;
    encoder.new_line();
    Ok(())
}

/// Number of characters `value` prints as.
///
/// Decimal digit count, with `0` counted as one digit. For negative
/// amounts (only change can be one) this extends the digit count with one
/// more column for the leading minus sign.
pub fn value_order(value: i64) -> i64 {
    let digits = value
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |exp| i64::from(exp) + 1);
    if value < 0 { digits + 1 } else { digits }
}

/// Print position of the value column: `226 - order * 12`.
///
/// Wider values start further left so every amount ends on the same edge.
///
/// Negative amounts are an extension of the digit-count formula: see
/// [`value_order`], which adds one column for the minus sign.
///
/// ## Errors
///
/// [`UriageError::InvalidCommand`] if the value is too wide for the
/// single-byte offset (19 or more columns).
pub fn value_position(value: i64) -> Result<u8, UriageError> {
    let order = value_order(value);
    u8::try_from(VALUE_ANCHOR - order * VALUE_CELL_WIDTH).map_err(|_| {
        UriageError::InvalidCommand(format!("Amount {} is too wide to lay out", value))
    })
}

/// `YYYY年MM月DD日(ddd) HH時mm分ss秒` with a Japanese weekday.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    let weekday = WEEKDAYS[at.weekday().num_days_from_sunday() as usize];
    format!(
        "{:04}年{:02}月{:02}日({}) {:02}時{:02}分{:02}秒",
        at.year(),
        at.month(),
        at.day(),
        weekday,
        at.hour(),
        at.minute(),
        at.second()
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    fn sjis(text: &str) -> Vec<u8> {
        TextEncoding::shift_jis().encode(text).unwrap()
    }

    fn row_bytes(key: &str, value: i64) -> Vec<u8> {
        let mut enc = CommandEncoder::new(TextEncoding::shift_jis());
        key_value_row(&mut enc, key, value).unwrap();
        enc.build()[5..].to_vec()
    }

    #[test]
    fn test_total_and_change() {
        let summary = ReceiptSummary::new(
            vec![
                ReceiptLineItem::new("a", 120),
                ReceiptLineItem::new("b", 80),
                ReceiptLineItem::new("a", 120),
            ],
            500,
            at(),
        );
        assert_eq!(summary.total(), 320);
        assert_eq!(summary.change(), 180);
    }

    #[test]
    fn test_short_deposit_gives_negative_change() {
        let summary = ReceiptSummary::new(vec![ReceiptLineItem::new("a", 500)], 300, at());
        assert_eq!(summary.change(), -200);

        let bytes = compose(&summary, TextEncoding::shift_jis()).unwrap();
        let change_row = row_bytes(CHANGE_LABEL, -200);
        assert!(bytes.windows(change_row.len()).any(|w| w == &change_row[..]));
    }

    #[test]
    fn test_empty_total_is_zero() {
        let summary = ReceiptSummary::new(vec![], 0, at());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.change(), 0);
    }

    #[test]
    fn test_value_order_boundaries() {
        assert_eq!(value_order(0), 1);
        assert_eq!(value_order(1), 1);
        assert_eq!(value_order(9), 1);
        assert_eq!(value_order(10), 2);
        assert_eq!(value_order(99), 2);
        assert_eq!(value_order(100), 3);
        assert_eq!(value_order(999_999), 6);
        assert_eq!(value_order(1_000_000), 7);
    }

    #[test]
    fn test_value_order_negative_counts_sign() {
        assert_eq!(value_order(-1), 2);
        assert_eq!(value_order(-200), 4);
    }

    #[test]
    fn test_value_position_boundaries() {
        for (value, expected) in [
            (0, 214),
            (1, 214),
            (9, 214),
            (10, 202),
            (99, 202),
            (100, 190),
            (999_999, 154),
        ] {
            assert_eq!(value_position(value).unwrap(), expected, "value {}", value);
        }
    }

    #[test]
    fn test_value_position_widest_values() {
        // 18 digits: 226 - 216
        assert_eq!(value_position(999_999_999_999_999_999).unwrap(), 10);
        // 19 digits no longer fit
        assert!(matches!(
            value_position(1_000_000_000_000_000_000),
            Err(UriageError::InvalidCommand(_))
        ));
        assert!(value_position(i64::MIN).is_err());
    }

    #[test]
    fn test_key_value_row_bytes() {
        let mut expected = vec![0x1B, 0x24, 12, 0];
        expected.extend(b"Pencil");
        expected.extend([0x1B, 0x24, 190, 0]);
        expected.extend(sjis("100円"));
        expected.push(0x0A);
        assert_eq!(row_bytes("Pencil", 100), expected);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&at()), "2026年10月18日(日) 14時05分09秒");
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(format_timestamp(&monday), "2026年01月05日(月) 09時00分00秒");
    }

    #[test]
    fn test_compose_header_and_names() {
        let summary = ReceiptSummary::new(vec![], 0, at())
            .store_name("渋谷店")
            .staff_name("佐藤");
        let bytes = compose(&summary, TextEncoding::shift_jis()).unwrap();

        let mut header = vec![0x1B, 0x40, 0x1B, 0x33, 0x28, 0x1B, 0x61, 0x01, 0x1C, 0x70, 0x01, 0x00];
        header.extend(sjis("2026年10月18日(日) 14時05分09秒"));
        header.extend([0x0A, 0x0A, 0x1B, 0x61, 0x00]);
        header.extend(sjis("店舗名: 渋谷店"));
        header.push(0x0A);
        header.extend(sjis(" 担当 : 佐藤"));
        header.push(0x0A);
        assert_eq!(&bytes[..header.len()], &header[..]);
    }

    #[test]
    fn test_empty_names_are_skipped() {
        let with_empty = ReceiptSummary::new(vec![], 0, at())
            .store_name("")
            .staff_name("");
        let without = ReceiptSummary::new(vec![], 0, at());
        assert_eq!(
            compose(&with_empty, TextEncoding::shift_jis()).unwrap(),
            compose(&without, TextEncoding::shift_jis()).unwrap()
        );
    }

    #[test]
    fn test_compose_without_transaction_ends_with_notice() {
        let summary = ReceiptSummary::new(vec![ReceiptLineItem::new("Pencil", 100)], 100, at());
        let bytes = compose(&summary, TextEncoding::shift_jis()).unwrap();

        let mut tail = vec![0x1B, 0x61, 0x01, 0x0A];
        tail.extend(sjis(FOLD_NOTICE[0]));
        tail.push(0x0A);
        tail.extend(sjis(FOLD_NOTICE[1]));
        tail.extend([0x0A, 0x0A]);
        assert!(bytes.ends_with(&tail));
    }

    #[test]
    fn test_compose_propagates_encoding_error() {
        let latin = TextEncoding::for_label("windows-1252").unwrap();
        let summary = ReceiptSummary::new(vec![], 0, at());
        assert!(matches!(
            compose(&summary, latin),
            Err(UriageError::Encoding(_))
        ));
    }

    #[test]
    fn test_summary_from_json() {
        let json = r#"{
            "items": [{"name": "Pencil", "price": 100}],
            "deposit": 100,
            "transaction_id": "A01000001A",
            "created_at": "2026-10-18T14:05:09"
        }"#;
        let summary: ReceiptSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.items, vec![ReceiptLineItem::new("Pencil", 100)]);
        assert_eq!(summary.store_name, None);
        assert_eq!(summary.transaction_id.as_deref(), Some("A01000001A"));
        assert_eq!(summary.created_at, at());
    }
}
