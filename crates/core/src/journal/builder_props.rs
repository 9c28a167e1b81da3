//! Property tests: every entry the builder emits satisfies the
//! double-entry invariants, for arbitrary payment events.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use strata_shared::config::AccountingConfig;
use strata_shared::types::{ApartmentId, InvoiceId, ReceiptId, VoucherId};

use crate::accounts::ExpenseCategory;
use crate::fiscal::fiscal_period;
use crate::journal::builder::EntryBuilder;
use crate::journal::types::{ReceiptEvent, VoucherEvent, VoucherItem};
use crate::journal::validation::validate_entry;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    // Whole VND amounts, as billed in practice.
    (1i64..=1_000_000_000).prop_map(Decimal::from)
}

fn arb_method() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CASH".to_string()),
        Just("VIETQR".to_string()),
        Just("ONLINE_VIETQR".to_string()),
        Just("BANK_TRANSFER".to_string()),
        Just("MOMO".to_string()),
        Just("ZALOPAY".to_string()),
        Just("UNKNOWN_RAIL".to_string()),
    ]
}

fn arb_receipt() -> impl Strategy<Value = ReceiptEvent> {
    (arb_date(), arb_amount(), arb_method(), any::<bool>()).prop_map(
        |(received_date, amount, method_code, with_apartment)| ReceiptEvent {
            receipt_id: ReceiptId::new(),
            receipt_no: "RC-0001".to_string(),
            amount,
            received_date,
            method_code,
            method_name: "rail".to_string(),
            invoice_id: InvoiceId::new(),
            invoice_no: "INV-0001".to_string(),
            apartment_id: with_apartment.then(ApartmentId::new),
            apartment_number: with_apartment.then(|| "A-101".to_string()),
            created_by: None,
        },
    )
}

fn arb_category() -> impl Strategy<Value = ExpenseCategory> {
    prop_oneof![Just(ExpenseCategory::General), Just(ExpenseCategory::Repair)]
}

fn arb_voucher() -> impl Strategy<Value = VoucherEvent> {
    (
        arb_date(),
        prop::collection::vec((arb_amount(), arb_category()), 1..8),
    )
        .prop_map(|(date, raw_items)| {
            let items: Vec<VoucherItem> = raw_items
                .into_iter()
                .map(|(amount, category)| VoucherItem {
                    amount,
                    description: None,
                    category,
                    apartment_id: None,
                })
                .collect();
            let total_amount = items.iter().map(|i| i.amount).sum();
            VoucherEvent {
                voucher_id: VoucherId::new(),
                voucher_number: "PC-0001".to_string(),
                date,
                description: "expense".to_string(),
                total_amount,
                items,
                created_by: None,
            }
        })
}

proptest! {
    #[test]
    fn receipt_entries_are_always_balanced(event in arb_receipt()) {
        let builder = EntryBuilder::new(AccountingConfig::on());
        let entry = builder.build_from_receipt(&event, None).unwrap().unwrap();

        prop_assert!(validate_entry(&entry).is_ok());
        prop_assert_eq!(entry.total_debit(), entry.total_credit());
        prop_assert!(entry.total_debit() > Decimal::ZERO);
        prop_assert_eq!(&entry.fiscal_period, &fiscal_period(event.received_date));
    }

    #[test]
    fn voucher_entries_are_always_balanced(event in arb_voucher()) {
        let builder = EntryBuilder::new(AccountingConfig::on());
        let entry = builder.build_from_voucher(&event, None).unwrap().unwrap();

        prop_assert!(validate_entry(&entry).is_ok());
        prop_assert_eq!(entry.total_debit(), event.total_amount);
        prop_assert_eq!(entry.total_credit(), event.total_amount);
        prop_assert_eq!(entry.lines.len(), event.items.len() + 1);
    }

    #[test]
    fn lines_carry_exactly_one_side(event in arb_voucher()) {
        let builder = EntryBuilder::new(AccountingConfig::on());
        let entry = builder.build_from_voucher(&event, None).unwrap().unwrap();

        for line in &entry.lines {
            let debit = line.debit_amount > Decimal::ZERO;
            let credit = line.credit_amount > Decimal::ZERO;
            prop_assert!(debit != credit);
        }
    }

    #[test]
    fn line_numbers_are_sequential_from_one(event in arb_voucher()) {
        let builder = EntryBuilder::new(AccountingConfig::on());
        let entry = builder.build_from_voucher(&event, None).unwrap().unwrap();

        for (index, line) in entry.lines.iter().enumerate() {
            prop_assert_eq!(line.line_number, i32::try_from(index).unwrap() + 1);
        }
    }

    #[test]
    fn disabled_config_never_builds(event in arb_receipt()) {
        let builder = EntryBuilder::new(AccountingConfig::off());
        prop_assert!(builder.build_from_receipt(&event, None).unwrap().is_none());
    }
}
