//! Builds balanced journal entries from payment events.

use rust_decimal::Decimal;
use strata_shared::config::AccountingConfig;
use strata_shared::types::StaffId;

use crate::accounts::{ACCOUNT_CASH, ACCOUNT_REVENUE_SERVICE, PaymentAccountPolicy, account_name};
use crate::fiscal::fiscal_period;

use super::error::JournalError;
use super::types::{
    DraftEntry, DraftLine, EntryStatus, EntryType, ReceiptEvent, ReferenceType, VoucherEvent,
};
use super::validation::validate_entry;

/// Turns receipts and vouchers into balanced, validated draft entries.
///
/// The builder is pure: it performs no I/O and fails before anything is
/// written. When accounting integration is disabled, both build methods
/// return `Ok(None)`.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    config: AccountingConfig,
    policy: PaymentAccountPolicy,
}

impl EntryBuilder {
    /// Creates a builder with the standard payment-account policy.
    #[must_use]
    pub fn new(config: AccountingConfig) -> Self {
        Self {
            config,
            policy: PaymentAccountPolicy::default(),
        }
    }

    /// Creates a builder with a custom payment-account policy.
    #[must_use]
    pub const fn with_policy(config: AccountingConfig, policy: PaymentAccountPolicy) -> Self {
        Self { config, policy }
    }

    /// Whether accounting integration is enabled for this builder.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Builds the revenue entry for a confirmed payment receipt.
    ///
    /// Debits the cash/bank account the payment method maps to, credits
    /// service revenue. Both lines carry the receipt's apartment.
    pub fn build_from_receipt(
        &self,
        event: &ReceiptEvent,
        operator: Option<StaffId>,
    ) -> Result<Option<DraftEntry>, JournalError> {
        if !self.config.enabled {
            return Ok(None);
        }

        let debit_account = self.policy.resolve(&event.method_code).ok_or_else(|| {
            JournalError::PaymentMethodUnmapped {
                method_code: event.method_code.clone(),
            }
        })?;

        let apartment_label = event.apartment_number.as_deref().unwrap_or("N/A");
        let lines = vec![
            debit_line(
                1,
                debit_account,
                format!("Payment received via {}", event.method_name),
                event.amount,
                event.apartment_id,
            ),
            credit_line(
                2,
                ACCOUNT_REVENUE_SERVICE,
                format!("Service revenue - Invoice {}", event.invoice_no),
                event.amount,
                event.apartment_id,
            ),
        ];

        let entry = DraftEntry {
            entry_id: strata_shared::types::EntryId::new(),
            entry_type: EntryType::Receipt,
            entry_date: event.received_date,
            fiscal_period: fiscal_period(event.received_date),
            reference_type: ReferenceType::Receipt,
            reference_id: event.receipt_id.into_inner(),
            description: format!(
                "Receipt {} - Invoice {} - Apartment {}",
                event.receipt_no, event.invoice_no, apartment_label
            ),
            status: EntryStatus::Posted,
            created_by: operator,
            posted_by: operator,
            lines,
        };

        validate_entry(&entry)?;
        Ok(Some(entry))
    }

    /// Builds the expense entry for an approved disbursement voucher.
    ///
    /// One debit line per voucher item on the item's expense account,
    /// then a single credit to cash for the voucher total. The item
    /// amounts must sum to the voucher total.
    pub fn build_from_voucher(
        &self,
        event: &VoucherEvent,
        operator: Option<StaffId>,
    ) -> Result<Option<DraftEntry>, JournalError> {
        if !self.config.enabled {
            return Ok(None);
        }

        if event.items.is_empty() {
            return Err(JournalError::EmptyVoucher {
                voucher_number: event.voucher_number.clone(),
            });
        }

        let items_total: Decimal = event.items.iter().map(|item| item.amount).sum();
        if items_total != event.total_amount {
            return Err(JournalError::ItemTotalMismatch {
                items_total,
                voucher_total: event.total_amount,
            });
        }

        let mut lines = Vec::with_capacity(event.items.len() + 1);
        for (index, item) in event.items.iter().enumerate() {
            let account = item.category.account_code();
            let description = item
                .description
                .clone()
                .unwrap_or_else(|| account_name(account));
            let line_number = i32::try_from(index).unwrap_or(i32::MAX - 1) + 1;
            lines.push(debit_line(
                line_number,
                account,
                description,
                item.amount,
                item.apartment_id,
            ));
        }
        let credit_number = i32::try_from(event.items.len()).unwrap_or(i32::MAX - 1) + 1;
        lines.push(credit_line(
            credit_number,
            ACCOUNT_CASH,
            format!("Cash disbursement - {}", event.voucher_number),
            event.total_amount,
            None,
        ));

        let entry = DraftEntry {
            entry_id: strata_shared::types::EntryId::new(),
            entry_type: EntryType::Payment,
            entry_date: event.date,
            fiscal_period: fiscal_period(event.date),
            reference_type: ReferenceType::Voucher,
            reference_id: event.voucher_id.into_inner(),
            description: format!("Voucher {} - {}", event.voucher_number, event.description),
            status: EntryStatus::Posted,
            created_by: operator,
            posted_by: operator,
            lines,
        };

        validate_entry(&entry)?;
        Ok(Some(entry))
    }
}

fn debit_line(
    line_number: i32,
    account_code: &str,
    description: String,
    amount: Decimal,
    apartment_id: Option<strata_shared::types::ApartmentId>,
) -> DraftLine {
    DraftLine {
        line_id: strata_shared::types::LineId::new(),
        line_number,
        account_code: account_code.to_string(),
        description,
        debit_amount: amount,
        credit_amount: Decimal::ZERO,
        apartment_id,
    }
}

fn credit_line(
    line_number: i32,
    account_code: &str,
    description: String,
    amount: Decimal,
    apartment_id: Option<strata_shared::types::ApartmentId>,
) -> DraftLine {
    DraftLine {
        line_id: strata_shared::types::LineId::new(),
        line_number,
        account_code: account_code.to_string(),
        description,
        debit_amount: Decimal::ZERO,
        credit_amount: amount,
        apartment_id,
    }
}
