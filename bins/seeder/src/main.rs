//! Database seeder for Strata development and testing.
//!
//! Seeds a staff profile, a month of amenity bookings, and demo ledger
//! activity (receipts and vouchers posted through the journal) so the
//! general journal, income statement, and dashboard have data to show.
//!
//! Usage: cargo run --bin seeder
//!
//! The database connection comes from the layered configuration
//! (`config/*.toml` plus `STRATA__`-prefixed environment variables,
//! e.g. `STRATA__DATABASE__URL`).

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use strata_core::accounts::ExpenseCategory;
use strata_core::journal::{
    EntryBuilder, LedgerOutcome, ReceiptEvent, VoucherEvent, VoucherItem,
};
use strata_db::JournalRepository;
use strata_db::entities::{amenity_bookings, staff_profiles};
use strata_shared::config::{AccountingConfig, AppConfig};
use strata_shared::types::{ApartmentId, InvoiceId, ReceiptId, UserId, VoucherId};

/// Test user ID (consistent for all seeds)
const TEST_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Test staff profile ID (consistent for all seeds)
const TEST_STAFF_ID: &str = "00000000-0000-0000-0000-000000000002";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing so the journal's best-effort posting warnings
    // are visible while seeding.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strata=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().expect("Failed to load configuration");

    println!("Connecting to database...");
    let db = strata_db::connect(&config.database)
        .await
        .expect("Failed to connect to database");

    println!("Seeding staff profile...");
    seed_staff_profile(&db).await;

    println!("Seeding amenity bookings...");
    seed_amenity_bookings(&db).await;

    println!("Posting demo ledger activity...");
    seed_ledger_activity(&db).await;

    println!("Seeding complete!");
}

fn test_user_id() -> Uuid {
    Uuid::parse_str(TEST_USER_ID).unwrap()
}

fn test_staff_id() -> Uuid {
    Uuid::parse_str(TEST_STAFF_ID).unwrap()
}

/// Seeds the staff profile demo entries are attributed to.
async fn seed_staff_profile(db: &DatabaseConnection) {
    if staff_profiles::Entity::find_by_id(test_staff_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Staff profile already exists, skipping...");
        return;
    }

    let profile = staff_profiles::ActiveModel {
        id: Set(test_staff_id()),
        user_id: Set(test_user_id()),
        full_name: Set("Demo Accountant".to_string()),
        is_active: Set(true),
        created_at: Set(Utc::now().into()),
    };

    if let Err(e) = profile.insert(db).await {
        eprintln!("Failed to insert staff profile: {e}");
    } else {
        println!("  Created staff profile: Demo Accountant");
    }
}

/// Seeds paid amenity bookings spread across the current month.
async fn seed_amenity_bookings(db: &DatabaseConnection) {
    let today = Utc::now().date_naive();
    let bookings = [
        ("Community hall", 0, "COMPLETED", "PAID", 1_500_000),
        ("Tennis court", 3, "CONFIRMED", "PAID", 400_000),
        ("BBQ area", 7, "COMPLETED", "PAID", 650_000),
        ("Community hall", 10, "CANCELLED", "PAID", 1_500_000),
        ("Tennis court", 12, "CONFIRMED", "UNPAID", 400_000),
    ];

    let mut inserted = 0;
    for (name, days_ago, status, payment_status, price) in bookings {
        let booking = amenity_bookings::ActiveModel {
            id: Set(Uuid::new_v4()),
            amenity_name: Set(name.to_string()),
            apartment_id: Set(Some(Uuid::new_v4())),
            start_date: Set(today - Duration::days(days_ago)),
            total_price: Set(Decimal::from(price)),
            status: Set(status.to_string()),
            payment_status: Set(payment_status.to_string()),
            is_deleted: Set(false),
            created_at: Set(Utc::now().into()),
        };

        if let Err(e) = booking.insert(db).await {
            eprintln!("Failed to insert amenity booking: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} amenity bookings");
}

/// Posts demo receipts and vouchers through the journal so reports
/// have ledger data in the current and previous month.
async fn seed_ledger_activity(db: &DatabaseConnection) {
    let repo = JournalRepository::new(db.clone(), EntryBuilder::new(AccountingConfig::on()));
    let today = Utc::now().date_naive();
    let last_month = today - Duration::days(i64::from(today.day()));

    let receipts = [
        (today, "CASH", 2_500_000),
        (today - Duration::days(2), "VIETQR", 1_800_000),
        (today - Duration::days(5), "BANK_TRANSFER", 3_200_000),
        (last_month, "CASH", 2_100_000),
        (last_month - Duration::days(3), "MOMO", 950_000),
    ];

    for (index, (date, method, amount)) in receipts.into_iter().enumerate() {
        let outcome = repo.post_from_receipt(&demo_receipt(index, date, method, amount)).await;
        report_outcome("receipt", &outcome);
    }

    let vouchers = [
        (today - Duration::days(1), ExpenseCategory::Repair, 750_000),
        (today - Duration::days(4), ExpenseCategory::General, 1_200_000),
        (last_month - Duration::days(1), ExpenseCategory::General, 980_000),
    ];

    for (index, (date, category, amount)) in vouchers.into_iter().enumerate() {
        let outcome = repo.post_from_voucher(&demo_voucher(index, date, category, amount)).await;
        report_outcome("voucher", &outcome);
    }
}

fn demo_receipt(index: usize, date: NaiveDate, method: &str, amount: i64) -> ReceiptEvent {
    ReceiptEvent {
        receipt_id: ReceiptId::new(),
        receipt_no: format!("RC-SEED-{:04}", index + 1),
        amount: Decimal::from(amount),
        received_date: date,
        method_code: method.to_string(),
        method_name: method.to_string(),
        invoice_id: InvoiceId::new(),
        invoice_no: format!("INV-SEED-{:04}", index + 1),
        apartment_id: Some(ApartmentId::new()),
        apartment_number: Some(format!("A-{:03}", 100 + index)),
        created_by: Some(UserId::from_uuid(test_user_id())),
    }
}

fn demo_voucher(
    index: usize,
    date: NaiveDate,
    category: ExpenseCategory,
    amount: i64,
) -> VoucherEvent {
    VoucherEvent {
        voucher_id: VoucherId::new(),
        voucher_number: format!("PC-SEED-{:04}", index + 1),
        date,
        description: "Seeded building expense".to_string(),
        total_amount: Decimal::from(amount),
        items: vec![VoucherItem {
            amount: Decimal::from(amount),
            description: None,
            category,
            apartment_id: None,
        }],
        created_by: Some(UserId::from_uuid(test_user_id())),
    }
}

fn report_outcome<T>(kind: &str, outcome: &LedgerOutcome<T>) {
    match outcome {
        LedgerOutcome::Posted(_) => println!("  Posted {kind} entry"),
        LedgerOutcome::Skipped => println!("  Skipped {kind} (accounting disabled)"),
        LedgerOutcome::Failed { reason } => eprintln!("Failed to post {kind}: {reason}"),
    }
}
