use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Month, OffsetDateTime};

use finance_tracker::{
    NewTransaction, TRANSACTION_CATEGORIES, TransactionType, create_transaction, initialize_db,
};

/// A utility for creating a test database for the REST API server of finance_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The number of months of sample transactions to create, ending in the current month.
    #[arg(long, default_value_t = 6)]
    months: u8,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");

    let now = OffsetDateTime::now_utc();
    let mut month_start = now.date().replace_day(1)?;
    let mut count = 0;

    for month_index in 0..args.months {
        for transaction in sample_month(month_start, month_index) {
            create_transaction(&transaction, now, &conn)?;
            count += 1;
        }

        month_start = previous_month(month_start)?;
    }

    println!("Created {count} transactions. Success!");

    Ok(())
}

/// A salary payment plus a few expenses spread through the month.
fn sample_month(month_start: Date, month_index: u8) -> Vec<NewTransaction> {
    let expense_categories = TRANSACTION_CATEGORIES.expense;
    let mut transactions = vec![NewTransaction {
        description: format!("Salary for {} {}", month_start.month(), month_start.year()),
        amount: 4200.0,
        transaction_type: TransactionType::Income,
        category: TRANSACTION_CATEGORIES.income[0].to_owned(),
        date: month_start,
    }];

    for (offset, day) in [3u8, 11, 19, 26].into_iter().enumerate() {
        let Ok(date) = month_start.replace_day(day) else {
            continue;
        };
        let category_index = (usize::from(month_index) + offset * 3) % expense_categories.len();
        let category = expense_categories[category_index];

        transactions.push(NewTransaction {
            description: format!("{category} purchase"),
            amount: 35.5 * (offset as f64 + 1.0) + f64::from(month_index) * 4.25,
            transaction_type: TransactionType::Expense,
            category: category.to_owned(),
            date,
        });
    }

    transactions
}

fn previous_month(month_start: Date) -> Result<Date, time::error::ComponentRange> {
    match month_start.month() {
        Month::January => Date::from_calendar_date(month_start.year() - 1, Month::December, 1),
        month => Date::from_calendar_date(month_start.year(), month.previous(), 1),
    }
}
