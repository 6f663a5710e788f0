use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use budget_tracker::{CategoryName, EntryKind, LedgerStore, LoadPolicy, NewEntry};

/// A utility for creating a ledger database with sample entries for manual testing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// The sample entries, oldest first.
const SAMPLE_ENTRIES: [(&str, f64, EntryKind, &str); 6] = [
    ("Salary", 50_000.0, EntryKind::Income, "utilities"),
    ("Rent", 15_000.0, EntryKind::Expense, "rent"),
    ("Electricity bill", 1_200.0, EntryKind::Expense, "utilities"),
    ("Vegetables", 450.5, EntryKind::Expense, "groceries"),
    ("Movie tickets", 600.0, EntryKind::Expense, "entertainment"),
    ("Bus pass", 300.0, EntryKind::Expense, "transportation"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'ledger.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    let mut store = LedgerStore::open(conn, LoadPolicy::Reset)?;
    store.add_category(CategoryName::new("rent")?)?;

    println!("Adding {} sample entries...", SAMPLE_ENTRIES.len());

    for (description, amount, kind, category) in SAMPLE_ENTRIES {
        store.add(NewEntry::new(
            description,
            amount,
            kind,
            CategoryName::new(category)?,
        )?)?;
    }

    println!("Success!");

    Ok(())
}
