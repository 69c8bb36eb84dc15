//! Budget Ledger CLI
//!
//! Without arguments, runs the sample session and prints the Food and
//! Shopping statements followed by the spend chart of all four sample
//! categories. Given a CSV operation script, applies it and prints every
//! statement followed by the chart.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- operations.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use budget_ledger::{render_spend_chart, Amount, Budget, Category, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let stdout = io::stdout();
    let handle = stdout.lock();

    match args.get(1) {
        Some(input_path) => {
            let file = File::open(input_path)?;
            let mut budget = Budget::new();
            budget.process_csv(BufReader::new(file))?;
            budget.write_report(handle)
        }
        None => sample_session(handle),
    }
}

fn sample_session<W: Write>(mut out: W) -> Result<()> {
    let mut food = Category::new("Food");
    let mut shopping = Category::new("Shopping");
    let it = Category::new("It");
    let clothing = Category::new("Clothing");

    food.deposit(Amount::from(500), "initial deposit")?;
    food.withdraw(Amount::from(20), "groceries")?;
    food.deposit(Amount::from(30), "weekly bonus")?;
    food.transfer(Amount::from(300), &mut shopping)?;
    shopping.withdraw(Amount::from(50), "some spendings on pizza")?;

    writeln!(out, "{}", food)?;
    writeln!(out, "{}", shopping)?;
    out.write_all(render_spend_chart([&food, &shopping, &it, &clothing])?.as_bytes())?;
    out.flush()?;
    Ok(())
}
