//! Requirements Example
//!
//! Validates a few inputs with fluent requirements and drives a small
//! table of cases.
//!
//! Run with: cargo run --example requirements
//! With debug events: cargo run --example requirements --features tracing

use requisite::prelude::*;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug)]
enum InputError {
    Blank,
    NotAToZ(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Blank => write!(f, "code is blank"),
            InputError::NotAToZ(code) => write!(f, "{:?} does not run from a to z", code),
        }
    }
}

fn check_code(code: &str) -> Result<(), InputError> {
    require(code)
        .to_satisfy(not_blank())
        .otherwise(|| InputError::Blank)?;
    require(code)
        .to_satisfy(starts_with("a"))
        .and(ends_with("z"))
        .otherwise_with(|c| InputError::NotAToZ(c.to_string()))
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    println!("=== Requirements Example ===\n");

    basic_requirements();
    evaluation_order();
    table_driven_cases();
}

fn basic_requirements() {
    println!("--- Basic Requirements ---\n");

    for code in ["az", "abcz", " az ", "  "] {
        match check_code(code) {
            Ok(()) => println!("check_code({:?}) passed", code),
            Err(e) => println!("check_code({:?}) failed: {}", code, e),
        }
    }

    println!();
}

fn evaluation_order() {
    println!("--- Evaluation Order ---\n");

    // t or a and b, read left to right: (t or a) and b
    let satisfied = require("test")
        .to_satisfy(starts_with("t"))
        .or(starts_with("a"))
        .and(starts_with("b"))
        .is_satisfied();
    println!("\"test\": (starts t or starts a) and starts b = {}", satisfied);

    let rule = require("")
        .to_satisfy(starts_with("a"))
        .or(ends_with("z"))
        .into_chain();
    println!("reusable rule: {:?}", rule);
    for subject in ["abcz", "ab ", "cz", "xy"] {
        println!("  {:?} -> {}", subject, rule.check(subject));
    }

    println!();
}

fn table_driven_cases() {
    println!("--- Table-Driven Cases ---\n");

    let outcome = test_cases()
        .add((2, 4))
        .add((3, 9))
        .add((4, 15))
        .build()
        .map_err(|e| e.to_string())
        .and_then(|table| {
            table
                .try_run(|(n, square): (i32, i32)| {
                    require(&(n * n))
                        .to_satisfy(move |actual: &i32| *actual == square)
                        .otherwise(|| format!("{}^2 is not {}", n, square))
                })
                .map_err(|failure| failure.to_string())
        });
    println!("squares: {:?}", outcome);

    let empty = test_cases::<(i32, i32)>().build();
    println!("empty table: {:?}", empty.map(|table| table.len()));
}
