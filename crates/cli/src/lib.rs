//! `pacioli` command-line front end: checks journal entry documents against
//! the accounting rules and reports one verdict per entry.

pub mod check;

pub use check::{Summary, Verdict, check_document, summarize, write_verdicts};
