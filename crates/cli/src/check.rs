//! `pacioli check`: validate every journal entry in a JSON document.

use std::io::Write;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pacioli_accounting::{JournalEntry, JournalEntryDraft};
use pacioli_core::DomainError;

/// A document holds either one entry or an array of entries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<JournalEntryDraft>),
    One(JournalEntryDraft),
}

impl Document {
    fn into_drafts(self) -> Vec<JournalEntryDraft> {
        match self {
            Document::Many(drafts) => drafts,
            Document::One(draft) => vec![draft],
        }
    }
}

/// Outcome for a single entry of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    Balanced {
        index: usize,
        /// Absent when the debit side's sum does not fit in a `Decimal`.
        #[serde(skip_serializing_if = "Option::is_none")]
        total: Option<Decimal>,
        debits: usize,
        credits: usize,
    },
    Rejected {
        index: usize,
        error: &'static str,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        argument: Option<&'static str>,
    },
}

impl Verdict {
    pub fn index(&self) -> usize {
        match self {
            Verdict::Balanced { index, .. } | Verdict::Rejected { index, .. } => *index,
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, Verdict::Balanced { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub balanced: usize,
    pub rejected: usize,
}

/// Parse `input` and judge each entry independently, in document order.
///
/// Malformed JSON (or JSON that is not shaped like journal entries) is an
/// error; rule violations are verdicts.
pub fn check_document(input: &str) -> anyhow::Result<Vec<Verdict>> {
    let document: Document = serde_json::from_str(input)
        .context("expected a journal entry object or an array of journal entry objects")?;

    let verdicts = document
        .into_drafts()
        .into_iter()
        .enumerate()
        .map(|(index, draft)| judge(index, draft))
        .collect();

    Ok(verdicts)
}

fn judge(index: usize, draft: JournalEntryDraft) -> Verdict {
    match JournalEntry::try_from(draft) {
        Ok(entry) => {
            tracing::info!(
                index,
                date = %entry.date(),
                total = ?entry.total(),
                "journal entry balanced"
            );
            Verdict::Balanced {
                index,
                total: entry.total(),
                debits: entry.debits().len(),
                credits: entry.credits().len(),
            }
        }
        Err(err) => {
            let argument = err.argument();
            let domain = DomainError::from(err);
            tracing::warn!(index, error = domain.code(), "journal entry rejected: {}", domain.message());
            Verdict::Rejected {
                index,
                error: domain.code(),
                message: domain.message().to_string(),
                argument,
            }
        }
    }
}

pub fn summarize(verdicts: &[Verdict]) -> Summary {
    verdicts.iter().fold(Summary::default(), |mut acc, v| {
        if v.is_balanced() {
            acc.balanced += 1;
        } else {
            acc.rejected += 1;
        }
        acc
    })
}

/// Write one JSON object per line.
pub fn write_verdicts(mut out: impl Write, verdicts: &[Verdict]) -> std::io::Result<()> {
    for verdict in verdicts {
        serde_json::to_writer(&mut out, verdict)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
