use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, bail};

use pacioli_cli::{check_document, summarize, write_verdicts};
use pacioli_observability::ObservabilityConfig;

const USAGE: &str = "usage: pacioli check <FILE|->";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let config = ObservabilityConfig::from_env().context("invalid logging configuration")?;
    pacioli_observability::init(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = match args.as_slice() {
        [command, source] if command == "check" => source.as_str(),
        _ => bail!(USAGE),
    };

    let input = read_input(source)?;
    let verdicts = check_document(&input).with_context(|| format!("cannot check {source}"))?;

    write_verdicts(std::io::stdout().lock(), &verdicts).context("failed to write verdicts")?;

    let summary = summarize(&verdicts);
    tracing::info!(
        balanced = summary.balanced,
        rejected = summary.rejected,
        "check finished"
    );

    Ok(if summary.rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
}
