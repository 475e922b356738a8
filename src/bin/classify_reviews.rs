//! Classify JSON-lines reviews from stdin.
//!
//! Input, one per line: `{"title": "...", "review": "...", "rating": 4}`.
//! Output: one classification per line, then the backlog summary as the last line.

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use review_problem_classifier::backlog::{classify_rated, read_rated_reviews, summarize};
use review_problem_classifier::Classifier;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("classifier=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let classifier = Classifier::from_env().context("build classifier")?;

    let reviews = read_rated_reviews(io::stdin().lock()).context("read stdin")?;

    let classified = classify_rated(&classifier, &reviews);
    let summary = summarize(&classified);

    let mut out = BufWriter::new(io::stdout().lock());
    for item in &classified {
        serde_json::to_writer(&mut out, &item.result)?;
        writeln!(out)?;
    }
    serde_json::to_writer(&mut out, &summary)?;
    writeln!(out)?;
    out.flush()?;

    info!(
        target: "classifier",
        total = summary.total_reviews,
        problems = summary.problem_review_count,
        "done"
    );
    Ok(())
}
