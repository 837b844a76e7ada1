//! A tour of the helper modules: write a small CSV of scores to a temporary
//! directory, read it back, and summarize it with the sort, stats, strings
//! and counter helpers.
//!
//! Run with `RUST_LOG=utilities_tour=info,utils_rs=debug` to also see the
//! crate's own debug events (the deliberate failed read at the end logs one).

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils_rs::error::FileError;
use utils_rs::stats::{self, Variance};
use utils_rs::strings::{self, ReplaceMode};
use utils_rs::{files, sort, Counter};

const SCORES: &str = "\
name,team,score
ada,red,91
brook,blue,78
cyd,red,85
dee,green,62
eli,blue,97
fay,red,85
gus,green,70
";

#[derive(Debug, Clone)]
struct Row {
    name: String,
    team: String,
    score: i32,
}

fn parse(lines: &[String]) -> Vec<Row> {
    lines
        .iter()
        .skip(1)
        .filter_map(|line| match strings::split(line, ',').as_slice() {
            [name, team, score] => Some(Row {
                name: strings::trim(name),
                team: strings::to_upper(team),
                score: strings::to_int(score)?,
            }),
            _ => None,
        })
        .collect()
}

fn main() -> Result<(), FileError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "utilities_tour=info,utils_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dir = std::env::temp_dir().join(format!("utils-rs-tour-{}", std::process::id()));
    files::create_directory(&dir)?;
    let csv = dir.join("scores.csv");
    files::write_file(&csv, SCORES)?;
    let bytes = files::file_size(&csv)?;
    info!(path = %csv.display(), bytes, "wrote scores");

    let rows = parse(&files::read_lines(&csv)?);
    let scores: Vec<i32> = rows.iter().map(|r| r.score).collect();

    info!(
        mean = ?stats::mean(&scores),
        median = ?stats::median(&scores),
        mode = ?stats::mode(&scores),
        stddev = ?stats::standard_deviation(&scores, Variance::Sample),
        "score summary"
    );
    if let Some(p) = stats::percentiles(&scores, &[25.0, 50.0, 90.0]) {
        info!(p25 = p[0], p50 = p[1], p90 = p[2], "percentiles");
    }

    let mut ranked = rows.clone();
    sort::merge_sort_by(&mut ranked, |a, b| b.score.cmp(&a.score));
    let podium: Vec<&str> = ranked.iter().take(3).map(|r| r.name.as_str()).collect();
    info!(podium = %strings::join(&podium, " > "), "leaderboard");

    let mut per_team = Counter::new(|r: &Row| r.team.clone());
    per_team.count_all(&rows);
    for (team, members) in per_team.by_count_desc() {
        info!(%team, members, "team size");
    }

    let report = dir.join("report.txt");
    files::write_file(&report, strings::replace(SCORES, ",", "\t", ReplaceMode::All))?;
    files::append_to_file(&report, "# generated by utilities_tour\n")?;
    let listed = files::list_files_with_extension(&dir, "txt")?;
    info!(count = listed.len(), "text reports");

    if let Err(err) = files::read_file(dir.join("missing.csv")) {
        warn!(kind = ?err.kind(), "{}", err);
    }

    std::fs::remove_dir_all(&dir).map_err(|source| FileError::Directory {
        path: dir.clone(),
        source,
    })?;
    Ok(())
}
