use anyhow::{Context, Result, anyhow};
use clap::Parser;
use macro_sniper::config::DEFAULT_PAIR_NAME;
use macro_sniper::{IndicatorCatalog, Observation, Pair, RequestFile};
use std::path::{Path, PathBuf};

/// Write a request file for one pair, ready to be filled in by hand
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pair to prepare, e.g. "USD/JPY"
    #[arg(default_value = DEFAULT_PAIR_NAME)]
    pair: String,

    /// Where to write the JSON request
    #[arg(default_value = "demo_request.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    build_demo_request(&args.pair, &args.output)
}

fn build_demo_request(pair_name: &str, output_path: &Path) -> Result<()> {
    let pair = Pair::lookup(pair_name).ok_or_else(|| anyhow!("Unknown pair '{}'", pair_name))?;

    // Every catalog row, in display order, ready to be filled in by hand
    let blank_rows: Vec<Observation> = IndicatorCatalog::builtin()
        .iter()
        .map(|ind| Observation::blank(ind.name.clone()))
        .collect();

    let request = RequestFile {
        pair: Some(pair.name.clone()),
        region1_observations: demo_rows(&blank_rows, 0.25),
        region2_observations: demo_rows(&blank_rows, -0.1),
        weight_overrides: Default::default(),
        statement: String::new(),
    };

    let json = serde_json::to_string_pretty(&request).context("Failed to serialise demo request")?;
    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write demo request {:?}", output_path))?;

    println!(
        "✅ Demo request for {} written to {:?} ({} rows per region).",
        pair, output_path, blank_rows.len()
    );
    Ok(())
}

// Fill the first three rows with a small surprise so the demo produces a visible signal
fn demo_rows(blank_rows: &[Observation], surprise: f64) -> Vec<Observation> {
    blank_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if i < 3 {
                Observation::new(row.indicator.clone(), 1.0, 1.0, 1.0 + surprise)
            } else {
                row.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positionals_default_to_demo_pair_and_file() {
        let args = Args::parse_from(["make_demo_request"]);
        assert_eq!(args.pair, DEFAULT_PAIR_NAME);
        assert_eq!(args.output, PathBuf::from("demo_request.json"));

        let args = Args::parse_from(["make_demo_request", "USD/JPY", "jpy.json"]);
        assert_eq!(args.pair, "USD/JPY");
        assert_eq!(args.output, PathBuf::from("jpy.json"));
    }

    #[test]
    fn demo_rows_fill_only_the_first_three() {
        let blank: Vec<Observation> = IndicatorCatalog::builtin()
            .iter()
            .map(|ind| Observation::blank(ind.name.clone()))
            .collect();
        let rows = demo_rows(&blank, 0.25);
        assert_eq!(rows.len(), blank.len());
        assert!(rows[..3].iter().all(|r| r.actual == 1.25));
        assert!(rows[3..].iter().all(|r| r.actual == 0.0));
    }
}
