use anyhow::{Context, Result, bail};
use clap::Parser;

use macro_sniper::{
    AnalysisReport, Cli, IndicatorCatalog, Pair, PairAnalyzer, RequestFile,
};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    if args.list_pairs {
        for pair in Pair::builtin() {
            println!("{}", pair);
        }
        return Ok(());
    }

    if args.list_indicators {
        for indicator in IndicatorCatalog::builtin().iter() {
            println!(
                "{:>6.1}  {}  {}",
                indicator.weight,
                indicator.typical_effect.symbol(),
                indicator.name
            );
        }
        return Ok(());
    }

    // C. Load request
    let Some(path) = args.request.as_deref() else {
        bail!("No request file given (see --help). Use --list-indicators for accepted names.");
    };
    let request = RequestFile::load_from_path(path)?.into_request(args.pair.as_deref())?;

    // D. Run analysis
    let analyzer = PairAnalyzer::with_lexicon(args.analysis_config());
    let result = analyzer
        .analyze(&request)
        .with_context(|| format!("Analysis of {} failed", request.pair.name))?;

    // E. Output
    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialise result")?;
        println!("{}", json);
    } else {
        print!("{}", AnalysisReport::new(&result));
    }

    Ok(())
}
