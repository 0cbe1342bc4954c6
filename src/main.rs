use amr_processor::{args::Args, model::amr_model::AmrModel, store::DataStore};
use clap::Parser;
use tracing::{error, info};

fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level);

    let store = DataStore::new(&args.data_dir, &args.out_dir);

    let contests = match store.load_contests() {
        Ok(contests) => contests,
        Err(e) => {
            error!("Failed to load contest data: {}", e);
            std::process::exit(1);
        }
    };

    let mut model = AmrModel::new();
    let results = match model.process(&contests) {
        Ok(results) => results,
        Err(e) => {
            error!("Processing failed: {}", e);
            std::process::exit(1);
        }
    };

    let summaries = model.rating_tracker.rating_summaries();

    let written = results
        .iter()
        .try_for_each(|(slug, performances)| store.write_performances(slug, performances))
        .and_then(|_| store.write_contest_index(&contests))
        .and_then(|_| store.write_ratings(&summaries));

    if let Err(e) = written {
        error!("Failed to write results: {}", e);
        std::process::exit(1);
    }

    info!(
        "Processed {} contests, tracking ratings for {} users",
        results.len(),
        summaries.len()
    );
}

fn init_tracing(level: &str) {
    let filter =
        tracing_subscriber::EnvFilter::try_new(level).unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
