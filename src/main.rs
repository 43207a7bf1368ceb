use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use tweetset::config::PrepConfig;
use tweetset::constants::{dataset, fetch, sampler};
use tweetset::{load_and_prepare, sample_without_replacement, write_sample};

#[derive(Debug, Parser)]
#[command(
    name = "tweetset",
    disable_help_subcommand = true,
    about = "Download and prepare the Sentiment140 tweet corpus",
    long_about = "Fetch the Sentiment140 archive, extract and normalize the training table, and write a seeded random subsample for downstream analysis. Running with no arguments performs the full pipeline with the production defaults."
)]
struct TweetsetCli {
    #[arg(
        long,
        default_value = dataset::ARCHIVE_URL,
        help = "Archive URL fetched when no local copy exists"
    )]
    url: String,
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        default_value = dataset::DATA_DIR,
        help = "Directory for downloaded and derived files"
    )]
    data_dir: PathBuf,
    #[arg(
        long = "sample-size",
        default_value_t = sampler::SAMPLE_SIZE,
        help = "Number of rows drawn for the output sample"
    )]
    sample_size: usize,
    #[arg(
        long,
        default_value_t = sampler::SAMPLE_SEED,
        help = "Deterministic seed for the sample draw"
    )]
    seed: u64,
    #[arg(
        long = "timeout-secs",
        default_value_t = fetch::TIMEOUT_SECS,
        help = "Download timeout in seconds"
    )]
    timeout_secs: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = TweetsetCli::parse();
    let config = PrepConfig::default()
        .with_url(cli.url)
        .with_data_dir(cli.data_dir)
        .with_sample_size(cli.sample_size)
        .with_seed(cli.seed)
        .with_fetch_timeout(Duration::from_secs(cli.timeout_secs));

    let table = load_and_prepare(&config)?;
    let sample = sample_without_replacement(&table, config.sample_size, config.seed)?;
    let sample_path = config.sample_path();
    write_sample(&sample_path, &sample)?;
    println!(
        "[tweetset] sample of {} rows saved to {}",
        sample.len(),
        sample_path.display()
    );
    Ok(())
}
