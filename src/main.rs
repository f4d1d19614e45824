use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use matchup_nn::data::read_csv;
use matchup_nn::{test_accuracy, train, LabelMode, NetError, Network, NeuralNetwork, RunConfig};

#[derive(Parser)]
#[command(version, about = "Train and evaluate a two-class match outcome network")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a fresh network, test it, save it, reload it and test again
    Train {
        /// JSON run configuration
        #[arg(short, long, value_name = "PATH")]
        config: PathBuf,
    },
    /// Score a saved network on a CSV test set
    Eval {
        #[arg(short, long, value_name = "PATH")]
        model: PathBuf,
        #[arg(short, long, value_name = "PATH")]
        data: PathBuf,
        /// Trailing CSV columns that form the target vector
        #[arg(long, value_name = "INT", default_value_t = 2)]
        label_cols: usize,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_training(config_path: PathBuf) -> Result<(), Box<dyn Error>> {
    let run = RunConfig::load_json(&config_path)?;
    let net_config = run.network_config()?;
    let topology = net_config.topology.clone();

    let train_set = read_csv(&run.train_data, &topology, run.label_mode())?;
    let test_set = read_csv(&run.test_data, &topology, run.label_mode())?;
    info!(
        train_rows = train_set.len(),
        test_rows = test_set.len(),
        layers = ?topology.layer_sizes(),
        hidden_layers = topology.hidden_layers(),
        "datasets loaded"
    );

    let mut network = Network::seeded(net_config, run.seed);
    let report = train(&mut network, &train_set, &run.train_config())?;
    if let Some(mse) = report.final_error() {
        info!(epochs = run.epochs, mse, "training complete");
    }

    let accuracy = test_accuracy(&mut network, &test_set)?;
    println!("test set: network predicted {accuracy}");

    network.save(&run.model_path)?;

    match Network::load(&run.model_path) {
        Ok(mut loaded) => {
            let reloaded = test_accuracy(&mut loaded, &test_set)?;
            println!("reloaded network predicted {reloaded}");
        }
        Err(e @ (NetError::PersistenceNotFound { .. } | NetError::PersistenceCorrupt { .. })) => {
            warn!(error = %e, "could not restore saved network; continuing without it");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn run_eval(model: PathBuf, data: PathBuf, label_cols: usize) -> Result<(), Box<dyn Error>> {
    let mut network = Network::load(&model)?;
    let test_set = read_csv(
        &data,
        network.topology(),
        LabelMode::OneHot { n_label_cols: label_cols },
    )?;
    let accuracy = test_accuracy(&mut network, &test_set)?;
    println!("network predicted {accuracy}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Train { config } => run_training(config),
        Command::Eval { model, data, label_cols } => run_eval(model, data, label_cols),
    }
}
