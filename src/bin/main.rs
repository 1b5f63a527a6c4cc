//! kridge Command Line Interface
//!
//! A command-line interface for training, evaluating, and using kernel
//! ridge models with CSV data.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use kridge::api::{ClassificationReport, KernelRidgeClassifier, KernelRidgeRegressor, RegressionReport};
use kridge::core::{Dataset, Result, RidgeError};
use kridge::data::CsvDataset;
use kridge::persistence::{ModelTask, SavedModel};
use log::{error, info};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "kridge")]
#[command(about = "Kernel ridge regression and classification")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "kridge contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new model
    Train(TrainArgs),
    /// Make predictions using a trained model
    Predict(PredictArgs),
    /// Evaluate a model on test data
    Evaluate(EvaluateArgs),
    /// Display model information
    Info(InfoArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliTask {
    /// One-vs-all classification on integer labels
    Classification,
    /// Real-valued regression
    Regression,
}

#[derive(Args)]
struct TrainArgs {
    /// Training data file (CSV, last column is the label)
    #[arg(long)]
    data: PathBuf,

    /// Output model file
    #[arg(short, long)]
    output: PathBuf,

    /// Learning task
    #[arg(short, long, default_value = "classification")]
    task: CliTask,

    /// Regularization parameter C
    #[arg(short = 'C', long, default_value = "1.0")]
    c: f64,

    /// Kernel name (rbf, linear, polynomial)
    #[arg(short, long, default_value = "rbf")]
    kernel: String,

    /// Kernel scale parameter
    #[arg(short, long, default_value = "10.0")]
    gamma: f64,
}

#[derive(Args)]
struct PredictArgs {
    /// Trained model file
    #[arg(short, long)]
    model: PathBuf,

    /// Input data file (CSV)
    #[arg(long)]
    data: PathBuf,

    /// Output predictions file (optional, prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Trained model file
    #[arg(short, long)]
    model: PathBuf,

    /// Test data file (CSV)
    #[arg(long)]
    data: PathBuf,
}

#[derive(Args)]
struct InfoArgs {
    /// Model file
    model: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Train(args) => train_command(args),
        Commands::Predict(args) => predict_command(args),
        Commands::Evaluate(args) => evaluate_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn class_labels(dataset: &CsvDataset) -> Vec<i64> {
    dataset
        .get_labels()
        .iter()
        .map(|&label| label.round() as i64)
        .collect()
}

fn train_command(args: TrainArgs) -> Result<()> {
    info!("Training kernel ridge model...");
    info!("Data file: {:?}", args.data);
    info!(
        "Parameters: task={:?}, C={}, kernel={}, gamma={}",
        args.task, args.c, args.kernel, args.gamma
    );

    let dataset = CsvDataset::from_file(&args.data)?;
    info!(
        "Loaded {} samples with {} dimensions",
        dataset.len(),
        dataset.dim()
    );

    if dataset.len() < 2 {
        return Err(RidgeError::InvalidDataset(
            "Dataset must contain at least 2 samples".to_string(),
        ));
    }

    let saved = match args.task {
        CliTask::Classification => {
            let model = KernelRidgeClassifier::new()
                .with_c(args.c)
                .with_kernel_name(&args.kernel)?
                .with_gamma(args.gamma)
                .fit_dataset(&dataset)?;

            let predictions = model.predict(&dataset.feature_rows())?;
            let report = ClassificationReport::new(&predictions, &class_labels(&dataset))?;
            info!("Training accuracy: {:.2}%", report.accuracy() * 100.0);

            SavedModel::from_classifier(&model)
        }
        CliTask::Regression => {
            let model = KernelRidgeRegressor::new()
                .with_c(args.c)
                .with_kernel_name(&args.kernel)?
                .with_gamma(args.gamma)
                .fit_dataset(&dataset)?;

            let predictions = model.predict(&dataset.feature_rows())?;
            let report = RegressionReport::new(&predictions, &dataset.get_labels())?;
            info!("Training RMSE: {:.6}", report.rmse());

            SavedModel::from_regressor(&model)
        }
    };

    info!("Training completed successfully");
    saved.save_to_file(&args.output)?;
    info!("Model saved to: {:?}", args.output);

    Ok(())
}

fn predict_command(args: PredictArgs) -> Result<()> {
    info!("Loading model from: {:?}", args.model);
    let saved = SavedModel::load_from_file(&args.model)?;

    info!("Loading prediction data from: {:?}", args.data);
    let dataset = CsvDataset::from_file(&args.data)?;
    let features = dataset.feature_rows();

    let lines: Vec<String> = match saved.task {
        ModelTask::Classification => {
            let model = saved.to_classifier()?;
            model
                .predict(&features)?
                .iter()
                .enumerate()
                .map(|(i, label)| format!("{i} {label}"))
                .collect()
        }
        ModelTask::Regression => {
            let model = saved.to_regressor()?;
            model
                .predict(&features)?
                .iter()
                .enumerate()
                .map(|(i, value)| format!("{i} {value:.6}"))
                .collect()
        }
    };

    let header = format!(
        "# Predictions for {} samples\n# Format: sample_index predicted_value",
        lines.len()
    );

    if let Some(output_path) = args.output {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        let file = File::create(&output_path).map_err(RidgeError::IoError)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{header}").map_err(RidgeError::IoError)?;
        for line in &lines {
            writeln!(writer, "{line}").map_err(RidgeError::IoError)?;
        }
        info!("Predictions saved to: {output_path:?}");
    } else {
        println!("{header}");
        for line in &lines {
            println!("{line}");
        }
    }

    Ok(())
}

fn evaluate_command(args: EvaluateArgs) -> Result<()> {
    info!("Loading model from: {:?}", args.model);
    let saved = SavedModel::load_from_file(&args.model)?;

    info!("Loading test data from: {:?}", args.data);
    let dataset = CsvDataset::from_file(&args.data)?;
    let features = dataset.feature_rows();

    println!("=== Model Evaluation ===");
    saved.print_summary();
    println!("\nTest Results:");

    match saved.task {
        ModelTask::Classification => {
            let model = saved.to_classifier()?;
            let predictions = model.predict(&features)?;
            let report = ClassificationReport::new(&predictions, &class_labels(&dataset))?;
            println!("  Accuracy: {:.2}%", report.accuracy() * 100.0);
            println!("  Errors:   {}/{}", report.errors(), report.total);
        }
        ModelTask::Regression => {
            let model = saved.to_regressor()?;
            let predictions = model.predict(&features)?;
            let report = RegressionReport::new(&predictions, &dataset.get_labels())?;
            println!("  MSE:  {:.6}", report.mse());
            println!("  RMSE: {:.6}", report.rmse());
            println!("  MAE:  {:.6}", report.mean_absolute_error());
        }
    }

    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    info!("Loading model from: {:?}", args.model);
    let saved = SavedModel::load_from_file(&args.model)?;

    saved.print_summary();

    println!("\nCoefficient rows: {}", saved.alpha.len());
    if let Some(first_row) = saved.alpha.first() {
        let n_show = first_row.len().min(10);
        println!("First row ({} coefficients):", first_row.len());
        for (i, value) in first_row.iter().take(n_show).enumerate() {
            println!("  α{i}: {value:.6}");
        }
        if first_row.len() > n_show {
            println!("  ... ({} more)", first_row.len() - n_show);
        }
    }

    Ok(())
}
