//! Grade Insight - Command Line Entry Point
//!
//! Commands:
//! - grade-insight predict --record <path>
//! - grade-insight simulate --record <path> --absences 25
//! - grade-insight layout

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use grade_insight_core::constants;
use grade_insight_core::logic::config::EngineConfig;
use grade_insight_core::logic::engine::{load_model, SharedGradeEngine};
use grade_insight_core::logic::features::LayoutInfo;
use grade_insight_core::{EngineError, EngineResult, StudentProfile, StudentRecord, WhatIf};

/// Grade Insight - grade prediction with explanations
#[derive(Parser, Debug)]
#[command(name = "grade-insight")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Model artifact (.json linear or .onnx); defaults to GRADE_MODEL_PATH
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Manifest for ONNX artifacts; defaults to GRADE_MANIFEST_PATH
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Engine config JSON; defaults to GRADE_ENGINE_CONFIG or the preset
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict a grade and list contributing factors
    Predict {
        /// Student record JSON (storage column names)
        #[arg(long)]
        record: PathBuf,
    },

    /// Compare the record against a what-if variant
    Simulate {
        /// Student record JSON (storage column names)
        #[arg(long)]
        record: PathBuf,

        #[arg(long)]
        study_time: Option<u8>,

        #[arg(long)]
        absences: Option<u32>,

        #[arg(long)]
        social_activity: Option<u8>,

        #[arg(long)]
        health: Option<u8>,
    },

    /// Print the feature layout the engine expects
    Layout,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{} ({})", e, e.as_str());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> EngineResult<()> {
    let engine = match &cli.command {
        Command::Layout => return print_json(&LayoutInfo::current()),
        _ => build_engine(&cli)?,
    };

    match cli.command {
        Command::Predict { record } => {
            let record = read_record(&record)?;
            print_json(&engine.predict_record(&record)?)
        }
        Command::Simulate { record, study_time, absences, social_activity, health } => {
            let profile: StudentProfile = read_record(&record)?.try_into()?;
            let what_if = WhatIf { study_time, absences, social_activity, health };
            if what_if.is_empty() {
                log::warn!("No what-if values given, delta will be zero");
            }
            print_json(&engine.simulate_what_if(&profile, &what_if)?)
        }
        Command::Layout => Ok(()),
    }
}

fn build_engine(cli: &Cli) -> EngineResult<SharedGradeEngine> {
    log::info!("Starting {} v{}", constants::APP_NAME, constants::APP_VERSION);

    let model_path = cli.model.clone().unwrap_or_else(|| constants::get_model_path().into());
    let manifest_path = cli.manifest.clone().unwrap_or_else(|| constants::get_manifest_path().into());

    let bundle = load_model(&model_path, &manifest_path)?;
    log::info!(
        "Model loaded: {} ({}, {} features)",
        bundle.metadata.model_path,
        bundle.metadata.model_type,
        bundle.metadata.features
    );

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::from_env()?,
    };

    SharedGradeEngine::from_bundle(bundle, config)
}

fn read_record(path: &Path) -> EngineResult<StudentRecord> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| EngineError::InvalidConfig(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&text)
        .map_err(|e| EngineError::InvalidConfig(format!("malformed record {}: {}", path.display(), e)))
}

fn print_json<T: Serialize>(value: &T) -> EngineResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
    println!("{}", text);
    Ok(())
}
