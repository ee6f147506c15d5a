use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use tokio::time::Duration;

use inkpad::Config;
use inkpad::export::{self, ExportError, LocalStore, SaveManager, SaveOutcome};
use inkpad::input::DrawingSession;
use inkpad::script;

const SAVE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Parser, Debug)]
#[command(name = "inkpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKPAD_GIT_HASH"), ")"),
    about = "Freehand drawing pad with PNG export and a local drawing library"
)]
struct Cli {
    /// Replay a JSON input script (pointer events and actions)
    #[arg(long, short = 's', value_name = "FILE", required_unless_present = "init_config")]
    script: Option<PathBuf>,

    /// Write the finished drawing as PNG to this path
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Save the drawing to the local drawing library
    #[arg(long, action = ArgAction::SetTrue)]
    save: bool,

    /// Use this config file instead of ~/.config/inkpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Owner recorded with saved drawings (defaults to $USER)
    #[arg(long, value_name = "NAME")]
    owner: Option<String>,

    /// Write a default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        Config::default().write_new(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let Some(script_path) = cli.script.as_deref() else {
        bail!("--script is required");
    };
    let steps = script::load(script_path)?;

    let mut session = DrawingSession::new(config.session_settings());
    let script_saves = script::replay(&mut session, &steps);
    log::info!(
        "Replayed {} step(s): {} stroke(s) on the canvas, {} save step(s)",
        steps.len(),
        session.committed_strokes().len(),
        script_saves.len()
    );

    if cli.output.is_none() && !cli.save && script_saves.is_empty() {
        bail!("Nothing to do: pass --output <FILE> and/or --save");
    }

    // Save steps capture the drawing as it was when they ran
    let mut to_save = script_saves
        .into_iter()
        .map(into_saveable)
        .collect::<anyhow::Result<Vec<_>>>()?;

    if cli.output.is_some() || cli.save {
        let snapshot = into_saveable(session.prepare_export())?;

        if let Some(output) = &cli.output {
            write_png(&snapshot, output)?;
            println!("Wrote {}", output.display());
        }

        if cli.save {
            to_save.push(snapshot);
        }
    }

    if !to_save.is_empty() {
        let owner = cli
            .owner
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| "local".to_string());
        save_to_library(&config, to_save, &owner)?;
    }

    Ok(())
}

fn into_saveable(
    snapshot: Result<export::ExportSnapshot, ExportError>,
) -> anyhow::Result<export::ExportSnapshot> {
    match snapshot {
        Ok(snapshot) => Ok(snapshot),
        Err(ExportError::NothingToSave) => bail!("Nothing to save: the drawing is empty"),
        Err(e) => Err(e.into()),
    }
}

fn write_png(snapshot: &export::ExportSnapshot, output: &Path) -> anyhow::Result<()> {
    let png = export::capture_png(snapshot)?;
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, png).with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

fn save_to_library(
    config: &Config,
    snapshots: Vec<export::ExportSnapshot>,
    owner: &str,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let store = LocalStore::new(config.storage_directory());
    log::info!("Saving to library at {}", store.directory().display());

    let manager = SaveManager::new(runtime.handle(), store);

    // One at a time: the manager keeps only the latest outcome
    for snapshot in snapshots {
        let file_name = export::file::generate_filename(&config.storage.filename_template, "png");
        manager.request_save(snapshot, owner, file_name)?;

        match runtime.block_on(manager.wait_for_result(SAVE_TIMEOUT)) {
            Some(SaveOutcome::Success(result)) => {
                println!(
                    "Saved drawing #{} to {}",
                    result.record.id, result.image.public_url
                );
            }
            Some(SaveOutcome::Failed(message)) => bail!("Save failed: {}", message),
            None => bail!("Save timed out after {}s", SAVE_TIMEOUT.as_secs()),
        }
    }

    Ok(())
}
