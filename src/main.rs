//! `camrig` binary: interactive viewer, session replay, schema export.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use camrig::{
    camera::{CameraRig, ZoomOutcome},
    session::Session,
    RigError, RigOptions, Viewer,
};
use clap::Parser;

const ENVELOPE_POST_HEIGHT: f32 = 10.0;

#[derive(Parser)]
#[command(name = "camrig")]
#[command(version, about = "Pointer-driven camera rig", long_about = None)]
struct Cli {
    /// Rig options preset (TOML)
    #[arg(long, value_name = "RIG_TOML")]
    options: Option<PathBuf>,

    /// Replay a scripted session headlessly instead of opening a window
    #[arg(long, value_name = "SESSION_TOML")]
    replay: Option<PathBuf>,

    /// Write the options JSON schema and exit
    #[arg(long, value_name = "OUT_JSON")]
    schema: Option<PathBuf>,
}

fn write_schema(path: &Path) -> Result<(), RigError> {
    let schema = RigOptions::json_schema();
    let json = serde_json::to_string_pretty(&schema)
        .map_err(|e| RigError::OptionsParse(e.to_string()))?;
    std::fs::write(path, json)?;
    log::info!("wrote options schema to {}", path.display());
    Ok(())
}

fn replay(options: &RigOptions, path: &Path) -> Result<(), RigError> {
    let session = Session::load(path)?;
    let mut rig = CameraRig::new(options)?;
    let envelope = &options.limits.pan;
    log::debug!(
        "pan envelope centre {}, size {:?}",
        envelope.center(),
        envelope.extent()
    );
    for line in rig.envelope_outline(ENVELOPE_POST_HEIGHT) {
        log::debug!(
            "envelope {:?}: {} -> {}",
            line.kind,
            line.start,
            line.end
        );
    }
    log::info!(
        "replaying {} ({} steps, {} ticks)",
        path.display(),
        session.steps.len(),
        session.tick_count()
    );

    let samples = session.play(&mut rig);
    for sample in &samples {
        match sample.report.zoom {
            ZoomOutcome::Ignored => {}
            outcome => log::info!("step {}: {outcome:?}", sample.step),
        }
    }
    let pose = rig.rendered();
    log::info!(
        "final pose: position {:?}, forward {:?}, mode {:?}",
        pose.position,
        pose.forward(),
        rig.mode()
    );
    if let Some(diagnostic) = rig.last_diagnostic() {
        log::warn!("last diagnostic: {diagnostic}");
    }
    rig.shutdown();
    Ok(())
}

fn run(args: &Cli) -> Result<(), RigError> {
    let options = match &args.options {
        Some(path) => RigOptions::load(path)?,
        None => RigOptions::default(),
    };

    if let Some(path) = &args.schema {
        return write_schema(path);
    }
    if let Some(path) = &args.replay {
        return replay(&options, path);
    }

    Viewer::builder().with_options(options).build().run()
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_flags_with_equals_and_space() {
        let cli = Cli::try_parse_from([
            "camrig",
            "--options=demos/constrained.toml",
            "--replay",
            "demos/pivot_zoom.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.options,
            Some(PathBuf::from("demos/constrained.toml"))
        );
        assert_eq!(cli.replay, Some(PathBuf::from("demos/pivot_zoom.toml")));
        assert!(cli.schema.is_none());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["camrig", "--bogus"]).is_err());
    }
}
