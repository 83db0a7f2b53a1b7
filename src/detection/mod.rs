//! Detection model loader
//!
//! The detection model lives in an external inference package. Loading a model
//! means running that package's entry point to completion; whatever it prints
//! or returns is discarded.

use log::{debug, info};
use std::io;
use std::process::{Command, Stdio};

use crate::config::{ModelSpec, ViewerConfig};
use crate::error::{Result, ViewerError};

/// Line logged (and echoed to the console) before every load
pub const LOAD_BANNER: &str = "Loading detection model";

/// Something that can run an inference entry point
pub trait EntryPoint {
    /// Human-readable name of what gets run
    fn program(&self) -> &str;

    /// Run to completion, blocking the caller
    fn invoke(&self) -> io::Result<()>;
}

/// Runs an external program with its configured arguments
#[derive(Debug, Clone)]
pub struct CommandEntryPoint {
    program: String,
    args: Vec<String>,
}

impl CommandEntryPoint {
    pub fn new(spec: &ModelSpec) -> Self {
        Self {
            program: spec.program.clone(),
            args: spec.args.clone(),
        }
    }
}

impl EntryPoint for CommandEntryPoint {
    fn program(&self) -> &str {
        &self.program
    }

    fn invoke(&self) -> io::Result<()> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()?;

        debug!(
            "{} {:?} exited with {} ({} bytes of output)",
            self.program,
            self.args,
            output.status,
            output.stdout.len() + output.stderr.len()
        );
        Ok(())
    }
}

/// Entry point of the model called `name` in the combo box
pub fn entry_point_for(config: &ViewerConfig, name: &str) -> Result<CommandEntryPoint> {
    config
        .model(name)
        .map(CommandEntryPoint::new)
        .ok_or_else(|| ViewerError::UnknownModel(name.to_string()))
}

/// Run the entry point of `model` and throw the result away
pub fn load(model: &str, entry: &dyn EntryPoint) -> Result<()> {
    debug!("{LOAD_BANNER}");
    info!("🧠 Running {} for {}", entry.program(), model);

    entry
        .invoke()
        .map_err(|source| ViewerError::ModelLaunch {
            program: entry.program().to_string(),
            source,
        })
}
