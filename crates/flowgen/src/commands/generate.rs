//! `flowgen generate` command.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use flowgen_client::GeneratorClient;
use flowgen_config::{CliSettings, Config};
use flowgen_render::EmbedRenderer;
use flowgen_session::{Outcome, Session};
use flowgen_view::DisplayRegion;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `generate` command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Source file to convert (reads stdin when omitted).
    pub(crate) input: Option<PathBuf>,

    /// Generation service base URL (overrides flowgen.toml).
    #[arg(long, env = "FLOWGEN_SERVICE_URL")]
    pub(crate) url: Option<String>,

    /// HTTP timeout in seconds (overrides flowgen.toml).
    #[arg(long)]
    pub(crate) timeout: Option<u64>,

    /// Write the resulting HTML to a file instead of stdout.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl GenerateArgs {
    /// Run one generation attempt and emit the final display HTML.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            base_url: self.url.clone(),
            timeout_secs: self.timeout,
        };
        let config = Config::load(&settings)?;
        let code = self.read_input()?;

        let client =
            GeneratorClient::with_timeout(&config.service.base_url, config.service.timeout());
        let region = DisplayRegion::new();
        let session = Session::new(
            Arc::new(client),
            Arc::new(EmbedRenderer::new()),
            region.clone(),
        );

        let outcome = session.generate(&code);
        self.write_html(&region.html())?;

        match outcome {
            Outcome::Rendered => {
                output.success("Flowchart generated.");
                Ok(())
            }
            Outcome::Empty => {
                output.warning("Service returned no flowchart.");
                Ok(())
            }
            // The error presentation is already part of the emitted HTML;
            // the exit code just mirrors the outcome.
            Outcome::Failed => Err(CliError::Generation(
                "generation failed; see emitted error state".to_owned(),
            )),
        }
    }

    fn read_input(&self) -> Result<String, CliError> {
        match &self.input {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut code = String::new();
                std::io::stdin().read_to_string(&mut code)?;
                Ok(code)
            }
        }
    }

    fn write_html(&self, html: &str) -> Result<(), CliError> {
        match &self.output {
            Some(path) => std::fs::write(path, html)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
