//! The batch loop: fetch, write, pause, repeat
//!
//! Each program ID maps to one outcome. Only successful fetches are written
//! to disk; any failure is recorded against its program ID and the loop moves
//! on. Reading the input is the only thing that can stop a run early.

use crate::config::Config;
use crate::display::{display_item_error, display_processing, display_written};
use crate::error::{HarvestError, HarvestResult};
use crate::idl::{IdlFetcher, IdlSummary};
use crate::input::open_program_ids;
use crate::output::OutputWriter;
use crate::pacer::Pacer;
use std::path::PathBuf;
use tracing::debug;

/// An IDL that was fetched and saved
#[derive(Debug)]
pub struct WrittenIdl {
    pub program_id: String,
    pub path: PathBuf,
    pub summary: IdlSummary,
}

/// A program ID that produced no output file
#[derive(Debug)]
pub struct FailedIdl {
    pub program_id: String,
    pub error: HarvestError,
}

/// Outcome of a full run
#[derive(Debug, Default)]
pub struct HarvestReport {
    pub written: Vec<WrittenIdl>,
    pub failed: Vec<FailedIdl>,
}

impl HarvestReport {
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    fn record(&mut self, program_id: String, outcome: HarvestResult<(PathBuf, IdlSummary)>) {
        match outcome {
            Ok((path, summary)) => {
                display_written(&path, &summary);
                debug!(%program_id, path = %path.display(), "IDL written");
                self.written.push(WrittenIdl {
                    program_id,
                    path,
                    summary,
                });
            }
            Err(error) => {
                display_item_error(&program_id, &error);
                debug!(%program_id, %error, "failed to harvest IDL");
                self.failed.push(FailedIdl { program_id, error });
            }
        }
    }
}

/// Runs program IDs through fetcher, writer and pacer one at a time.
pub struct Harvester<F> {
    fetcher: F,
    writer: OutputWriter,
    pacer: Pacer,
}

impl<F: IdlFetcher> Harvester<F> {
    pub fn new(fetcher: F, writer: OutputWriter, pacer: Pacer) -> Self {
        Self {
            fetcher,
            writer,
            pacer,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch one IDL and write it out.
    pub async fn process(&self, program_id: &str) -> HarvestResult<(PathBuf, IdlSummary)> {
        let idl = self.fetcher.fetch_idl(program_id).await?;
        let path = self.writer.write(program_id, &idl)?;
        Ok((path, idl.summary()))
    }

    /// Process every program ID in order, pausing between consecutive IDs.
    ///
    /// Returns early only if the input itself fails.
    pub async fn run<I>(&self, program_ids: I) -> HarvestResult<HarvestReport>
    where
        I: IntoIterator<Item = HarvestResult<String>>,
    {
        let mut report = HarvestReport::default();

        for program_id in program_ids {
            let program_id = program_id?;

            if report.attempted() > 0 {
                self.pacer.pause().await;
            }

            display_processing(&program_id);
            let outcome = self.process(&program_id).await;
            report.record(program_id, outcome);
        }

        Ok(report)
    }
}

/// Run a whole batch from a resolved config.
///
/// The input file is opened before `build_fetcher` is called, so a missing
/// input fails without any network setup.
pub async fn harvest_from_config<F, B>(config: &Config, build_fetcher: B) -> HarvestResult<HarvestReport>
where
    F: IdlFetcher,
    B: FnOnce(&Config) -> HarvestResult<F>,
{
    config.validate()?;
    let program_ids = open_program_ids(&config.input_file)?;

    let harvester = Harvester::new(
        build_fetcher(config)?,
        OutputWriter::new(&config.output_dir),
        Pacer::from_millis(config.delay_ms),
    );

    harvester.run(program_ids).await
}
