// SPDX-License-Identifier: MPL-2.0
//! Destinations for confirmed pain records.

use super::PainRecordDraft;
use crate::error::{Error, Result};
use std::io::{self, Write};

/// Receives confirmed records.
pub trait RecordSink {
    /// # Errors
    ///
    /// Returns an error if the record could not be written.
    fn submit(&mut self, draft: &PainRecordDraft) -> Result<()>;
}

/// Writes each record as one line of JSON and flushes it immediately so a
/// reading process sees it right away.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn submit(&mut self, draft: &PainRecordDraft) -> Result<()> {
        let line = serde_json::to_string(draft)
            .map_err(|e| Error::Io(format!("cannot encode record: {}", e)))?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        log::info!("recorded pain in zone {}", draft.zone_code);
        Ok(())
    }
}
