use log::{debug, info};

use super::error::ParseError;
use super::model::Dataset;

/// Token handed out when a parse is started. Only the most recently issued
/// ticket may replace the slot's dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParseTicket(u64);

impl ParseTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Outcome of offering a parse result to a [`DatasetSlot`].
#[derive(Debug)]
pub enum SlotUpdate {
    /// The result was current and valid; the slot now holds it.
    Replaced,
    /// The result was current but failed; the previous dataset is kept.
    Rejected(ParseError),
    /// A newer parse was started after this one; the result was dropped.
    Stale,
}

/// Holds the "current dataset" and decides which completed parse may replace it.
///
/// Every started parse gets a monotonically increasing ticket. A completion
/// whose ticket is not the latest one issued is ignored, so a slow read that
/// finishes after a newer one can never overwrite the newer result.
#[derive(Debug, Default)]
pub struct DatasetSlot {
    dataset: Option<Dataset>,
    issued: u64,
    completed: u64,
}

impl DatasetSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new parse; earlier outstanding tickets become stale.
    pub fn begin(&mut self) -> ParseTicket {
        self.issued += 1;
        debug!("issued parse ticket {}", self.issued);
        ParseTicket(self.issued)
    }

    /// Offer the result of the parse started with `ticket`.
    pub fn complete(
        &mut self,
        ticket: ParseTicket,
        result: Result<Dataset, ParseError>,
    ) -> SlotUpdate {
        if ticket.0 != self.issued {
            info!(
                "dropping stale parse result (ticket {}, latest {})",
                ticket.0, self.issued
            );
            return SlotUpdate::Stale;
        }
        self.completed = ticket.0;
        match result {
            Ok(dataset) => {
                self.dataset = Some(dataset);
                SlotUpdate::Replaced
            }
            Err(e) => SlotUpdate::Rejected(e),
        }
    }

    /// Whether the latest issued ticket has not completed yet.
    pub fn is_pending(&self) -> bool {
        self.completed != self.issued
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }
}
