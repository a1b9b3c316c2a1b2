/// Data layer: core types, text parsing, and the current-dataset slot.
///
/// Architecture:
/// ```text
///   raw text (whole file)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  lines → header? → numeric rows → uniform → pairs
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<PairedRow>, num_pairs, optional header
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  slot     │  versioned holder; stale parses are dropped
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod slot;

pub use error::{ParseError, RowError, RowFault};
pub use loader::{load_file, parse_dataset};
pub use model::{Dataset, PairedRow, ReImPair};
pub use slot::{DatasetSlot, ParseTicket, SlotUpdate};
