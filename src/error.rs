//! Crate-level error type for the standings pipeline (fetch → score → export).

use crate::challonge::FetchError;
use crate::export::ExportError;

#[derive(Debug, thiserror::Error)]
pub enum StandingsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
