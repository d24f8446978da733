//! Error types for the chat widget.

use baza_core::BazaError;

/// Errors raised while building an intent catalog.
///
/// Entries are numbered from zero in declaration order.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("intent {0} has an empty answer")]
    EmptyAnswer(usize),
    #[error("intent {0} has no keywords")]
    NoKeywords(usize),
    #[error("intent {0} has an empty keyword")]
    EmptyKeyword(usize),
    #[error("failed to load catalog: {0}")]
    Load(#[from] BazaError),
}
