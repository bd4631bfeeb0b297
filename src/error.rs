//! Errors for the checked forms of position operations.

use thiserror::Error;

/// Why a [`Position`][crate::Position] could not be dereferenced or erased.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The position is the end (or before-begin) sentinel and refers to no value.
    #[error("position is past the end of the tree")]
    End,
    /// The node the position referred to has since been erased.
    #[error("position refers to a node that has been erased")]
    Stale,
}
