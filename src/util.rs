/// Which child slot of a node a descent ends in or a splice writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Values ordered before the node.
    Left,
    /// Values ordered after the node.
    Right,
}
