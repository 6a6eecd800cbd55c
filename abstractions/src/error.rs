use thiserror::Error;

/// Returned by [`ConsumerNode::try_consume`](crate::ConsumerNode::try_consume) when every
/// consumer in the chain declined the data. The data is handed back untouched.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no consumer in the chain claimed the data")]
pub struct Unclaimed<D>(pub D);

impl<D> Unclaimed<D> {
    pub fn into_inner(self) -> D {
        self.0
    }
}
