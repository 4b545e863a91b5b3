//! Domain events - signals emitted by the workflows for outside collaborators

mod cross_reference;

pub use cross_reference::CrossReferenceSignal;
