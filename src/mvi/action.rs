//! Base trait for actions.

/// Marker trait for plain-data messages a reducer understands.
///
/// Actions carry everything the reducer needs and nothing else. They are
/// built fresh for each dispatch and never mutated afterwards.
pub trait Action: Send + 'static {
    /// Short name of the action kind, used for diagnostics only.
    fn kind(&self) -> &'static str;
}
