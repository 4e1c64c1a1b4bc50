/// Marker trait for renderable state.
///
/// States are replaced wholesale, never mutated in place, so they must be
/// cheap to compare and clone across the watch channel.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
