/// Marker trait for intents: user actions (reload, retry) or
/// system events (fetch resolved, fetch failed).
pub trait Intent: Send + 'static {}
