/// Result alias used by the application and adapter layers.
///
/// Domain services return `Result<T, OvalError>`; everything above them
/// propagates through `anyhow::Error` so context can be attached on the way up.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
