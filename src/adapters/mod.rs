/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the filesystem, the console and the two output encodings.
pub mod outbound;
