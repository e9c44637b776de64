pub mod artifacts;
pub mod encoder;

// Re-export commonly used types
pub use artifacts::{DecodeTable, EncodedAudio, Payload};
pub use encoder::PcmEncoder;
