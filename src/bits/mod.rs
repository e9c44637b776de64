pub mod bit_buffer;

// Re-export commonly used types
pub use bit_buffer::{BitBuffer, Bits};
