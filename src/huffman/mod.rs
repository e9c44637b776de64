pub mod decoder;
pub mod encoder;
pub mod heap;
pub mod ordering;
pub mod tree;

// Re-export commonly used types
pub use decoder::{Decode, HuffmanDecoder};
pub use encoder::HuffmanEncoder;
pub use tree::{DictionaryIter, HuffmanTree, Node};
