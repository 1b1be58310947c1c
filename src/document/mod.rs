mod reader;
mod split;

pub use reader::DocumentReader;
pub use split::split_into_paragraphs;
