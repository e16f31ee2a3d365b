//! I/O layer: decoding source images (`reader`) and encoding outputs (`writers`).
pub mod reader;
pub use reader::read_image;

pub mod writers;
pub use writers::png::write_png;
