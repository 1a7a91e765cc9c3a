pub mod png_export;

pub use png_export::{encode_indexed_png, write_indexed_png};
