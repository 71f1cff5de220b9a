//! Export sink adapters

mod txt_file;

pub use txt_file::TxtFileExporter;
