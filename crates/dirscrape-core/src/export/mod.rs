mod reader;
mod writer;

pub use reader::CsvImporter;
pub use writer::CsvExporter;
