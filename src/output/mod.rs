pub mod print;
pub mod snapshot;
pub mod writers;

pub use print::{PrintExporter, PrintSurface};
pub use snapshot::{export_filename, Snapshot, SNAPSHOT_VERSION};
pub use writers::{create_writer, InsightWriter, JsonWriter, MarkdownWriter, OutputFormat, TerminalWriter};
