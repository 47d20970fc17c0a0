// Export modules for library usage
pub mod analysis;
pub mod core;
pub mod formatting;
pub mod output;

// Re-export commonly used types
pub use crate::core::{
    Blocker, CanonicalStage, DropOff, FunnelError, FunnelInsights, FunnelReport, FunnelResult,
    Note, PercentageCheck, RawDate, RawReport, RawStage, ReasonCount, Stage, StageDwell,
};

pub use crate::analysis::{
    analyze, compute_drop_offs, conversion_rate, generate_action_items, identify_blockers,
    largest_drop_off, latest_notes, normalize_report, normalize_stages, validate_percentages,
    DWELL_THRESHOLD_DAYS, MAX_ACTION_ITEMS, PERCENTAGE_TOLERANCE,
};

pub use crate::formatting::{
    format_date, format_date_time, format_number, format_percent, format_period, format_raw_date,
    parse_flexible,
};

pub use crate::output::{
    create_writer, export_filename, InsightWriter, JsonWriter, MarkdownWriter, OutputFormat,
    PrintExporter, PrintSurface, Snapshot, TerminalWriter, SNAPSHOT_VERSION,
};
