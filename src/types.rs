pub mod diff_segment;
pub mod diff_stats;
pub mod rendered_span;
pub mod segment_kind;
pub mod diff_options;
