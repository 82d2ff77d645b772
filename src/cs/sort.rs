pub mod deterministic_select;
pub mod metrics;

// Selection by median of medians, plus the statistics it reports
pub use deterministic_select::{
    kth_smallest, median, select, DescentPolicy, PartitionScheme, Selector, GROUP_SIZE,
};
pub use metrics::Metrics;
