mod noop;
mod scan_filter;

pub use noop::NoopFilter;
pub use scan_filter::ScanFilter;
