mod fake_filters;
mod fake_scanner;
mod fake_sources;

pub use fake_filters::AppendFilter;
pub use fake_scanner::StaticScanner;
pub use fake_sources::DenyingSource;
