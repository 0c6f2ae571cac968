//! Cursor pagination arguments

use clap::Args;
use clap::builder::RangedU64ValueParser;

/// Arguments for walking a cursor-paginated list.
#[derive(Args, Debug, Default, Clone)]
pub struct PageArgs {
    /// Items per page (defaults to preferences.page_size, then 100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Continue after this cursor
    #[arg(long)]
    pub after: Option<String>,

    /// Keep fetching pages until the list is exhausted
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Stop once this many items are loaded (implies --all)
    #[arg(long, short = 'n', value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
}

impl PageArgs {
    /// Whether more than one page should be fetched.
    pub fn wants_many(&self) -> bool {
        self.all || self.limit.is_some()
    }

    /// Page size, falling back to the configured default.
    pub fn page_size_or(&self, default: usize) -> usize {
        self.page_size.map(|n| n as usize).unwrap_or(default)
    }
}
