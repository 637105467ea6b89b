//! Crawl statistics
//!
//! Counters collected during a crawl, reported once the run is over.

/// Counters for one crawl run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Listing pages fetched
    pub listing_pages: u64,

    /// Author pages fetched (one per distinct author)
    pub author_pages: u64,

    /// Author resolutions answered from the cache
    pub cache_hits: u64,

    /// Quotes collected
    pub quotes: u64,

    /// Distinct authors collected
    pub authors: u64,
}

impl CrawlStats {
    /// Total HTTP fetches performed
    pub fn total_fetches(&self) -> u64 {
        self.listing_pages + self.author_pages
    }

    /// Share of author resolutions served from the cache, as a percentage
    pub fn cache_hit_rate(&self) -> f64 {
        let lookups = self.cache_hits + self.author_pages;
        if lookups == 0 {
            return 0.0;
        }
        (self.cache_hits as f64 / lookups as f64) * 100.0
    }
}

/// Logs a summary of the run
pub fn log_statistics(stats: &CrawlStats) {
    tracing::info!(
        "Crawl finished: {} listing pages, {} author pages, {} quotes, {} authors",
        stats.listing_pages,
        stats.author_pages,
        stats.quotes,
        stats.authors
    );
    tracing::info!(
        "Author cache: {} hits ({:.2}% of lookups)",
        stats.cache_hits,
        stats.cache_hit_rate()
    );
}
