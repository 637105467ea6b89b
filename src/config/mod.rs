//! Configuration module for Quote-Ripple
//!
//! Every setting has a built-in default, so a configuration file is optional.
//! When one is given it is parsed as TOML and validated before use.
//!
//! # Example
//!
//! ```no_run
//! use quote_ripple::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("ripple.toml")).unwrap();
//! println!("Crawling from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};
pub use validation::validate;
