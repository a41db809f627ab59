//! dirsort - sort the files of one directory into folders
//!
//! Files are grouped either by extension category (`Organized/<Category>/`) or by
//! creation month (`Organized_by_Date/<YYYY-MM>/`). Name collisions get a numeric
//! suffix instead of overwriting, and an optional pass removes empty folders.

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod date_bucket;
pub mod file_category;
pub mod file_organizer;
pub mod logging;
pub mod output;

pub use cleanup::PruneReport;
pub use config::{CompiledFilters, ConfigError, FilterConfig};
pub use file_category::{Category, CategoryTable};
pub use file_organizer::{
    Operation, OrganizeError, OrganizeMode, OrganizeReport, OrganizeResult, Organizer,
};

pub use cli::{Args, run_cli};
