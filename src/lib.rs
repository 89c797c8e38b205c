#![forbid(unsafe_code)]

pub mod archive;
pub mod assemble;
pub mod cli;
pub mod config;
pub mod export;
pub mod formats;
pub mod logging;
pub mod render;
pub mod script;
pub mod stylesheet;

pub use archive::{ArchiveSink, LocalDirSink, MemorySink, PackagedArchive, package};
pub use assemble::{export_site, export_site_at};
pub use formats::{ExportOptions, ExportResult, Page, PlanTier, Site, Theme, UserData};
