use std::io::{Cursor, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context as _;
use async_trait::async_trait;
use chrono::NaiveDate;
use sha2::Digest as _;
use tokio::fs;
use zip::write::SimpleFileOptions;

use crate::formats::ExportResult;
use crate::render::{INDEX_FILE, SCRIPT_FILE, STYLESHEET_FILE};

pub const DEFAULT_SITE_NAME: &str = "scopestudio-site";
pub const README_FILE: &str = "README.md";

/// Delivers a finished archive somewhere the user can pick it up.
#[async_trait]
pub trait ArchiveSink: Send + Sync {
    /// Stores `bytes` under `file_name` and returns where it ended up.
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> anyhow::Result<String>;
}

/// Writes archives into a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalDirSink {
    dir: PathBuf,
    force: bool,
}

impl LocalDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            force: false,
        }
    }

    /// Allow replacing an archive that already exists.
    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn archive_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

#[async_trait]
impl ArchiveSink for LocalDirSink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> anyhow::Result<String> {
        let path = self.archive_path(file_name);
        if !self.force
            && fs::try_exists(&path)
                .await
                .with_context(|| format!("stat archive: {}", path.display()))?
        {
            anyhow::bail!("archive already exists: {}", path.display());
        }
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create output dir: {}", self.dir.display()))?;

        write_atomic(&path, &bytes).await?;
        Ok(path.to_string_lossy().to_string())
    }
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let tmp_path = path.with_extension(format!("zip.tmp.{}", uuid::Uuid::new_v4().simple()));

    let written = async {
        fs::write(&tmp_path, bytes)
            .await
            .with_context(|| format!("write tmp: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .await
            .with_context(|| format!("rename tmp to final: {}", path.display()))
    }
    .await;

    if written.is_err()
        && let Err(err) = fs::remove_file(&tmp_path).await
        && err.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(path = %tmp_path.display(), %err, "failed to remove temporary archive");
    }
    written
}

/// Keeps delivered archives in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    archives: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<(String, Vec<u8>)> {
        let mut archives = self
            .archives
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        std::mem::take(&mut *archives)
    }
}

#[async_trait]
impl ArchiveSink for MemorySink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> anyhow::Result<String> {
        let mut archives = self
            .archives
            .lock()
            .map_err(|_| anyhow::anyhow!("memory sink lock poisoned"))?;
        archives.push((file_name.to_owned(), bytes));
        Ok(format!("memory://{file_name}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedArchive {
    pub file_name: String,
    pub location: String,
    pub size_bytes: usize,
    pub sha256: String,
}

/// Builds the archive for `result` and hands it to `sink`.
pub async fn package(
    result: &ExportResult,
    site_name: &str,
    sink: &dyn ArchiveSink,
) -> anyhow::Result<PackagedArchive> {
    let file_name = archive_file_name(site_name, result.metadata.export_date.date_naive());

    let result_for_blocking = result.clone();
    let site_name_for_blocking = site_name.to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        build_archive(&result_for_blocking, &site_name_for_blocking)
    })
    .await
    .context("join archive task")?
    .context("build archive")?;

    let size_bytes = bytes.len();
    let sha256 = hex::encode(sha2::Sha256::digest(&bytes));
    let location = sink
        .deliver(&file_name, bytes)
        .await
        .with_context(|| format!("deliver archive: {file_name}"))?;

    tracing::info!(
        file = %file_name,
        location = %location,
        size_bytes,
        sha256 = %sha256,
        "archive packaged"
    );

    Ok(PackagedArchive {
        file_name,
        location,
        size_bytes,
        sha256,
    })
}

/// `<siteName>-<YYYY-MM-DD>.zip`
pub fn archive_file_name(site_name: &str, date: NaiveDate) -> String {
    format!("{}-{}.zip", sanitize_site_name(site_name), date.format("%Y-%m-%d"))
}

pub fn sanitize_site_name(site_name: &str) -> String {
    let cleaned: String = site_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '-'
            } else {
                c
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.').trim().to_owned();
    if cleaned.is_empty() {
        DEFAULT_SITE_NAME.to_owned()
    } else {
        cleaned
    }
}

/// Entry names in archive order.
pub fn archive_entries(result: &ExportResult) -> Vec<String> {
    let mut entries = vec![INDEX_FILE.to_owned()];
    entries.extend(result.pages.iter().map(|p| p.file_name.clone()));
    entries.push(STYLESHEET_FILE.to_owned());
    entries.push(SCRIPT_FILE.to_owned());
    entries.push(README_FILE.to_owned());
    entries
}

pub fn build_archive(result: &ExportResult, site_name: &str) -> anyhow::Result<Vec<u8>> {
    let readme = render_readme(result, site_name);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));

    let mut files: Vec<(&str, &str)> = vec![(INDEX_FILE, result.html.as_str())];
    files.extend(
        result
            .pages
            .iter()
            .map(|p| (p.file_name.as_str(), p.html.as_str())),
    );
    files.push((STYLESHEET_FILE, result.css.as_str()));
    files.push((SCRIPT_FILE, result.js.as_str()));
    files.push((README_FILE, readme.as_str()));

    for (name, contents) in files {
        zip.start_file(name, options)
            .with_context(|| format!("zip start_file: {name}"))?;
        zip.write_all(contents.as_bytes())
            .with_context(|| format!("zip write: {name}"))?;
    }

    let cursor = zip.finish().context("zip finish")?;
    Ok(cursor.into_inner())
}

pub fn render_readme(result: &ExportResult, site_name: &str) -> String {
    let meta = &result.metadata;
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", sanitize_site_name(site_name)));
    out.push_str("This website was exported from ScopeStudio.\n\n");

    out.push_str("## Files included\n\n");
    out.push_str(&format!("- {INDEX_FILE} - Main page\n"));
    for page in &result.pages {
        out.push_str(&format!("- {} - Page `{}`\n", page.file_name, page.id));
    }
    out.push_str(&format!("- {STYLESHEET_FILE} - All styles\n"));
    out.push_str(&format!("- {SCRIPT_FILE} - Interactive features\n"));
    out.push('\n');

    out.push_str("## Deployment\n\n");
    out.push_str("Upload every file in this archive, keeping them in the same directory,\n");
    out.push_str("to any static hosting service, for example:\n\n");
    out.push_str("- Netlify\n- Vercel\n- GitHub Pages\n- AWS S3\n\n");
    out.push_str("`index.html` is the entry point. Images are referenced by URL and are not bundled.\n\n");

    out.push_str("## Customization\n\n");
    out.push_str("Edit the HTML, CSS, and JS files to customize your site further.\n\n");

    out.push_str(&format!("Generated on: {}\n", meta.export_date_iso()));
    out.push_str(&format!("Pages: {}\n", meta.total_pages));
    out.push_str(&format!("Theme: {}\n", meta.theme));
    out.push_str(&format!("Responsive: {}\n", meta.responsive));
    out
}
