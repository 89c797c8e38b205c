use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::archive::{self, LocalDirSink};
use crate::assemble;
use crate::cli::{ExportArgs, ExportOptionArgs, PreviewArgs};
use crate::config;
use crate::formats::{ExportOptions, UserData};

pub async fn run(args: ExportArgs) -> anyhow::Result<()> {
    let site = config::load_site(Path::new(&args.site))?;
    let options = effective_options(&args.options)?;
    let user = UserData {
        email: args.email.clone(),
        plan: args.plan,
    };
    let site_name = args
        .site_name
        .clone()
        .unwrap_or_else(|| site_name_for(&user.email));

    tracing::info!(
        pages = site.pages.len(),
        plan = ?user.plan,
        site_name = %site_name,
        out = %args.out,
        "export site"
    );

    let result = assemble::export_site(&site, &user, &options);
    let sink = LocalDirSink::new(&args.out).with_force(args.force);
    let packaged = archive::package(&result, &site_name, &sink)
        .await
        .context("package archive")?;

    println!("{}", packaged.location);
    Ok(())
}

pub fn preview(args: PreviewArgs) -> anyhow::Result<()> {
    let site = config::load_site(Path::new(&args.site))?;
    let options = effective_options(&args.options)?;
    let user = UserData {
        email: String::new(),
        plan: args.plan,
    };

    let result = assemble::export_site(&site, &user, &options);
    match &args.out {
        Some(out) => {
            let mut file = OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(out)
                .with_context(|| format!("open preview output: {out}"))?;
            file.write_all(result.html.as_bytes())
                .with_context(|| format!("write preview output: {out}"))?;
            file.flush()
                .with_context(|| format!("flush preview output: {out}"))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(result.html.as_bytes())
                .context("write preview to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}

/// Options file (if any) with flag overrides on top.
fn effective_options(args: &ExportOptionArgs) -> anyhow::Result<ExportOptions> {
    let from_file = match &args.options {
        Some(path) => config::load_options(Path::new(path))?,
        None => ExportOptions::default(),
    };
    Ok(from_file.overlay(args.flag_overrides()))
}

/// Archive base name for a user: the local part of their email.
pub fn site_name_for(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("").trim();
    if local.is_empty() {
        archive::DEFAULT_SITE_NAME.to_owned()
    } else {
        local.to_owned()
    }
}
