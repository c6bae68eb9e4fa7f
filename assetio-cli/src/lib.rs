//! Commands for the `assetio` CLI.

use anyhow::{Context, Result, bail};
use assetio_resolver::{ResolvedPath, Resolver};
use clap::Subcommand;
use std::io::Write;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the identifier for a path, optionally anchored to a resolved path
    Identifier {
        path: String,
        #[arg(short, long, default_value = "")]
        anchor: String,
    },
    /// Print the resolved path
    Resolve { path: String },
    /// Print the file format extension
    Extension { path: String },
    /// Print asset info as JSON
    Info { path: String },
    /// Print the modification time in seconds since the epoch
    Timestamp { path: String },
    /// Write the asset contents to stdout
    Cat { path: String },
    /// Report whether a new asset could be written at the path
    CanWrite { path: String },
}

/// Runs `command` against `resolver`, writing output to `out`.
pub fn run<R: Resolver>(resolver: &R, command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Identifier { path, anchor } => {
            let id = resolver.create_identifier(path, &ResolvedPath::new(anchor.as_str()))?;
            writeln!(out, "{id}")?;
        }
        Command::Resolve { path } => {
            writeln!(out, "{}", resolve_existing(resolver, path)?)?;
        }
        Command::Extension { path } => {
            writeln!(out, "{}", resolver.get_extension(path)?)?;
        }
        Command::Info { path } => {
            let resolved = resolve_existing(resolver, path)?;
            let info = resolver.get_asset_info(path, &resolved);
            writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        }
        Command::Timestamp { path } => {
            let resolved = resolve_existing(resolver, path)?;
            match resolver.get_modification_timestamp(path, &resolved).secs() {
                Some(secs) => writeln!(out, "{secs}")?,
                None => writeln!(out, "invalid")?,
            }
        }
        Command::Cat { path } => {
            let resolved = resolve_existing(resolver, path)?;
            let asset = resolver.open_asset(&resolved)?;
            let buffer = asset
                .buffer()
                .with_context(|| format!("failed to read {resolved}"))?;
            out.write_all(&buffer)?;
        }
        Command::CanWrite { path } => {
            let resolved = resolver.resolve_for_new_asset(path);
            let mut why_not = String::new();
            if resolver.can_write_asset_to_path(&resolved, Some(&mut why_not)) {
                writeln!(out, "yes")?;
            } else {
                writeln!(out, "no: {why_not}")?;
            }
        }
    }
    Ok(())
}

fn resolve_existing<R: Resolver>(resolver: &R, path: &str) -> Result<ResolvedPath> {
    let resolved = resolver.resolve(path);
    if resolved.is_empty() {
        bail!("could not resolve '{path}'");
    }
    Ok(resolved)
}
