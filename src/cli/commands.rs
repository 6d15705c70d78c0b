//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::codec::PhoneticCodec;
use crate::distance::lcsr;
use crate::resources::{ResourceBundle, ResourceConfig};
use crate::script::{self, ENGLISH};
use crate::serialization::{BincodeSerializer, BundleSerializer, JsonSerializer};
use crate::vector::properties::property_value;
use crate::vector::{PhoneticProperty, PhoneticVector};

use super::args::{Cli, Commands, SnapshotFormat};

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let Cli {
        resources,
        snapshot,
        command,
    } = cli;
    let source = BundleSource { resources, snapshot };

    match command {
        Commands::Vector { ch, lang } => cmd_vector(&source, ch, &lang),
        Commands::Offset { ch, lang } => cmd_offset(ch, &lang),
        Commands::Lcsr {
            source: src,
            target,
            slang,
            tlang,
        } => cmd_lcsr(&src, &target, &slang, &tlang),
        Commands::Properties => cmd_properties(),
        Commands::Phoneme { symbol } => cmd_phoneme(&source, &symbol),
        Commands::Snapshot { output, format } => cmd_snapshot(&source, &output, format),
    }
}

/// Where the bundle comes from.
struct BundleSource {
    resources: Option<PathBuf>,
    snapshot: Option<PathBuf>,
}

impl BundleSource {
    fn load(&self) -> Result<ResourceBundle> {
        if let Some(path) = &self.snapshot {
            return load_snapshot(path);
        }
        let config = ResourceConfig::resolve(self.resources.clone())
            .context("Failed to resolve resource directory")?;
        ResourceBundle::load(&config).with_context(|| {
            format!(
                "Failed to load phonetic resources from {}",
                config.root().display()
            )
        })
    }
}

/// Read a bundle snapshot, picking the format from the file extension.
pub fn load_snapshot(path: &Path) -> Result<ResourceBundle> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open snapshot: {}", path.display()))?;
    let reader = BufReader::new(file);
    let bundle = match SnapshotFormat::from_path(path) {
        SnapshotFormat::Bincode => BincodeSerializer::deserialize(reader),
        SnapshotFormat::Json => JsonSerializer::deserialize(reader),
    }
    .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    Ok(bundle)
}

fn print_fields(v: &PhoneticVector) {
    for property in PhoneticProperty::ALL {
        let range = property.range();
        println!(
            "  {:<20} [{:>2}, {:>2})  {}  = {}",
            property.name(),
            range.start,
            range.end,
            v.slice(range.clone()),
            property_value(v, property).to_string().green()
        );
    }
}

fn cmd_vector(source: &BundleSource, ch: char, lang: &str) -> Result<()> {
    let bundle = source.load()?;
    let codec = PhoneticCodec::new(&bundle);
    let v = codec.feature_vector(ch, lang)?;

    println!("{}", "Phonetic Vector".bold().underline());
    println!();
    println!("  Char:    {} (U+{:04X})", ch, ch as u32);
    println!("  Lang:    {}", lang.cyan());
    if lang != ENGLISH {
        println!("  Offset:  {}", script::to_offset(ch, lang)?);
    }
    println!("  Vector:  {}", v.to_string().yellow());
    if !v.is_valid() {
        println!("  {}", "no phonetic information (invalid vector)".red());
        return Ok(());
    }
    println!();
    print_fields(&v);
    Ok(())
}

fn cmd_offset(ch: char, lang: &str) -> Result<()> {
    let offset = script::to_offset(ch, lang)?;
    println!("  Offset:       {} (0x{:X})", offset.to_string().green(), offset);
    println!("  Script char:  {}", script::is_script_char(ch, lang)?);
    println!(
        "  Coordinated:  {}",
        script::in_coordinated_range_offset(offset)
    );
    Ok(())
}

fn cmd_lcsr(source: &str, target: &str, slang: &str, tlang: &str) -> Result<()> {
    let score = lcsr(source, target, slang, tlang);
    println!(
        "{:.4}\t{}\t{}",
        score.ratio, score.source_len, score.target_len
    );
    Ok(())
}

fn cmd_properties() -> Result<()> {
    println!("{}", "Phonetic Properties".bold().underline());
    println!();
    for property in PhoneticProperty::ALL {
        let range = property.range();
        println!(
            "  {:<20} [{:>2}, {:>2})  {} bits",
            property.name().cyan(),
            range.start,
            range.end,
            property.width()
        );
    }
    Ok(())
}

fn cmd_phoneme(source: &BundleSource, symbol: &str) -> Result<()> {
    let bundle = source.load()?;
    let codec = PhoneticCodec::new(&bundle);
    let id = codec.phoneme_to_offset(symbol)?;
    let enc = codec.phoneme_to_enc(symbol)?;
    let v = codec.phoneme_feature_vector(symbol)?;

    println!("  Phoneme:  {}", symbol.cyan());
    println!("  Id:       {}", id.to_string().green());
    println!("  Enc:      U+{:04X}", enc as u32);
    println!("  Vector:   {}", v.to_string().yellow());
    if v.is_valid() {
        println!();
        print_fields(&v);
    }
    Ok(())
}

fn cmd_snapshot(source: &BundleSource, output: &Path, format: SnapshotFormat) -> Result<()> {
    let bundle = source.load()?;
    let file = File::create(output)
        .with_context(|| format!("Failed to create snapshot: {}", output.display()))?;
    let writer = BufWriter::new(file);
    match format {
        SnapshotFormat::Bincode => BincodeSerializer::serialize(&bundle, writer),
        SnapshotFormat::Json => JsonSerializer::serialize(&bundle, writer),
    }
    .with_context(|| format!("Failed to write snapshot: {}", output.display()))?;

    println!(
        "{} {} snapshot to {}",
        "Wrote".green(),
        format,
        output.display()
    );
    Ok(())
}
