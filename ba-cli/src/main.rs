//! ba-convert - converts one Java model into Bedrock pack files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ba_bedrock::{BuiltObject, ModelBuilder, SourceObject};
use ba_utils::{ConverterConfig, ObjectKind};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ba-convert")]
#[command(about = "Convert a Java block/item model into Bedrock geometry and attachable files")]
#[command(version)]
struct Cli {
    /// Java model JSON
    #[arg(short, long)]
    model: PathBuf,

    #[arg(short, long)]
    namespace: String,

    #[arg(short, long)]
    id: String,

    /// item, block, furniture or helmet
    #[arg(short, long, default_value = "item")]
    kind: ObjectKind,

    /// Texture slot as `slot=path`; repeat for every slot the model uses
    #[arg(short, long = "texture", value_parser = parse_texture_slot)]
    textures: Vec<(String, PathBuf)>,

    /// Icon PNG to use instead of rendering one
    #[arg(long)]
    icon: Option<PathBuf>,

    /// Converter config (defaults to $BEDROCKADDER_CONFIG or bedrockadder.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resource pack root the files are written under
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Fail when the model produced no geometry
    #[arg(long)]
    strict: bool,
}

fn parse_texture_slot(raw: &str) -> Result<(String, PathBuf), String> {
    let Some((slot, path)) = raw.split_once('=') else {
        return Err(format!("expected slot=path, got `{raw}`"));
    };
    let slot = slot.trim();
    if slot.is_empty() || path.trim().is_empty() {
        return Err(format!("expected slot=path, got `{raw}`"));
    }
    Ok((slot.to_string(), PathBuf::from(path.trim())))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ConverterConfig::load_or_default(cli.config.as_deref());

    let mut source = SourceObject::new(cli.kind, &cli.namespace, &cli.id).with_model(&cli.model);
    source.texture_slots.extend(cli.textures);
    source.icon_path = cli.icon;

    let built = ModelBuilder::new(config).build(&source, None);
    for note in &built.notes {
        warn!("{}: {note}", built.bedrock_identifier);
    }
    if !built.has_geometry() {
        if cli.strict {
            bail!("{} produced no geometry", built.bedrock_identifier);
        }
        return Ok(());
    }

    write_pack(&built, &cli.out)?;
    info!("wrote {} to {}", built.bedrock_identifier, cli.out.display());
    Ok(())
}

/// Writes both documents, performs the copy plan and copies the icon.
fn write_pack(built: &BuiltObject, out: &Path) -> Result<()> {
    write_file(&out.join(&built.geometry_rel), built.geometry_json.as_bytes())?;
    if !built.attachable_json.is_empty() {
        write_file(&out.join(&built.attachable_rel), built.attachable_json.as_bytes())?;
    }

    for copy in &built.textures_to_copy {
        copy_file(&copy.source, &out.join(&copy.destination))?;
    }
    if let Some(icon) = &built.icon_path {
        copy_file(icon, &out.join(&built.icon_rel))?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    ensure_parent(to)?;
    fs::copy(from, to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ba_bedrock::CopyInstruction;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn texture_arguments() {
        assert_eq!(
            parse_texture_slot("0=/tmp/a b.png").unwrap(),
            ("0".to_string(), PathBuf::from("/tmp/a b.png"))
        );
        assert!(parse_texture_slot("nopath").is_err());
        assert!(parse_texture_slot("=x.png").is_err());
        assert!(parse_texture_slot("0=").is_err());

        let cli = Cli::try_parse_from([
            "ba-convert",
            "--model",
            "chair.json",
            "--namespace",
            "decor",
            "--id",
            "chair",
            "--kind",
            "Furniture",
            "-t",
            "0=wood.png",
            "-t",
            "seat=cloth.png",
        ])
        .unwrap();
        assert_eq!(cli.kind, ObjectKind::Furniture);
        assert_eq!(cli.textures.len(), 2);
        assert_eq!(cli.out, PathBuf::from("."));
    }

    #[test]
    fn writes_documents_and_copies() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let texture = src.path().join("wood.png");
        fs::write(&texture, b"png bytes").unwrap();

        let mut built = BuiltObject::named(ObjectKind::Block, "deco", "lamp");
        built.geometry_json = "{\"geo\":1}".to_string();
        built.attachable_json = "{\"att\":1}".to_string();
        built.textures_to_copy.push(CopyInstruction {
            source: texture.clone(),
            destination: "textures/models/deco/wood.png".to_string(),
        });
        built.icon_path = Some(texture);

        write_pack(&built, out.path()).unwrap();
        let root = out.path();
        assert_eq!(
            fs::read_to_string(root.join("models/entity/deco/lamp.geo.json")).unwrap(),
            "{\"geo\":1}"
        );
        assert!(root.join("attachables/deco/lamp.json").is_file());
        assert!(root.join("textures/models/deco/wood.png").is_file());
        assert!(root.join("textures/items/deco/lamp.png").is_file());
    }
}
