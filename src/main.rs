use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use forge_modlist::fetch::{curseforge_api, modrinth_api, usable_key};
use forge_modlist::records;
use forge_modlist::render;
use forge_modlist::version;

/// List mods compatible with a Forge version and render them as a
/// Terraform variable block.
#[derive(Debug, Parser)]
#[command(name = "forge-modlist", version, about)]
struct Cli {
    /// Forge version (e.g., 1.20.1-47.2.0)
    forge_version: String,

    /// Output file for Terraform configuration (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// CurseForge API key (required for CurseForge mods)
    #[arg(short = 'k', long)]
    curseforge_key: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validación de entrada: sin versión de Minecraft válida no se toca
    // la red ni se produce salida parcial.
    let Some(minecraft_version) = version::parse_minecraft_version(&cli.forge_version) else {
        bail!("Invalid Forge version format: '{}'", cli.forge_version);
    };

    println!(
        "🔍 Fetching mods compatible with Minecraft {}...",
        minecraft_version
    );

    // La key se comprueba una sola vez aquí: el fetcher de CurseForge
    // nunca se invoca sin credencial.
    let curseforge_mods = match usable_key(cli.curseforge_key.as_deref()) {
        Some(key) => curseforge_api::get_curseforge_mods(&minecraft_version, key),
        None => {
            println!("Skipping CurseForge mods (no API key provided)");
            vec![]
        }
    };

    let modrinth_mods = modrinth_api::get_modrinth_mods(&minecraft_version);

    let merged = records::merge(curseforge_mods, modrinth_mods);

    let missing = records::missing_dependencies(&merged);
    if missing.is_empty() {
        println!("✅ All referenced dependencies are present in the result set");
    } else {
        println!(
            "⚠️ {} referenced dependencies missing from the result set:",
            missing.len()
        );
        for name in &missing {
            println!("  - {}", name);
        }
    }

    let terraform_config = render::render_terraform(merged.values());

    match &cli.output {
        Some(path) => {
            fs::write(path, &terraform_config)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Configuration written to {}", path.display());
        }
        None => println!("{}", terraform_config),
    }

    Ok(())
}
