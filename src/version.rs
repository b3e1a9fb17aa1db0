use once_cell::sync::Lazy;
use regex::Regex;

static FORGE_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.\d+\.\d+)-\d+\.\d+\.\d+").unwrap());

/// Extrae la versión de Minecraft de una versión de Forge.
/// `"1.20.1-47.2.0"` → `Some("1.20.1")`; cualquier otra forma → `None`.
pub fn parse_minecraft_version(forge_version: &str) -> Option<String> {
    FORGE_VERSION
        .captures(forge_version)
        .map(|caps| caps[1].to_string())
}
