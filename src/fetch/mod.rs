pub mod curseforge_api;
pub mod modrinth_api;

/// Tamaño de página único para ambas fuentes. Una sola página por
/// ejecución: no hay bucle de paginación.
pub const PAGE_SIZE: u32 = 50;

/// Normaliza la credencial de CurseForge. Una key ausente o en blanco
/// desactiva la fuente entera: el fetcher nunca se invoca sin key.
pub fn usable_key(key: Option<&str>) -> Option<&str> {
    key.filter(|k| !k.trim().is_empty())
}
