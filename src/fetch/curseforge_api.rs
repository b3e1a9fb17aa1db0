use reqwest::blocking::Client;
use reqwest::header;
use serde::Deserialize;

use crate::fetch::PAGE_SIZE;
use crate::records::{DependencyRef, ModRecord};

const SEARCH_URL: &str = "https://api.curseforge.com/v1/mods/search";

// IDs fijos de la plataforma: juego Minecraft, categoría Mods,
// orden por popularidad descendente.
const GAME_ID_MINECRAFT: &str = "432";
const CLASS_ID_MODS: &str = "6";
const SORT_FIELD_POPULARITY: &str = "2";

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurseMod {
    pub slug: String,
    pub summary: Option<String>,
    #[serde(default)]
    pub latest_files: Vec<CurseFile>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurseFile {
    pub display_name: String,
    pub download_url: Option<String>,
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<CurseDependency>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurseDependency {
    pub mod_id: Option<u64>,
    pub version: Option<String>,
}

fn build_curse_client(api_key: &str) -> reqwest::Result<Client> {
    let mut headers = header::HeaderMap::new();
    // Una key con caracteres no representables en una cabecera se omite;
    // el servidor responderá 401 y el fallo se trata como cualquier otro.
    if let Ok(value) = header::HeaderValue::from_str(api_key) {
        headers.insert("x-api-key", value);
    }
    Client::builder().default_headers(headers).build()
}

/// Convierte un mod de CurseForge en un `ModRecord`: se toma el PRIMER
/// archivo de `latestFiles` (en el orden recibido) cuyo `gameVersions`
/// contenga exactamente la versión objetivo. Sin archivo compatible,
/// el mod no aporta nada.
pub fn record_from_mod(curse_mod: &CurseMod, minecraft_version: &str) -> Option<ModRecord> {
    let file = curse_mod
        .latest_files
        .iter()
        .find(|f| f.game_versions.iter().any(|v| v == minecraft_version))?;

    let dependencies = file
        .dependencies
        .iter()
        .filter(|dep| dep.mod_id.is_some())
        .map(|dep| DependencyRef {
            name: dep
                .mod_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            version: dep.version.clone().unwrap_or_else(|| "any".to_string()),
        })
        .collect();

    Some(ModRecord {
        name: curse_mod.slug.clone(),
        url: file.download_url.clone().unwrap_or_default(),
        version: file.display_name.clone(),
        description: curse_mod.summary.clone().unwrap_or_default(),
        dependencies,
    })
}

/// Busca en CurseForge los mods compatibles con `minecraft_version`.
/// Cualquier fallo de red o de decodificación se imprime y devuelve
/// lista vacía: un fallo aquí nunca aborta la ejecución.
pub fn get_curseforge_mods(minecraft_version: &str, api_key: &str) -> Vec<ModRecord> {
    match fetch_search_page(api_key) {
        Ok(mods) => mods
            .iter()
            .filter_map(|m| record_from_mod(m, minecraft_version))
            .collect(),
        Err(e) => {
            println!("❌ Error fetching from CurseForge: {}", e);
            vec![]
        }
    }
}

// La búsqueda no filtra por versión en el servidor: el filtrado por
// `gameVersions` se hace archivo a archivo en `record_from_mod`.
fn fetch_search_page(api_key: &str) -> reqwest::Result<Vec<CurseMod>> {
    let client = build_curse_client(api_key)?;
    let page_size = PAGE_SIZE.to_string();
    let params = [
        ("gameId", GAME_ID_MINECRAFT),
        ("classId", CLASS_ID_MODS),
        ("sortField", SORT_FIELD_POPULARITY),
        ("sortOrder", "desc"),
        ("pageSize", &page_size),
    ];

    let response: ApiResponse<Vec<CurseMod>> = client
        .get(SEARCH_URL)
        .query(&params)
        .send()?
        .error_for_status()?
        .json()?;

    Ok(response.data)
}
