use reqwest::blocking::Client;
use serde::Deserialize;

use crate::fetch::PAGE_SIZE;
use crate::records::{DependencyRef, ModRecord};

const SEARCH_URL: &str = "https://api.modrinth.com/v2/search";

#[derive(Debug, Deserialize)]
struct SearchResults {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchHit {
    pub project_id: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModrinthVersion {
    pub version_number: String,
    pub files: Vec<ModFile>,
    #[serde(default)]
    pub dependencies: Vec<ModrinthDependency>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModFile {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModrinthDependency {
    pub project_id: Option<String>,
    pub version_id: Option<String>,
}

fn build_modrinth_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent("forge-modlist/0.1 (github.com/FarlopaINC)")
        .build()
}

/// Convierte un hit de búsqueda más su lista de versiones en un
/// `ModRecord`. Se toma la PRIMERA entrada tal cual llega (la API no
/// garantiza orden; no se reordena porque cambiaría la salida). Lista
/// de versiones vacía, o versión sin archivos, → el hit se descarta.
pub fn record_from_hit(hit: &SearchHit, versions: &[ModrinthVersion]) -> Option<ModRecord> {
    let latest = versions.first()?;
    let file = latest.files.first()?;

    let dependencies = latest
        .dependencies
        .iter()
        .filter_map(|dep| {
            dep.project_id.as_ref().map(|project_id| DependencyRef {
                name: project_id.clone(),
                version: dep
                    .version_id
                    .clone()
                    .unwrap_or_else(|| "any".to_string()),
            })
        })
        .collect();

    Some(ModRecord {
        name: hit.slug.clone(),
        url: file.url.clone(),
        version: latest.version_number.clone(),
        description: hit.description.clone().unwrap_or_default(),
        dependencies,
    })
}

/// Busca en Modrinth los mods compatibles con `minecraft_version` y
/// resuelve la versión más reciente de cada hit con una petición
/// adicional por proyecto (N+1, secuencial y bloqueante). Cualquier
/// fallo de red o de decodificación, incluido el de una petición
/// por proyecto, se imprime y la fuente entera devuelve lista vacía.
pub fn get_modrinth_mods(minecraft_version: &str) -> Vec<ModRecord> {
    match fetch_all(minecraft_version) {
        Ok(mods) => mods,
        Err(e) => {
            println!("❌ Error fetching from Modrinth: {}", e);
            vec![]
        }
    }
}

fn fetch_all(minecraft_version: &str) -> reqwest::Result<Vec<ModRecord>> {
    let hits = fetch_search_page(minecraft_version)?;
    let client = build_modrinth_client()?;
    collect_records(&hits, |hit| fetch_project_versions(&client, &hit.project_id))
}

/// Resuelve la lista de versiones de cada hit con `lookup` y acumula
/// los records. El primer fallo aborta la fuente entera: nunca se
/// devuelven resultados parciales.
pub fn collect_records<F, E>(hits: &[SearchHit], mut lookup: F) -> Result<Vec<ModRecord>, E>
where
    F: FnMut(&SearchHit) -> Result<Vec<ModrinthVersion>, E>,
{
    let mut mods = Vec::new();
    for hit in hits {
        let versions = lookup(hit)?;
        if let Some(record) = record_from_hit(hit, &versions) {
            mods.push(record);
        }
    }
    Ok(mods)
}

fn fetch_search_page(minecraft_version: &str) -> reqwest::Result<Vec<SearchHit>> {
    let client = build_modrinth_client()?;
    let facets = format!(
        "[[\"project_type:mod\"],[\"versions:{}\"]]",
        minecraft_version
    );
    let limit = PAGE_SIZE.to_string();
    let params = [("facets", facets.as_str()), ("limit", &limit)];

    let results: SearchResults = client
        .get(SEARCH_URL)
        .query(&params)
        .send()?
        .error_for_status()?
        .json()?;

    Ok(results.hits)
}

fn fetch_project_versions(client: &Client, project_id: &str) -> reqwest::Result<Vec<ModrinthVersion>> {
    let url = format!("https://api.modrinth.com/v2/project/{}/version", project_id);
    client.get(&url).send()?.error_for_status()?.json()
}
