use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Un mod compatible con la versión objetivo, ya normalizado
/// (da igual de qué API venga). Inmutable una vez construido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModRecord {
    pub name: String,
    pub url: String,
    pub version: String,
    pub description: String,
    pub dependencies: Vec<DependencyRef>,
}

/// Referencia declarada a otro mod. No se resuelve a un `ModRecord`;
/// solo sirve para detectar huecos en el conjunto descargado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    pub name: String,
    pub version: String,
}

/// Combina los resultados de ambas fuentes en un solo mapa por slug.
/// CurseForge entra primero; Modrinth después, así que en caso de
/// colisión de nombre gana Modrinth (el último que escribe).
pub fn merge(curseforge: Vec<ModRecord>, modrinth: Vec<ModRecord>) -> IndexMap<String, ModRecord> {
    let mut merged = IndexMap::new();
    for record in curseforge.into_iter().chain(modrinth) {
        merged.insert(record.name.clone(), record);
    }
    merged
}

/// Nombres de dependencia referenciados por algún record pero ausentes
/// como clave del mapa. Puramente informativo: no muta el mapa ni
/// dispara ninguna descarga.
pub fn missing_dependencies(merged: &IndexMap<String, ModRecord>) -> BTreeSet<String> {
    let referenced: BTreeSet<&str> = merged
        .values()
        .flat_map(|record| record.dependencies.iter())
        .map(|dep| dep.name.as_str())
        .collect();

    referenced
        .into_iter()
        .filter(|name| !merged.contains_key(*name))
        .map(str::to_string)
        .collect()
}
