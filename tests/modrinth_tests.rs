use forge_modlist::fetch::modrinth_api::{
    collect_records, record_from_hit, ModrinthVersion, SearchHit,
};

fn parse_hit(json: &str) -> SearchHit {
    serde_json::from_str(json).expect("hit fixture should deserialize")
}

fn parse_versions(json: &str) -> Vec<ModrinthVersion> {
    serde_json::from_str(json).expect("version fixture should deserialize")
}

const SODIUM_HIT: &str = r#"{
    "project_id": "AANobbMI",
    "slug": "sodium",
    "description": "A modern rendering engine"
}"#;

const SODIUM_VERSIONS: &str = r#"[
    {
        "version_number": "0.5.8",
        "files": [
            { "url": "https://cdn.modrinth.com/data/AANobbMI/0.5.8/sodium.jar" },
            { "url": "https://cdn.modrinth.com/data/AANobbMI/0.5.8/sodium-sources.jar" }
        ],
        "dependencies": [
            { "project_id": "P7dR8mSH", "version_id": "99v3r1d" },
            { "project_id": null, "version_id": "ignored" },
            { "project_id": "mOgUt4GM", "version_id": null }
        ]
    },
    {
        "version_number": "0.5.7",
        "files": [
            { "url": "https://cdn.modrinth.com/data/AANobbMI/0.5.7/sodium.jar" }
        ]
    }
]"#;

#[test]
fn test_takes_first_version_entry() {
    let record = record_from_hit(&parse_hit(SODIUM_HIT), &parse_versions(SODIUM_VERSIONS))
        .expect("should produce a record");

    assert_eq!(record.name, "sodium");
    assert_eq!(record.version, "0.5.8", "First entry wins, no re-sorting");
    assert_eq!(
        record.url,
        "https://cdn.modrinth.com/data/AANobbMI/0.5.8/sodium.jar",
        "URL comes from the version's first file"
    );
    assert_eq!(record.description, "A modern rendering engine");
}

#[test]
fn test_filters_dependencies_without_project_id() {
    let record =
        record_from_hit(&parse_hit(SODIUM_HIT), &parse_versions(SODIUM_VERSIONS)).unwrap();

    assert_eq!(record.dependencies.len(), 2);
    assert_eq!(record.dependencies[0].name, "P7dR8mSH");
    assert_eq!(record.dependencies[0].version, "99v3r1d");
    assert_eq!(record.dependencies[1].name, "mOgUt4GM");
    assert_eq!(record.dependencies[1].version, "any");
}

#[test]
fn test_empty_version_list_skips_hit() {
    assert!(
        record_from_hit(&parse_hit(SODIUM_HIT), &[]).is_none(),
        "A hit with no versions contributes zero records"
    );
}

#[test]
fn test_version_without_files_skips_hit() {
    let versions = parse_versions(r#"[{ "version_number": "1.0.0", "files": [] }]"#);
    assert!(record_from_hit(&parse_hit(SODIUM_HIT), &versions).is_none());
}

fn hit(slug: &str) -> SearchHit {
    SearchHit {
        project_id: format!("id-{}", slug),
        slug: slug.to_string(),
        description: None,
    }
}

fn one_version(slug: &str) -> Vec<ModrinthVersion> {
    parse_versions(&format!(
        r#"[{{ "version_number": "1.0.0", "files": [{{ "url": "https://example.com/{}.jar" }}] }}]"#,
        slug
    ))
}

#[test]
fn test_version_lookup_failure_aborts_whole_source() {
    let hits = [hit("first"), hit("second"), hit("third")];

    // El segundo proyecto falla: la fuente entera no aporta nada,
    // nunca resultados parciales con los hits que sí respondieron.
    let result = collect_records(&hits, |h| {
        if h.slug == "second" {
            Err("connection timed out".to_string())
        } else {
            Ok(one_version(&h.slug))
        }
    });

    assert_eq!(
        result,
        Err("connection timed out".to_string()),
        "One failed version lookup must abort the entire Modrinth fetch"
    );
}

#[test]
fn test_collect_records_keeps_hit_order_and_skips_empty() {
    let hits = [hit("a"), hit("empty"), hit("b")];

    let result: Result<_, String> = collect_records(&hits, |h| {
        if h.slug == "empty" {
            Ok(vec![])
        } else {
            Ok(one_version(&h.slug))
        }
    });

    let records = result.expect("no lookup failed");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"], "Versionless hits are skipped, order kept");
}

#[test]
fn test_missing_description_maps_to_empty_string() {
    let hit = parse_hit(r#"{ "project_id": "abc123ab", "slug": "quiet-mod", "description": null }"#);
    let versions = parse_versions(
        r#"[{ "version_number": "1.0.0", "files": [{ "url": "https://example.com/q.jar" }] }]"#,
    );
    let record = record_from_hit(&hit, &versions).unwrap();
    assert_eq!(record.description, "");
    assert!(record.dependencies.is_empty());
}
