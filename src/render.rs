use crate::records::ModRecord;

const HEADER: &str = r#"variable "mods" {
  description = "List of mods to install on the server"
  type = list(object({
    name        = string
    url         = string
    version     = string
    description = string
    dependencies = optional(list(object({
      name    = string
      version = string
    })), [])
  }))
  default = [
"#;

const FOOTER: &str = "  ]\n}";

/// Genera el bloque `variable "mods"` de Terraform con un objeto por
/// record, en el orden de iteración recibido. Las comillas dentro de
/// `description` no se escapan (limitación conocida y asumida).
pub fn render_terraform<'a, I>(mods: I) -> String
where
    I: IntoIterator<Item = &'a ModRecord>,
{
    let mut out = String::from(HEADER);
    for record in mods {
        out.push_str(&render_mod(record));
        out.push_str(",\n");
    }
    out.push_str(FOOTER);
    out
}

fn render_mod(record: &ModRecord) -> String {
    let mut block = format!(
        r#"  {{
    name        = "{}"
    url         = "{}"
    version     = "{}"
    description = "{}""#,
        record.name, record.url, record.version, record.description
    );

    // Lista de dependencias vacía: el campo se omite por completo.
    if !record.dependencies.is_empty() {
        block.push_str("\n    dependencies = [");
        for dep in &record.dependencies {
            block.push_str(&format!(
                r#"
      {{
        name    = "{}"
        version = "{}"
      }},"#,
                dep.name, dep.version
            ));
        }
        block.push_str("\n    ]");
    }

    block.push_str("\n  }");
    block
}
