use figment::providers::{Format, Json, Toml, Yaml};
use std::path::Path;

/// Configuration file formats understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

/// Smart configuration file loader that chooses the right format based on file extension
/// Returns a provider that can be directly used with figment.merge()
pub fn auto<P: AsRef<Path>>(path: P) -> impl figment::Provider {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let format = match extension.as_str() {
        "toml" => ConfigFormat::Toml,
        "json" => ConfigFormat::Json,
        "yaml" | "yml" => ConfigFormat::Yaml,
        _ => {
            // rc files carry no extension, so sniff the content
            let detected = std::fs::read_to_string(path)
                .ok()
                .and_then(|content| detect_format_from_content(&content));
            match detected {
                Some(format) => {
                    tracing::debug!("Detected {:?} format for {}", format, path.display());
                    format
                }
                None => {
                    tracing::debug!("Could not detect format for {}, assuming YAML", path.display());
                    ConfigFormat::Yaml
                }
            }
        }
    };

    match format {
        ConfigFormat::Toml => SmartProvider::Toml(Toml::file_exact(path)),
        ConfigFormat::Json => SmartProvider::Json(Json::file_exact(path)),
        ConfigFormat::Yaml => SmartProvider::Yaml(Yaml::file_exact(path)),
    }
}

/// Wrapper enum to handle different provider types
enum SmartProvider {
    Toml(figment::providers::Data<Toml>),
    Json(figment::providers::Data<Json>),
    Yaml(figment::providers::Data<Yaml>),
}

impl figment::Provider for SmartProvider {
    fn metadata(&self) -> figment::Metadata {
        match self {
            SmartProvider::Toml(p) => p.metadata(),
            SmartProvider::Json(p) => p.metadata(),
            SmartProvider::Yaml(p) => p.metadata(),
        }
    }

    fn data(
        &self,
    ) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, figment::Error> {
        match self {
            SmartProvider::Toml(p) => p.data(),
            SmartProvider::Json(p) => p.data(),
            SmartProvider::Yaml(p) => p.data(),
        }
    }
}

/// Attempt to detect configuration format from file content
fn detect_format_from_content(content: &str) -> Option<ConfigFormat> {
    let trimmed = content.trim();

    if trimmed.is_empty() {
        return None;
    }

    // JSON detection - starts with { and ends with }
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Some(ConfigFormat::Json);
    }

    let meaningful = || {
        trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
    };

    // TOML detection - [section] headers or a bare `key = value` first line
    if meaningful().any(|line| line.starts_with('[') && line.ends_with(']'))
        || meaningful().next().is_some_and(is_toml_assignment)
    {
        return Some(ConfigFormat::Toml);
    }

    // YAML detection - document separator or `key:` lines
    if trimmed.starts_with("---") || meaningful().any(|line| line.contains(':')) {
        return Some(ConfigFormat::Yaml);
    }

    None
}

fn is_toml_assignment(line: &str) -> bool {
    match (line.find('='), line.find(':')) {
        (Some(eq), Some(colon)) => eq < colon,
        (Some(_), None) => true,
        _ => false,
    }
}
