use crate::build_order::domain::ResolvedList;
use crate::build_order::services::Resolver;
use crate::ports::outbound::BuildOrderFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BuildOrderDocument<'a> {
    tool: Tool,
    packages: Vec<PackageOrder<'a>>,
    #[serde(rename = "buildOrder")]
    build_order: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct PackageOrder<'a> {
    package: &'a str,
    resolved: &'a [String],
}

/// JsonFormatter adapter for a machine-readable aggregate
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildOrderFormatter for JsonFormatter {
    fn format(&self, resolved: &[ResolvedList]) -> Result<String> {
        let document = BuildOrderDocument {
            tool: Tool {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            packages: resolved
                .iter()
                .map(|list| PackageOrder {
                    package: list.package(),
                    resolved: list.lines(),
                })
                .collect(),
            build_order: Resolver::concatenate(resolved),
        };

        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize build order to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
