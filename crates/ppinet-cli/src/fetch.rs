//! HTTP retrieval of raw interaction payloads.

use anyhow::{Context, Result, bail};
use ppinet_core::config::BIOGRID_KEY_ENV;
use ppinet_core::{PpiConfig, SourceSchema};
use serde_json::Value;
use tracing::{debug, info};

/// Query parameters for one source's REST endpoint.
pub fn request_params(
    schema: SourceSchema,
    protein: &str,
    config: &PpiConfig,
) -> Result<Vec<(&'static str, String)>> {
    match schema {
        SourceSchema::BioGrid => {
            let Some(key) = config.biogrid.access_key.as_deref() else {
                bail!(
                    "BioGRID requires an access key: set [biogrid] access_key in the config file or {BIOGRID_KEY_ENV}"
                );
            };
            Ok(vec![
                ("searchNames", "true".to_string()),
                ("geneList", protein.to_string()),
                ("format", "json".to_string()),
                ("accesskey", key.to_string()),
            ])
        }
        SourceSchema::StringDb => Ok(vec![
            ("identifiers", protein.to_string()),
            ("species", config.string.species.to_string()),
        ]),
    }
}

fn base_url(schema: SourceSchema, config: &PpiConfig) -> &str {
    match schema {
        SourceSchema::BioGrid => config.biogrid.base_url.as_str(),
        SourceSchema::StringDb => config.string.base_url.as_str(),
    }
}

/// Fetch the raw JSON payload for `protein` from `schema`'s endpoint.
pub fn fetch_payload(schema: SourceSchema, protein: &str, config: &PpiConfig) -> Result<Value> {
    let params = request_params(schema, protein, config)?;
    let url = base_url(schema, config);

    let mut request = ureq::get(url).set("User-Agent", "ppinet-cli");
    for (name, value) in &params {
        request = request.query(name, value);
    }

    info!(source = %schema, protein, "fetching interactions");
    let response = request
        .call()
        .map_err(|err| anyhow::anyhow!("{schema} request failed for {protein}: {err}"))?;

    let payload: Value = response
        .into_json()
        .with_context(|| format!("failed to decode {schema} JSON response"))?;
    debug!(source = %schema, kind = json_kind(&payload), "received payload");
    Ok(payload)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
