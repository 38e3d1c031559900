use anyhow::Result;
use reqwest::Client;

use crate::models::PackageInfo;

/// Fetch package metadata from the PyPI JSON API.
///
/// Returns `Ok(None)` when the package does not exist or the response
/// carries no usable `info` block; `Err` on network failures.
pub async fn fetch_package(client: &Client, name: &str) -> Result<Option<PackageInfo>> {
    let url = format!("https://pypi.org/pypi/{}/json", name);

    let response = client
        .get(&url)
        .header("User-Agent", "license-compat/0.1.0 (license compliance tool)")
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let data: serde_json::Value = response.json().await?;
    Ok(parse_response(name, &data))
}

fn parse_response(name: &str, data: &serde_json::Value) -> Option<PackageInfo> {
    let info = data.get("info")?;

    let field = |key: &str| {
        info.get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    // Some uploads leave `license` blank and declare it via classifiers.
    let license = field("license")
        .or_else(|| classifier_license(info))
        .unwrap_or_default();

    Some(PackageInfo {
        name: field("name").unwrap_or_else(|| name.to_string()),
        version: field("version").unwrap_or_default(),
        license,
        homepage: field("home_page"),
        author: field("author"),
    })
}

fn classifier_license(info: &serde_json::Value) -> Option<String> {
    info.get("classifiers")?
        .as_array()?
        .iter()
        .filter_map(|v| v.as_str())
        .filter_map(|c| c.strip_prefix("License ::"))
        .filter_map(|rest| rest.rsplit("::").next())
        .map(str::trim)
        .find(|s| !s.is_empty() && *s != "OSI Approved")
        .map(str::to_string)
}
