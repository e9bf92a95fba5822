use crate::ports::outbound::{OutdatedRelease, ReleaseListing};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

/// Shapes accepted from `helm whatup --output json`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WhatupOutput {
    Bare(Vec<OutdatedRelease>),
    Wrapped { releases: Vec<OutdatedRelease> },
}

/// Parses `helm list --all-namespaces --output json`
///
/// Empty output and JSON `null` mean "no releases".
pub fn parse_release_list(stdout: &[u8]) -> Result<Vec<ReleaseListing>> {
    let text = decode(stdout)?;
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let listings: Option<Vec<ReleaseListing>> =
        serde_json::from_str(text).context("helm list returned malformed JSON")?;
    Ok(listings.unwrap_or_default())
}

/// Parses `helm whatup --output json`, bare array or `{"releases": [...]}`
pub fn parse_outdated_releases(stdout: &[u8]) -> Result<Vec<OutdatedRelease>> {
    let text = decode(stdout)?;
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let output: Option<WhatupOutput> =
        serde_json::from_str(text).context("helm whatup returned malformed JSON")?;
    Ok(match output {
        Some(WhatupOutput::Bare(releases)) => releases,
        Some(WhatupOutput::Wrapped { releases }) => releases,
        None => Vec::new(),
    })
}

fn decode(stdout: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(stdout)
        .context("helm output is not valid UTF-8")?
        .trim())
}
