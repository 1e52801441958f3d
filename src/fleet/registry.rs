use super::types::Endpoint;
use crate::config::EndpointConfig;
use crate::errors::FleetError;
use url::Url;

/// Static, ordered fleet membership
///
/// Built once at startup; names are expected to be unique but this is not
/// enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointRegistry {
    endpoints: Vec<Endpoint>,
}

impl EndpointRegistry {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    /// Validate config entries: non-empty name, absolute http(s) base URL
    pub fn from_config(entries: &[EndpointConfig]) -> Result<Self, FleetError> {
        let endpoints = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| validate_entry(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { endpoints })
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Endpoint> {
        self.endpoints.iter()
    }
}

fn validate_entry(index: usize, entry: &EndpointConfig) -> Result<Endpoint, FleetError> {
    let name = entry.name.trim();
    if name.is_empty() {
        return Err(FleetError::configuration(format!(
            "endpoints[{}]: name must not be empty",
            index
        )));
    }

    let url = Url::parse(entry.base_url.trim()).map_err(|e| {
        FleetError::configuration(format!(
            "endpoints[{}] ({}): invalid base_url '{}': {}",
            index, name, entry.base_url, e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FleetError::configuration(format!(
            "endpoints[{}] ({}): base_url must be http or https, got '{}'",
            index,
            name,
            url.scheme()
        )));
    }

    // keep the operator's spelling; the fetcher normalizes trailing slashes
    Ok(Endpoint::new(name, entry.base_url.trim()))
}
