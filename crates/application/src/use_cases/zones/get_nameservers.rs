use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};
use zonectl_domain::zone::normalize_name;
use zonectl_domain::{DomainError, RecordType};

use crate::ports::ZoneApi;

pub struct GetZoneNameserversUseCase {
    api: Arc<dyn ZoneApi>,
}

impl GetZoneNameserversUseCase {
    pub fn new(api: Arc<dyn ZoneApi>) -> Self {
        Self { api }
    }

    /// NS targets of the zone in first-seen order, without duplicates.
    #[instrument(skip(self))]
    pub async fn execute(&self, zone: &str) -> Result<Vec<String>, DomainError> {
        let zone = normalize_name(zone);

        let rrsets = self
            .api
            .zone_rrsets(zone)
            .await
            .map_err(|e| e.context(format!("get rrsets {}", zone)))?;

        let mut seen = HashSet::new();
        let nameservers: Vec<String> = rrsets
            .iter()
            .filter(|rrset| rrset.is_type(RecordType::NS.as_str()))
            .flat_map(|rrset| rrset.records.iter())
            .flat_map(|record| record.content.iter())
            .map(|value| value.to_string())
            .filter(|ns| seen.insert(ns.clone()))
            .collect();

        debug!(zone = %zone, count = nameservers.len(), "Collected zone nameservers");
        Ok(nameservers)
    }
}
