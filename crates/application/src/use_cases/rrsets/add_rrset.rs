use std::sync::Arc;
use tracing::{info, instrument};
use zonectl_domain::zone::{is_in_zone, normalize_name};
use zonectl_domain::{DomainError, RRSet};

use crate::ports::ZoneApi;

pub struct AddRRSetUseCase {
    api: Arc<dyn ZoneApi>,
}

impl AddRRSetUseCase {
    pub fn new(api: Arc<dyn ZoneApi>) -> Self {
        Self { api }
    }

    /// Adds the records of `rrset` to the RRSet `name`/`record_type`.
    ///
    /// An existing RRSet is updated with the new records first and the
    /// existing ones after them; otherwise the RRSet is created. Returns the
    /// RRSet that was sent.
    #[instrument(skip(self, rrset), fields(records = rrset.records.len()))]
    pub async fn execute(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
        rrset: RRSet,
    ) -> Result<RRSet, DomainError> {
        let zone = normalize_name(zone);
        let name = normalize_name(name);

        if !is_in_zone(name, zone) {
            return Err(DomainError::RecordNotInZone {
                name: name.to_string(),
                zone: zone.to_string(),
            });
        }

        if let Some(idx) = rrset.records.iter().position(|r| !r.has_content()) {
            return Err(DomainError::EmptyContent(format!(
                "{} record #{} for {}",
                record_type, idx, name
            )));
        }

        let existing = self
            .api
            .rrset(zone, name, record_type)
            .await
            .map_err(|e| e.context("get record request"))?;

        match existing {
            Some(current) => {
                let merged = merge(rrset, current);
                self.api
                    .update_rrset(zone, name, record_type, &merged)
                    .await
                    .map_err(|e| e.context("update record request"))?;

                info!(
                    zone = %zone,
                    name = %name,
                    record_type = %record_type,
                    total = merged.records.len(),
                    "RRSet updated"
                );
                Ok(merged)
            }
            None => {
                self.api
                    .create_rrset(zone, name, record_type, &rrset)
                    .await
                    .map_err(|e| e.context("create record request"))?;

                info!(
                    zone = %zone,
                    name = %name,
                    record_type = %record_type,
                    total = rrset.records.len(),
                    "RRSet created"
                );
                Ok(rrset)
            }
        }
    }
}

fn merge(new: RRSet, current: RRSet) -> RRSet {
    let mut records = new.records;
    records.extend(current.records);

    let filters = if new.filters.is_empty() {
        current.filters
    } else {
        new.filters
    };

    RRSet {
        record_type: new.record_type,
        ttl: new.ttl,
        records,
        filters,
    }
}
