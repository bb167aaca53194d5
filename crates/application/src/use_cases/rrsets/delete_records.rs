use std::sync::Arc;
use tracing::{debug, info, instrument};
use zonectl_domain::zone::normalize_name;
use zonectl_domain::{DomainError, RRSet};

use crate::ports::ZoneApi;

pub struct DeleteRRSetRecordsUseCase {
    api: Arc<dyn ZoneApi>,
}

impl DeleteRRSetRecordsUseCase {
    pub fn new(api: Arc<dyn ZoneApi>) -> Self {
        Self { api }
    }

    /// Removes the records whose rendered content equals one of `contents`.
    ///
    /// The RRSet is deleted when no record remains. Returns the number of
    /// records removed.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
        contents: &[&str],
    ) -> Result<usize, DomainError> {
        let zone = normalize_name(zone);
        let name = normalize_name(name);

        let current = self
            .api
            .rrset(zone, name, record_type)
            .await
            .map_err(|e| e.context("get record request"))?
            .ok_or_else(|| {
                DomainError::RRSetNotFound(format!("{}/{}/{}", zone, name, record_type))
            })?;

        let before = current.records.len();
        let remaining: Vec<_> = current
            .records
            .into_iter()
            .filter(|r| !contents.contains(&r.content_string().as_str()))
            .collect();
        let removed = before - remaining.len();

        if removed == 0 {
            debug!(zone = %zone, name = %name, "No matching records to delete");
            return Ok(0);
        }

        if remaining.is_empty() {
            self.api
                .delete_rrset(zone, name, record_type)
                .await
                .map_err(|e| e.context("delete record request"))?;
            info!(zone = %zone, name = %name, record_type = %record_type, "RRSet deleted");
            return Ok(removed);
        }

        let updated = RRSet {
            record_type: current.record_type,
            ttl: current.ttl,
            records: remaining,
            filters: current.filters,
        };
        self.api
            .update_rrset(zone, name, record_type, &updated)
            .await
            .map_err(|e| e.context("update record request"))?;

        info!(
            zone = %zone,
            name = %name,
            record_type = %record_type,
            removed = removed,
            "RRSet records deleted"
        );
        Ok(removed)
    }
}
