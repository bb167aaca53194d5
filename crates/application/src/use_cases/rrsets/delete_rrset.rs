use std::sync::Arc;
use tracing::{info, instrument};
use zonectl_domain::zone::normalize_name;
use zonectl_domain::DomainError;

use crate::ports::ZoneApi;

pub struct DeleteRRSetUseCase {
    api: Arc<dyn ZoneApi>,
}

impl DeleteRRSetUseCase {
    pub fn new(api: Arc<dyn ZoneApi>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, zone: &str, name: &str, record_type: &str) -> Result<(), DomainError> {
        let zone = normalize_name(zone);
        let name = normalize_name(name);

        self.api
            .delete_rrset(zone, name, record_type)
            .await
            .map_err(|e| e.context("delete record request"))?;

        info!(zone = %zone, name = %name, record_type = %record_type, "RRSet deleted");
        Ok(())
    }
}
