use async_trait::async_trait;
use zonectl_application::ports::ZoneApi;
use zonectl_domain::config::ApiConfig;
use zonectl_domain::{DomainError, RRSet};

/// `ZoneApi` that prints the requests it would send and treats every RRSet
/// as absent.
pub struct DryRunZoneApi {
    api: ApiConfig,
}

impl DryRunZoneApi {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }

    fn print(
        &self,
        method: &str,
        zone: &str,
        name: &str,
        record_type: &str,
        body: Option<&RRSet>,
    ) -> Result<(), DomainError> {
        println!("{} {}", method, self.api.rrset_url(zone, name, record_type));
        if let Some(rrset) = body {
            let json = serde_json::to_string_pretty(rrset)
                .map_err(|e| DomainError::Serialization(e.to_string()))?;
            println!("{}", json);
        }
        Ok(())
    }
}

#[async_trait]
impl ZoneApi for DryRunZoneApi {
    async fn zone_rrsets(&self, _zone: &str) -> Result<Vec<RRSet>, DomainError> {
        Ok(Vec::new())
    }

    async fn rrset(
        &self,
        _zone: &str,
        _name: &str,
        _record_type: &str,
    ) -> Result<Option<RRSet>, DomainError> {
        Ok(None)
    }

    async fn create_rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
        rrset: &RRSet,
    ) -> Result<(), DomainError> {
        self.print("POST", zone, name, record_type, Some(rrset))
    }

    async fn update_rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
        rrset: &RRSet,
    ) -> Result<(), DomainError> {
        self.print("PUT", zone, name, record_type, Some(rrset))
    }

    async fn delete_rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
    ) -> Result<(), DomainError> {
        self.print("DELETE", zone, name, record_type, None)
    }
}
