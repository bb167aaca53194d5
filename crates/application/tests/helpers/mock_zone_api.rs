#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use zonectl_application::ports::ZoneApi;
use zonectl_domain::{DomainError, RRSet};

type RRSetKey = (String, String, String);

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ZoneRRSets(String),
    Get(String, String, String),
    Create(String, String, String, RRSet),
    Update(String, String, String, RRSet),
    Delete(String, String, String),
}

#[derive(Clone, Default)]
pub struct MockZoneApi {
    rrsets: Arc<RwLock<HashMap<RRSetKey, RRSet>>>,
    zone_rrsets: Arc<RwLock<HashMap<String, Vec<RRSet>>>>,
    calls: Arc<RwLock<Vec<ApiCall>>>,
    failure: Arc<RwLock<Option<DomainError>>>,
}

fn key(zone: &str, name: &str, record_type: &str) -> RRSetKey {
    (zone.to_string(), name.to_string(), record_type.to_string())
}

impl MockZoneApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_rrset(&self, zone: &str, name: &str, record_type: &str, rrset: RRSet) {
        self.rrsets
            .write()
            .await
            .insert(key(zone, name, record_type), rrset);
    }

    pub async fn set_zone_rrsets(&self, zone: &str, rrsets: Vec<RRSet>) {
        self.zone_rrsets
            .write()
            .await
            .insert(zone.to_string(), rrsets);
    }

    /// Every following call fails with `error`.
    pub async fn fail_with(&self, error: DomainError) {
        *self.failure.write().await = Some(error);
    }

    pub async fn get(&self, zone: &str, name: &str, record_type: &str) -> Option<RRSet> {
        self.rrsets
            .read()
            .await
            .get(&key(zone, name, record_type))
            .cloned()
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: ApiCall) -> Result<(), DomainError> {
        self.calls.write().await.push(call);
        match self.failure.read().await.clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

pub fn api_error(status_code: u16, message: &str) -> DomainError {
    DomainError::Api {
        status_code,
        message: message.to_string(),
    }
}

#[async_trait]
impl ZoneApi for MockZoneApi {
    async fn zone_rrsets(&self, zone: &str) -> Result<Vec<RRSet>, DomainError> {
        self.record(ApiCall::ZoneRRSets(zone.to_string())).await?;
        Ok(self
            .zone_rrsets
            .read()
            .await
            .get(zone)
            .cloned()
            .unwrap_or_default())
    }

    async fn rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
    ) -> Result<Option<RRSet>, DomainError> {
        self.record(ApiCall::Get(
            zone.to_string(),
            name.to_string(),
            record_type.to_string(),
        ))
        .await?;
        Ok(self.get(zone, name, record_type).await)
    }

    async fn create_rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
        rrset: &RRSet,
    ) -> Result<(), DomainError> {
        self.record(ApiCall::Create(
            zone.to_string(),
            name.to_string(),
            record_type.to_string(),
            rrset.clone(),
        ))
        .await?;
        self.insert_rrset(zone, name, record_type, rrset.clone()).await;
        Ok(())
    }

    async fn update_rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
        rrset: &RRSet,
    ) -> Result<(), DomainError> {
        self.record(ApiCall::Update(
            zone.to_string(),
            name.to_string(),
            record_type.to_string(),
            rrset.clone(),
        ))
        .await?;
        self.insert_rrset(zone, name, record_type, rrset.clone()).await;
        Ok(())
    }

    async fn delete_rrset(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
    ) -> Result<(), DomainError> {
        self.record(ApiCall::Delete(
            zone.to_string(),
            name.to_string(),
            record_type.to_string(),
        ))
        .await?;
        self.rrsets
            .write()
            .await
            .remove(&key(zone, name, record_type));
        Ok(())
    }
}
