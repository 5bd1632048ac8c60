use crate::core::record::{Record, RemoteRecord, Zone};
use crate::error::Error;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Hosted-DNS provider operations needed by fetch and sync.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DnsProvider: Send + Sync {
    #[allow(dead_code)]
    fn name(&self) -> &str;
    async fn list_zones(&self) -> Result<Vec<Zone>, Error>;
    async fn find_zone(&self, name: &str) -> Result<Option<Zone>, Error>;
    async fn create_zone(&self, name: &str) -> Result<Zone, Error>;
    async fn list_records(&self, zone_id: &str) -> Result<Vec<RemoteRecord>, Error>;
    async fn create_record(&self, zone_id: &str, record: &Record) -> Result<(), Error>;
    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<(), Error>;
}
