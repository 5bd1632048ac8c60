//! Cloudflare provider implementation

pub mod client;
pub mod error;
pub mod types;

pub use client::{CloudflareClient, CloudflareConfig};
pub use error::CloudflareProviderError;

pub const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

use crate::core::provider::DnsProvider;
use crate::core::record::{Record, RemoteRecord, Zone};
use crate::error::Error;
use async_trait::async_trait;
use error::map_error;
use types::{CreateZoneRequest, to_create_request, to_remote_record, to_zone};

#[async_trait]
impl DnsProvider for CloudflareClient {
    fn name(&self) -> &str {
        "cloudflare"
    }

    async fn list_zones(&self) -> Result<Vec<Zone>, Error> {
        self.zones(None)
            .await
            .map(|zones| zones.iter().map(to_zone).collect())
            .map_err(map_error)
    }

    async fn find_zone(&self, name: &str) -> Result<Option<Zone>, Error> {
        self.zones(Some(name))
            .await
            .map(|zones| zones.first().map(to_zone))
            .map_err(map_error)
    }

    async fn create_zone(&self, name: &str) -> Result<Zone, Error> {
        let req = CreateZoneRequest {
            name: name.to_string(),
            jump_start: false,
        };
        self.post_zone(&req)
            .await
            .map(|zone| to_zone(&zone))
            .map_err(map_error)
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<RemoteRecord>, Error> {
        self.dns_records(zone_id)
            .await
            .map(|records| records.iter().map(to_remote_record).collect())
            .map_err(map_error)
    }

    async fn create_record(&self, zone_id: &str, record: &Record) -> Result<(), Error> {
        let req = to_create_request(record);
        self.post_dns_record(zone_id, &req)
            .await
            .map(|_| ())
            .map_err(map_error)
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<(), Error> {
        self.delete_dns_record(zone_id, record_id)
            .await
            .map_err(map_error)
    }
}
