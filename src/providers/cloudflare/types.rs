use serde::{Deserialize, Serialize};

use crate::core::record::{Record, RemoteRecord, Zone};

/// Cloudflare v4 API response envelope.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    pub result: Option<T>,
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ResultInfo {
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CloudflareRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub priority: Option<u16>,
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
}

#[derive(Serialize, Debug)]
pub struct CreateZoneRequest {
    pub name: String,
    pub jump_start: bool,
}

#[derive(Serialize, Debug)]
pub struct CreateRecordRequest {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    pub ttl: u32,
}

#[derive(Deserialize, Debug)]
pub struct DeletedRecord {
    #[allow(dead_code)]
    pub id: String,
}

pub fn to_zone(zone: &CloudflareZone) -> Zone {
    Zone {
        id: zone.id.clone(),
        name: zone.name.clone(),
    }
}

pub fn to_remote_record(record: &CloudflareRecord) -> RemoteRecord {
    RemoteRecord {
        id: record.id.clone(),
        rtype: record.record_type.clone(),
        name: record.name.clone(),
        content: record.content.clone(),
        priority: record.priority,
        ttl: record.ttl,
        proxied: record.proxied,
    }
}

/// Create payload for a local record. `proxied` is never sent; the provider
/// defaults it to false.
pub fn to_create_request(record: &Record) -> CreateRecordRequest {
    CreateRecordRequest {
        record_type: record.data.type_name().to_string(),
        name: record.name.clone(),
        content: record.data.content().to_string(),
        priority: record.data.priority(),
        ttl: record.ttl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::RecordData;

    #[test]
    fn converts_api_record_to_remote_record() {
        let record = CloudflareRecord {
            id: "372e67954025e0ba6aaa6d586b9e0b59".to_string(),
            record_type: "MX".to_string(),
            name: "example.com".to_string(),
            content: "mail.example.com".to_string(),
            priority: Some(10),
            ttl: 3600,
            proxied: false,
        };
        let remote = to_remote_record(&record);
        assert_eq!(remote.rtype, "MX");
        assert_eq!(remote.priority, Some(10));
        assert_eq!(remote.ttl, 3600);
    }

    #[test]
    fn create_request_includes_priority_only_for_mx() {
        let mx = Record {
            name: "example.com".to_string(),
            ttl: 1,
            proxied: false,
            data: RecordData::Mx {
                content: "mail.example.com".to_string(),
                priority: 10,
            },
        };
        let req = to_create_request(&mx);
        assert_eq!(req.record_type, "MX");
        assert_eq!(req.priority, Some(10));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["priority"], 10);

        let a = Record {
            name: "www.example.com".to_string(),
            ttl: 300,
            proxied: false,
            data: RecordData::A {
                content: "1.2.3.4".to_string(),
            },
        };
        let body = serde_json::to_value(to_create_request(&a)).unwrap();
        assert!(body.get("priority").is_none());
        assert_eq!(body["ttl"], 300);
    }

    #[test]
    fn record_without_proxied_field_defaults_to_false() {
        let record: CloudflareRecord = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "type": "TXT",
            "name": "example.com",
            "content": "\"v=spf1 -all\"",
            "ttl": 1
        }))
        .unwrap();
        assert!(!record.proxied);
        assert_eq!(record.priority, None);
    }
}
