//! IONOS `DnsZoneApi` 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::{IonosError, Result};
use crate::http_client::HttpUtils;
use crate::traits::DnsZoneApi;
use crate::types::{CustomerZone, Record, RecordsFilter, Zone};

use super::IonosClient;

#[async_trait]
impl DnsZoneApi for IonosClient {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let url = self.endpoint(&["zones"])?;
        let response_text = self.send(Method::GET, url, None).await?;
        let zones: Option<Vec<Zone>> = HttpUtils::parse_json(&response_text)?;
        Ok(zones.unwrap_or_default())
    }

    async fn replace_records(&self, zone_id: &str, records: &[Record]) -> Result<()> {
        let url = self.endpoint(&["zones", zone_id])?;
        let body = serde_json::to_vec(records).map_err(|e| IonosError::SerializationError {
            detail: e.to_string(),
        })?;

        self.send(Method::PATCH, url, Some(body)).await?;
        log::debug!("[ionos] Replaced {} record(s) in zone {zone_id}", records.len());
        Ok(())
    }

    async fn get_records(
        &self,
        zone_id: &str,
        filter: Option<&RecordsFilter>,
    ) -> Result<Vec<Record>> {
        let mut url = self.endpoint(&["zones", zone_id])?;
        if let Some(filter) = filter {
            let query = filter.to_query_string();
            if !query.is_empty() {
                url.set_query(Some(&query));
            }
        }

        let response_text = self.send(Method::GET, url, None).await?;
        let zone: CustomerZone = HttpUtils::parse_json(&response_text)?;
        Ok(zone.records)
    }

    async fn remove_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        let url = self.endpoint(&["zones", zone_id, "records", record_id])?;
        self.send(Method::DELETE, url, None).await?;
        log::debug!("[ionos] Removed record {record_id} from zone {zone_id}");
        Ok(())
    }
}
