use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Record, RecordsFilter, Zone};
use crate::utils::domain::find_zone_for_domain;

/// Zone and record operations of the IONOS DNS API.
///
/// [`IonosClient`](crate::IonosClient) is the HTTP implementation. Code that
/// only needs these operations can hold an `Arc<dyn DnsZoneApi>` and swap in
/// a fake in tests.
#[async_trait]
pub trait DnsZoneApi: Send + Sync {
    /// 获取账号下的全部 zone（`GET /v1/zones`）
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// 替换 zone 中的部分记录（`PATCH /v1/zones/{zoneId}`）
    ///
    /// Only the supplied records are affected; other records of the zone are
    /// left untouched by the API.
    async fn replace_records(&self, zone_id: &str, records: &[Record]) -> Result<()>;

    /// 获取 zone 的记录（`GET /v1/zones/{zoneId}`），可选过滤条件
    async fn get_records(
        &self,
        zone_id: &str,
        filter: Option<&RecordsFilter>,
    ) -> Result<Vec<Record>>;

    /// 删除单条记录（`DELETE /v1/zones/{zoneId}/records/{recordId}`）
    async fn remove_record(&self, zone_id: &str, record_id: &str) -> Result<()>;

    /// Find the zone hosting `domain` among the account's zones.
    ///
    /// Default implementation lists all zones and picks the longest suffix
    /// match; `Ok(None)` when no zone matches.
    async fn find_zone(&self, domain: &str) -> Result<Option<Zone>> {
        let zones = self.list_zones().await?;
        Ok(find_zone_for_domain(&zones, domain).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, IonosError};

    struct FakeApi {
        zones: Result<Vec<Zone>>,
    }

    #[async_trait]
    impl DnsZoneApi for FakeApi {
        async fn list_zones(&self) -> Result<Vec<Zone>> {
            self.zones.clone()
        }

        async fn replace_records(&self, _zone_id: &str, _records: &[Record]) -> Result<()> {
            Ok(())
        }

        async fn get_records(
            &self,
            _zone_id: &str,
            _filter: Option<&RecordsFilter>,
        ) -> Result<Vec<Record>> {
            Ok(Vec::new())
        }

        async fn remove_record(&self, _zone_id: &str, _record_id: &str) -> Result<()> {
            Ok(())
        }
    }

    fn zone(id: &str, name: &str) -> Zone {
        Zone {
            id: id.to_string(),
            name: name.to_string(),
            zone_type: "NATIVE".to_string(),
        }
    }

    #[tokio::test]
    async fn find_zone_default_impl() {
        let api = FakeApi {
            zones: Ok(vec![zone("a", "example.org"), zone("b", "example.com")]),
        };
        let res = api.find_zone("www.example.com.").await;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(found) = res else {
            return;
        };
        assert_eq!(found.map(|z| z.id), Some("b".to_string()));
    }

    #[tokio::test]
    async fn find_zone_no_match() {
        let api = FakeApi {
            zones: Ok(vec![zone("a", "example.org")]),
        };
        let res = api.find_zone("example.com").await;
        assert!(matches!(res, Ok(None)));
    }

    #[tokio::test]
    async fn find_zone_propagates_errors() {
        let api = FakeApi {
            zones: Err(IonosError::ApiError(ClientError::from_body(401, "denied"))),
        };
        let res = api.find_zone("example.com").await;
        assert!(matches!(res, Err(IonosError::ApiError(_))));
    }

    #[test]
    fn trait_is_object_safe() {
        fn assert_dyn(_: Option<std::sync::Arc<dyn DnsZoneApi>>) {}
        assert_dyn(None);
    }
}
