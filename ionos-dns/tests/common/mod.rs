//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use ionos_dns::{ClientConfig, DnsZoneApi, IonosClient, Record, RecordsFilter};
use wiremock::MockServer;

/// API key used against the mock server.
pub const TEST_API_KEY: &str = "prefix.secret";

/// Path the mock API is mounted under, mirroring the real `/dns` endpoint.
pub const BASE_PATH: &str = "/dns";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Route the crate's `log` output through the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Full path of an API route on the mock server, e.g. `api_path("/v1/zones")`.
pub fn api_path(route: &str) -> String {
    format!("{BASE_PATH}{route}")
}

/// Start a mock server and a client pointed at it.
pub async fn mock_client() -> (MockServer, Result<IonosClient, ionos_dns::IonosError>) {
    init_logger();
    let server = MockServer::start().await;
    let config =
        ClientConfig::new(TEST_API_KEY).with_base_url(format!("{}{BASE_PATH}", server.uri()));
    let client = IonosClient::from_config(&config);
    (server, client)
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name(zone_name: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}.{zone_name}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装真实 API 客户端和测试域名
pub struct TestContext {
    pub client: IonosClient,
    pub domain: String,
}

impl TestContext {
    /// 从环境变量创建（`IONOS_API_KEY`, `TEST_DOMAIN`）
    pub fn from_env() -> Option<Self> {
        let domain = env::var("TEST_DOMAIN").ok()?;
        let config = ClientConfig::from_env().ok()?;
        let client = IonosClient::from_config(&config).ok()?;
        Some(Self { client, domain })
    }

    /// 查找测试域名所在的 zone ID
    pub async fn find_zone_id(&self) -> Option<String> {
        self.client
            .find_zone(&self.domain)
            .await
            .ok()
            .flatten()
            .map(|zone| zone.id)
    }

    /// 查找并清理所有测试记录（以 _test- 开头的 TXT 记录）
    pub async fn cleanup_all_test_records(&self, zone_id: &str) {
        let filter = RecordsFilter::new().record_type("TXT");
        if let Ok(records) = self.client.get_records(zone_id, Some(&filter)).await {
            for record in records.iter().filter(|r| r.name.starts_with("_test-")) {
                if let Some(id) = &record.id {
                    let _ = self.client.remove_record(zone_id, id).await;
                }
            }
        }
    }

    pub fn test_record(&self) -> Record {
        Record::new(
            generate_test_record_name(&self.domain),
            "TXT",
            "integration-test",
            300,
        )
    }
}
