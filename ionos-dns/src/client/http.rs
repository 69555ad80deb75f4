//! IONOS HTTP 请求方法

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode, Url};

use crate::error::{IonosError, Result};
use crate::http_client::HttpUtils;

use super::IonosClient;

const API_KEY_HEADER: &str = "X-API-Key";
const JSON_MIME: &str = "application/json";
const API_VERSION: &str = "v1";

impl IonosClient {
    /// Endpoint `<base>/v1/<segments...>`; each segment is percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        for segment in segments {
            if segment.is_empty() || *segment == "." || *segment == ".." {
                return Err(IonosError::InvalidParameter {
                    param: "path".to_string(),
                    detail: format!("invalid path segment '{segment}'"),
                });
            }
        }

        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| IonosError::InvalidParameter {
                    param: "base_url".to_string(),
                    detail: format!("'{}' cannot have path segments", self.base_url),
                })?;
            path.pop_if_empty().push(API_VERSION).extend(segments);
        }
        Ok(url)
    }

    /// 构建带认证与内容类型头的请求
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(ACCEPT, JSON_MIME)
            .header(CONTENT_TYPE, JSON_MIME)
            .header(API_KEY_HEADER, self.api_key.clone())
    }

    /// 执行请求，非 200 响应统一走错误解析
    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<String> {
        let url_str = url.to_string();
        let method_name = method.to_string();

        let mut request = self.request(method, url);
        if let Some(body) = body {
            request = request.body(body);
        }

        let (status, response_text) =
            HttpUtils::execute_request(request, &method_name, &url_str).await?;

        if status != StatusCode::OK {
            return Err(HttpUtils::read_error(status, &response_text));
        }

        Ok(response_text)
    }
}
