use crate::core::constants::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_IMAGE_BYTES};
use crate::core::{DetectError, ImageSource, SimpleError};
use crate::utils::decode_image_bytes;
use image::RgbImage;
use reqwest::Url;
use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;
use tracing::{debug, warn};

/// Downloads an image over HTTP(S) with a blocking request.
#[derive(Debug, Clone)]
pub struct UrlImageSource {
    url: String,
    timeout: Duration,
    max_bytes: u64,
    client: Option<Client>,
}

impl UrlImageSource {
    /// Creates a source for `url` with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
            client: None,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the largest response body accepted.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Reuses an existing HTTP client instead of building one per request.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// The URL this source downloads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Vec<u8>, DetectError> {
        let url = Url::parse(self.url.trim())
            .map_err(|e| DetectError::image_acquisition(&self.url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DetectError::image_acquisition(
                &self.url,
                SimpleError::new(format!("unsupported URL scheme '{}'", url.scheme())),
            ));
        }

        let client = match &self.client {
            Some(client) => client.clone(),
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| DetectError::image_acquisition(&self.url, e))?,
        };

        debug!(url = %url, "downloading image");
        let response = client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| DetectError::image_acquisition(&self.url, e))?;
        if let Some(length) = response.content_length() {
            self.check_size(length)?;
        }

        let mut bytes = Vec::new();
        response
            .take(self.max_bytes.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| DetectError::image_acquisition(&self.url, e))?;
        self.check_size(bytes.len() as u64)?;
        Ok(bytes)
    }

    fn check_size(&self, length: u64) -> Result<(), DetectError> {
        if length > self.max_bytes {
            return Err(DetectError::image_acquisition(
                &self.url,
                SimpleError::new(format!(
                    "response body of {length} bytes exceeds the {} byte limit",
                    self.max_bytes
                )),
            ));
        }
        Ok(())
    }
}

impl ImageSource for UrlImageSource {
    fn acquire(&self) -> Result<RgbImage, DetectError> {
        let bytes = self.fetch().inspect_err(|e| {
            warn!(url = %self.url, error = %e.describe(), "image download failed");
        })?;
        decode_image_bytes(&bytes, &self.url)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    /// Serves one canned HTTP response on a loopback port and returns its URL.
    fn serve_once(response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(&response);
            }
        });
        format!("http://{addr}/image.png")
    }

    #[test]
    fn test_invalid_url_is_acquisition_error() {
        let source = UrlImageSource::new("not a url");
        assert!(source.acquire().unwrap_err().is_acquisition_failure());
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let source = UrlImageSource::new("ftp://example.com/image.png");
        assert!(source.acquire().unwrap_err().is_acquisition_failure());
    }

    #[test]
    fn test_unreachable_host_is_acquisition_error() {
        // Port 9 (discard) on loopback refuses connections on test machines.
        let source = UrlImageSource::new("http://127.0.0.1:9/image.png")
            .with_timeout(Duration::from_secs(2));
        assert!(source.acquire().unwrap_err().is_acquisition_failure());
    }

    #[test]
    fn test_declared_oversized_body_is_rejected() {
        let mut response = b"HTTP/1.1 200 OK\r\nContent-Length: 64\r\n\r\n".to_vec();
        response.extend_from_slice(&[0u8; 64]);
        let source = UrlImageSource::new(serve_once(response))
            .with_timeout(Duration::from_secs(5))
            .with_max_bytes(16);

        let err = source.acquire().unwrap_err();
        assert!(err.is_acquisition_failure());
        assert!(err.describe().contains("exceeds the 16 byte limit"), "{}", err.describe());
    }

    #[test]
    fn test_undeclared_oversized_body_is_rejected() {
        let mut response = b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n".to_vec();
        response.extend_from_slice(&[7u8; 64]);
        let source = UrlImageSource::new(serve_once(response))
            .with_timeout(Duration::from_secs(5))
            .with_max_bytes(16);

        let err = source.acquire().unwrap_err();
        assert!(err.describe().contains("exceeds the 16 byte limit"), "{}", err.describe());
    }
}
