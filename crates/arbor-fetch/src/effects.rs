use std::pin::Pin;

use bytes::{Bytes, BytesMut};
use futures_util::{Stream, TryStreamExt};

use crate::error::FetchError;

pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Chunked body of one fetched resource.
pub type ByteStream = BoxStream<'static, Result<Bytes, FetchError>>;

/// Retrieves raw bytes for one locator.
///
/// Implementations own timeout and retry policy; callers only observe
/// success or a [`FetchError`].
pub trait HttpClient: Send + Sync {
    fn stream(&self, url: &str) -> impl Future<Output = Result<ByteStream, FetchError>> + Send;
}

impl<C: HttpClient + ?Sized> HttpClient for std::sync::Arc<C> {
    fn stream(&self, url: &str) -> impl Future<Output = Result<ByteStream, FetchError>> + Send {
        (**self).stream(url)
    }
}

/// Drain a body stream into a single contiguous buffer.
pub async fn collect_bytes(mut stream: ByteStream) -> Result<Bytes, FetchError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = stream.try_next().await? {
        buf.extend_from_slice(&chunk);
    }
    Ok(buf.freeze())
}

#[cfg(feature = "reqwest")]
mod reqwest_client {
    use super::*;
    use crate::data::Timeouts;
    use reqwest::Client;

    pub struct ReqwestClient {
        client: Client,
    }

    impl ReqwestClient {
        pub fn new() -> Result<Self, reqwest::Error> { Self::with_timeouts(Timeouts::default()) }

        pub fn with_timeouts(timeouts: Timeouts) -> Result<Self, reqwest::Error> {
            let client = Client::builder()
                .connect_timeout(timeouts.connect)
                .read_timeout(timeouts.read)
                .build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        async fn stream(&self, url: &str) -> Result<ByteStream, FetchError> {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| map_error(url, e))?
                .error_for_status()
                .map_err(|e| map_error(url, e))?;

            let url = url.to_string();
            let stream = response
                .bytes_stream()
                .map_err(move |e| map_error(&url, e));
            Ok(Box::pin(stream))
        }
    }

    fn map_error(url: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
        } else if err.is_builder() {
            FetchError::InvalidUrl(url.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_client::ReqwestClient;

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn chunked(parts: &[&[u8]]) -> ByteStream {
        let chunks: Vec<Result<Bytes, FetchError>> = parts
            .iter()
            .map(|p| Ok(Bytes::copy_from_slice(p)))
            .collect();
        Box::pin(stream::iter(chunks))
    }

    #[tokio::test]
    async fn collect_bytes_reassembles_chunks() {
        let body = collect_bytes(chunked(&[b"hel", b"lo ", b"world"]))
            .await
            .unwrap();
        assert_eq!(&body[..], b"hello world");
    }

    #[tokio::test]
    async fn collect_bytes_empty_stream() {
        let body = collect_bytes(chunked(&[])).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn collect_bytes_surfaces_mid_stream_failure() {
        let chunks: Vec<Result<Bytes, FetchError>> = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(FetchError::Network("connection reset".to_string())),
        ];
        let result = collect_bytes(Box::pin(stream::iter(chunks))).await;
        assert_eq!(
            result,
            Err(FetchError::Network("connection reset".to_string()))
        );
    }
}
