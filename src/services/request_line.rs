use std::pin::Pin;
use std::sync::Arc;
use std::task::Poll;
use tokio::sync::Mutex;
use tower::{Layer, Service};

use crate::types::request::Request;

/// Parses request lines and forwards valid requests to the inner service.
/// Blank lines, `#` comments and malformed lines are skipped.
pub struct RequestLineService<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> RequestLineService<S> {
    fn new(inner: S) -> Self {
        RequestLineService {
            inner: Arc::new(Mutex::new(inner)),
        }
    }
}

impl<S> Service<String> for RequestLineService<S>
where
    S: Service<Request, Response = (), Error = anyhow::Error> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = ();
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, line: String) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return Ok(());
            }
            match Request::try_from(trimmed) {
                Ok(request) => {
                    tracing::debug!("request received: {request}");
                    inner.lock().await.call(request).await
                }
                Err(e) => {
                    tracing::warn!("skipping request line: {e:#}");
                    Ok(())
                }
            }
        })
    }
}

pub struct RequestLineLayer;

impl<S> Layer<S> for RequestLineLayer {
    type Service = RequestLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLineService::new(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{Ready, ready};
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct Collect(Arc<std::sync::Mutex<Vec<Request>>>);

    impl Service<Request> for Collect {
        type Response = ();
        type Error = anyhow::Error;
        type Future = Ready<anyhow::Result<()>>;

        fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<anyhow::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, request: Request) -> Self::Future {
            self.0.lock().unwrap().push(request);
            ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn forwards_valid_lines_only() {
        let collected = Collect::default();
        let mut svc = RequestLineLayer.layer(collected.clone());

        for line in ["3,6", "", "# comment", "nope", "12 1", "1,2,3"] {
            svc.ready()
                .await
                .unwrap()
                .call(line.to_string())
                .await
                .unwrap();
        }

        assert_eq!(
            *collected.0.lock().unwrap(),
            vec![Request::new(3, 6), Request::new(12, 1)]
        );
    }
}
