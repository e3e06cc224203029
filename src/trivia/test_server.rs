use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use warp::http::{header::CONTENT_TYPE, Response};
use warp::path::FullPath;
use warp::Filter;

/// Local HTTP server for exercising the client without network access.
pub struct TestServer {
    addr: SocketAddr,
    requests: mpsc::UnboundedReceiver<String>,
}

impl TestServer {
    /// Answers every request with whatever `respond` returns for its request target.
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let respond = Arc::new(respond);

        Self::listen(move |target: String| {
            let respond = respond.clone();

            async move {
                let (status, body) = (*respond)(&target);

                Response::builder()
                    .status(status)
                    .header(CONTENT_TYPE, "application/json")
                    .body(body)
                    .unwrap()
            }
        })
    }

    /// Accepts requests but holds them for longer than any test runs.
    pub async fn silent() -> Self {
        Self::listen(|_target: String| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Response::new(String::new())
        })
    }

    fn listen<H, Fut>(handler: H) -> Self
    where
        H: Fn(String) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Response<String>> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();

        let route = warp::path::full()
            .and(
                warp::query::raw()
                    .or(warp::any().map(String::new))
                    .unify(),
            )
            .and_then(move |path: FullPath, query: String| {
                let tx = tx.clone();
                let handler = handler.clone();

                async move {
                    let target = if query.is_empty() {
                        path.as_str().to_owned()
                    } else {
                        format!("{}?{}", path.as_str(), query)
                    };
                    let _ = tx.send(target.clone());

                    Ok::<_, Infallible>(handler(target).await)
                }
            });

        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self { addr, requests: rx }
    }

    pub fn url(&self) -> String {
        format!("http://{}/api.php", self.addr)
    }

    /// Request target (path and query) of the next request the server received.
    pub async fn next_request(&mut self) -> String {
        self.requests.recv().await.expect("server task stopped")
    }
}
