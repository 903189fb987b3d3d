// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop
///
/// Accept errors are logged and the loop keeps going. When `shutdown`
/// resolves the listener is dropped; connections already accepted finish on
/// their own tasks.
pub async fn start_server_loop<S>(listener: TcpListener, state: Arc<AppState>, shutdown: S)
where
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = &mut shutdown => break,
        }
    }

    drop(listener);
    logger::log_shutdown(state.active_connections.load(Ordering::SeqCst));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_reusable_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn test_config() -> Config {
        let mut cfg = Config::load_from("/nonexistent/anagram-config").unwrap();
        cfg.logging.access_log = false;
        cfg.secret.path = "/nonexistent/anagram-secret.key".to_string();
        cfg
    }

    async fn raw_get(addr: std::net::SocketAddr, target: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {target} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let cfg = test_config();
        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(AppState::new(&cfg));
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(start_server_loop(listener, Arc::clone(&state), async move {
            let _ = stop_rx.await;
        }));

        let ping = raw_get(addr, "/ping").await;
        assert!(ping.starts_with("HTTP/1.1 204"), "{ping}");

        let anagram = raw_get(addr, "/anagram?p=aabb").await;
        assert!(anagram.starts_with("HTTP/1.1 200"), "{anagram}");
        assert!(anagram.ends_with(r#"{"p":"aabb","total":"6"}"#), "{anagram}");

        let missing = raw_get(addr, "/secret").await;
        assert!(missing.starts_with("HTTP/1.1 404"), "{missing}");

        let status = raw_get(addr, "/status").await;
        assert!(status.contains(r#""req":"4","err":"1""#), "{status}");

        stop_tx.send(()).unwrap();
        server.await.unwrap();
        assert_eq!(state.dispatcher.counters().snapshot().total_requests, 4);
    }
}
