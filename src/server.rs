//! Web server module for hellokube.
//!
//! Serves the single route, `GET /`, which resolves the background color
//! through the injected `ColorSource` and renders the landing page. The
//! handler is stateless; the color is read fresh on every request.
//!
use std::net::SocketAddr;

use axum::{Router, extract::State, response::Html, routing::get};
use tokio::net::TcpListener;

use crate::{config::ColorSource, html};

/// Fixed listen port, mapped by the deployment
const PORT: u16 = 8080;

/// Build the application router around the given color source
pub fn app(colors: ColorSource) -> Router {
    Router::new().route("/", get(home)).with_state(colors)
}

/// Bind on all interfaces and serve until the process is stopped.
/// A bind failure propagates out and terminates the process.
pub async fn run() -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app(ColorSource::from_env()))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Render the page with the current background color
async fn home(State(colors): State<ColorSource>) -> Html<String> {
    let color = colors.resolve();
    tracing::debug!(%color, "rendering page");
    Html(html::render_page(&color))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, shutting down");
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    /// Drive `GET /` through the router and collect the response parts
    async fn get_root(colors: ColorSource) -> (StatusCode, String, String) {
        let response = app(colors)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (
            status,
            content_type,
            String::from_utf8(body.to_vec()).unwrap(),
        )
    }

    /// Test an unset variable renders the white default page
    #[tokio::test]
    async fn unset_renders_white_default() {
        let (status, content_type, body) = get_root(ColorSource::unset()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains(r#"<body style="background-color: white;">"#));
        assert!(body.contains(r#"<h1 style="color: black;">Hello, Kubernetes!</h1>"#));
        assert!(body.contains("The background color is white."));
    }

    /// Test a set variable is rendered in style and text
    #[tokio::test]
    async fn set_color_is_rendered() {
        let (status, content_type, body) = get_root(ColorSource::fixed("red")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains(r#"<body style="background-color: red;">"#));
        assert!(body.contains("The background color is red."));
    }

    /// Test an empty value falls back to the default
    #[tokio::test]
    async fn empty_value_falls_back() {
        let (status, _, body) = get_root(ColorSource::fixed("")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<body style="background-color: white;">"#));
        assert!(body.contains("The background color is white."));
    }

    /// Test the color is resolved on each request, not at router build time
    #[tokio::test]
    async fn color_is_read_per_request() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let colors = ColorSource::new(|| {
            match CALLS.fetch_add(1, Ordering::SeqCst) {
                0 => Some("red".to_owned()),
                _ => Some("blue".to_owned()),
            }
        });

        let (_, _, first) = get_root(colors.clone()).await;
        let (_, _, second) = get_root(colors).await;
        assert!(first.contains("background-color: red;"));
        assert!(second.contains("background-color: blue;"));
    }
}
