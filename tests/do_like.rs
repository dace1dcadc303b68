use std::net::SocketAddr;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Form, Router,
};
use likes::{Config, Error, LikeToggleHandler, LikesPage, MessageSummary, Outcome};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[derive(Debug, serde::Deserialize)]
struct LikeForm {
    message_id: String,
}

#[derive(Debug)]
struct Received {
    message_id: String,
    content_type: String,
}

#[derive(Clone)]
struct Endpoint {
    tx: UnboundedSender<Received>,
    status: StatusCode,
}

async fn do_like(
    State(endpoint): State<Endpoint>,
    headers: HeaderMap,
    Form(form): Form<LikeForm>,
) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    endpoint
        .tx
        .send(Received {
            message_id: form.message_id,
            content_type,
        })
        .unwrap();

    endpoint.status
}

/// Serves a `/do_like` that records what it receives and answers with `status`
async fn serve(status: StatusCode) -> (SocketAddr, UnboundedReceiver<Received>) {
    let (tx, rx) = unbounded_channel();

    let app = Router::new()
        .route("/do_like", post(do_like))
        .with_state(Endpoint { tx, status });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    (addr, rx)
}

fn handler(addr: SocketAddr) -> LikeToggleHandler {
    LikeToggleHandler::from_config(&Config::with_base_url(format!("http://{addr}"))).unwrap()
}

fn page(liked: bool) -> LikesPage {
    let mut page = LikesPage::new(
        "Likes",
        vec![
            MessageSummary::new(1, "hello", liked),
            MessageSummary::new(2, "world", true),
        ],
    );
    page.count = if liked { 6 } else { 5 };
    page
}

#[tokio::test]
async fn test_like_posts_message_id() {
    let (addr, mut rx) = serve(StatusCode::OK).await;
    let mut doc = page(false).into_document();

    let outcome = handler(addr).handle(&mut doc, "#msg-1,42").outcome().await;

    assert!(outcome.is_delivered());
    assert_eq!("6", doc.text(".likes"));
    assert!(doc.has_class("#msg-1", "liked"));
    assert!(!doc.has_class("#msg-1", "not-liked"));

    let received = rx.recv().await.unwrap();
    assert_eq!("42", received.message_id);
    assert!(received
        .content_type
        .starts_with("application/x-www-form-urlencoded"));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_unlike_posts_message_id() {
    let (addr, mut rx) = serve(StatusCode::OK).await;
    let mut doc = page(true).into_document();

    let outcome = handler(addr).handle(&mut doc, "#msg-1,42").outcome().await;

    assert!(outcome.is_delivered());
    assert_eq!("5", doc.text(".likes"));
    assert!(doc.has_class("#msg-1", "not-liked"));
    assert!(!doc.has_class("#msg-1", "liked"));
    assert_eq!("42", rx.recv().await.unwrap().message_id);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_rejected_request_is_not_rolled_back() {
    let (addr, mut rx) = serve(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut doc = page(false).into_document();

    let outcome = handler(addr).handle(&mut doc, "#msg-1,1").outcome().await;

    assert!(matches!(
        outcome,
        Outcome::Failed(Error::Status(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert_eq!("6", doc.text(".likes"));
    assert!(doc.has_class("#msg-1", "liked"));
    assert_eq!("1", rx.recv().await.unwrap().message_id);
}

#[tokio::test]
async fn test_every_toggle_sends_one_request() {
    let (addr, mut rx) = serve(StatusCode::OK).await;
    let handler = handler(addr);
    let mut doc = page(false).into_document();

    let dispatches = (0..4)
        .map(|_| handler.handle(&mut doc, "#msg-1,1"))
        .collect::<Vec<_>>();
    for dispatch in dispatches {
        assert!(dispatch.outcome().await.is_delivered());
    }

    // back where it started
    assert_eq!("5", doc.text(".likes"));
    assert!(doc.has_class("#msg-1", "not-liked"));

    for _ in 0..4 {
        assert_eq!("1", rx.recv().await.unwrap().message_id);
    }
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_missing_message_id_is_sent_empty() {
    let (addr, mut rx) = serve(StatusCode::OK).await;
    let mut doc = page(false).into_document();

    handler(addr).handle(&mut doc, "#msg-2").outcome().await;

    assert!(doc.has_class("#msg-2", "not-liked"));
    assert_eq!("", rx.recv().await.unwrap().message_id);
}
