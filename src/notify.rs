use std::{future::Future, pin::Pin};

use reqwest::Client;
use tokio::{select, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::{config::Config, error::Error, error::Result};

pub type NotifyFuture = Pin<Box<dyn Future<Output = Result<()>> + Send + 'static>>;

/// Tells the server a message was liked or unliked.
///
/// The server owns the actual toggle, so both directions send the same thing.
pub trait LikeNotifier: Send + Sync + 'static {
    fn notify(&self, message_id: &str) -> NotifyFuture;
}

impl<F, Fut> LikeNotifier for F
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    fn notify(&self, message_id: &str) -> NotifyFuture {
        Box::pin((self)(message_id.to_string()))
    }
}

/// Posts `message_id=<id>` as a form to the configured like endpoint
#[derive(Clone, Debug)]
pub struct HttpNotifier {
    client: Client,
    url: Url,
    field: String,
}

impl HttpNotifier {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.like_url()?,
            field: config.field_name().to_string(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl LikeNotifier for HttpNotifier {
    fn notify(&self, message_id: &str) -> NotifyFuture {
        let request = self
            .client
            .post(self.url.clone())
            .form(&[(self.field.as_str(), message_id)]);

        Box::pin(async move {
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status(status));
            }

            Ok(())
        })
    }
}

/// How a dispatched notification ended
#[derive(Debug)]
pub enum Outcome {
    Delivered,
    Failed(Error),
    Cancelled,
}

impl Outcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered)
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            Outcome::Delivered => Ok(()),
            Outcome::Failed(error) => Err(error),
            Outcome::Cancelled => Err(Error::Cancelled),
        }
    }
}

/// A notification running in the background.
///
/// Dropping this doesn't stop the request, it just stops anyone from finding
/// out how it went.
#[derive(Debug)]
pub struct Dispatch {
    message_id: String,
    task: JoinHandle<Outcome>,
    cancel: CancellationToken,
}

impl Dispatch {
    /// Spawns `future` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn spawn(message_id: impl ToString, future: NotifyFuture) -> Self {
        let message_id = message_id.to_string();
        let cancel = CancellationToken::new();

        let task = {
            let cancel = cancel.clone();
            let message_id = message_id.clone();

            tokio::spawn(async move {
                select! {
                    _ = cancel.cancelled() => {
                        debug!(message_id = %message_id, "like notification cancelled");
                        Outcome::Cancelled
                    }
                    result = future => match result {
                        Ok(()) => {
                            debug!(message_id = %message_id, "like notification delivered");
                            Outcome::Delivered
                        }
                        Err(error) => {
                            warn!(message_id = %message_id, %error, "like notification failed");
                            Outcome::Failed(error)
                        }
                    },
                }
            })
        };

        Self {
            message_id,
            task,
            cancel,
        }
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the notification to finish
    pub async fn outcome(self) -> Outcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(error) if error.is_cancelled() => Outcome::Cancelled,
            Err(error) => std::panic::resume_unwind(error.into_panic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc::unbounded_channel;

    use super::*;

    #[tokio::test]
    async fn test_closure_notifier_is_dispatched() {
        let (tx, mut rx) = unbounded_channel();
        let notifier = move |message_id: String| {
            let tx = tx.clone();
            async move {
                tx.send(message_id).map_err(|_| Error::Cancelled)?;
                Ok::<_, Error>(())
            }
        };

        let dispatch = Dispatch::spawn("42", notifier.notify("42"));

        assert!(dispatch.outcome().await.is_delivered());
        assert_eq!(Some("42".to_string()), rx.recv().await);
    }

    #[tokio::test]
    async fn test_failures_are_reported() {
        let notifier =
            |_: String| async { Err::<(), _>(Error::Status(reqwest::StatusCode::BAD_GATEWAY)) };

        let outcome = Dispatch::spawn("1", notifier.notify("1")).outcome().await;

        assert!(matches!(
            outcome,
            Outcome::Failed(Error::Status(status)) if status == reqwest::StatusCode::BAD_GATEWAY
        ));
    }

    #[tokio::test]
    async fn test_cancel() {
        let notifier = |_: String| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, Error>(())
        };

        let dispatch = Dispatch::spawn("1", notifier.notify("1"));
        dispatch.cancel();

        assert!(matches!(dispatch.outcome().await, Outcome::Cancelled));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails() {
        // take a free port and release it, so nothing listens there
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = Config::with_base_url(format!("http://{addr}"))
            .timeout(Some(Duration::from_secs(5)));
        let notifier = HttpNotifier::new(&config).unwrap();

        let outcome = Dispatch::spawn("1", notifier.notify("1")).outcome().await;

        assert!(matches!(outcome, Outcome::Failed(Error::Request(_))));
    }

    #[test]
    fn test_http_notifier_url() {
        let notifier = HttpNotifier::new(&Config::with_base_url("http://localhost:8080")).unwrap();

        assert_eq!("http://localhost:8080/do_like", notifier.url().as_str());
    }
}
