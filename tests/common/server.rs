use axum::Router;
use reqwest::Url;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Running app bound to an ephemeral port. Dropping the handle closes the
/// shutdown channel and stops the server.
pub struct TestAppHandle {
    pub address: Url,
    _stop_tx: oneshot::Sender<()>,
    _serve_task: JoinHandle<()>,
}

pub async fn spawn_test_app(app: Router) -> TestAppHandle {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();

    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let serve_task = tokio::spawn(async move {
        let result = axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(async {
                stop_rx.await.ok();
            })
            .await;

        if let Err(e) = result {
            eprintln!("test app server failed: {e:?}");
        }
    });

    TestAppHandle {
        address,
        _stop_tx: stop_tx,
        _serve_task: serve_task,
    }
}
