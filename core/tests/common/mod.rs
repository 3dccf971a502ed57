//! Shared setup for the black-box suites: a fresh mock server per test.

use posts_core::{PostClient, Runner};

/// Start the mock server on a random port and return its base URL.
///
/// Each test gets its own server instance, so nothing is shared between
/// cases and tests can run in parallel.
pub fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// Client and runner pair pointed at a fresh server instance.
pub fn start_harness() -> (PostClient, Runner) {
    let base_url = start_server();
    (PostClient::new(&base_url), Runner::new())
}
