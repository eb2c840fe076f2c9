use rssreader_client::RssClient;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key";

/// One mock RSS Reader server plus a client pointed at it. Each test gets
/// its own server, so tests are independent and need no shared state.
pub struct TestEnvironment {
    pub server: MockServer,
    pub client: RssClient,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = RssClient::new(server.uri(), TEST_API_KEY.to_string());
        Self { server, client }
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
