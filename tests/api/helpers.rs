use once_cell::sync::Lazy;
use secrecy::Secret;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, MockServer};
use younghub::configuration::get_configuration;
use younghub::contact_form::ContactForm;
use younghub::domain::ContactFormData;
use younghub::relay_client::{KeySource, RelayClient};
use younghub::reveal::ScrollTrigger;
use younghub::site::Site;
use younghub::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).unwrap();
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).unwrap();
    }
});

pub const PUBLIC_KEY: &str = "test-public-key";

pub struct TestApp {
    pub relay_server: MockServer,
    pub relay_client: Arc<RelayClient>,
    pub public_key: Option<Secret<String>>,
}

impl TestApp {
    pub fn key_source(&self) -> Arc<dyn KeySource> {
        Arc::new(self.public_key.clone())
    }

    pub fn contact_form(&self) -> ContactForm {
        ContactForm::new(Arc::clone(&self.relay_client), self.key_source())
    }

    pub fn contact_form_with(&self, key_source: Arc<dyn KeySource>) -> ContactForm {
        ContactForm::new(Arc::clone(&self.relay_client), key_source)
    }

    /// A site with its own scroll trigger, so observer counts are not shared
    /// with other tests.
    pub fn site(&self) -> (Site, Arc<ScrollTrigger>) {
        let trigger = Arc::new(ScrollTrigger::new(0.8));
        let site =
            Site::with_scroll_trigger(Arc::clone(&self.relay_client), self.key_source(), Arc::clone(&trigger));
        (site, trigger)
    }

    /// Bodies of every request the relay received, in order.
    pub async fn relayed_requests(&self) -> Vec<serde_json::Value> {
        self.relay_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_key(Some(Secret::new(PUBLIC_KEY.to_string()))).await
}

pub async fn spawn_app_without_key() -> TestApp {
    spawn_app_with_key(None).await
}

async fn spawn_app_with_key(public_key: Option<Secret<String>>) -> TestApp {
    Lazy::force(&TRACING);

    let relay_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.relay.base_url = relay_server.uri();
        c
    };
    let relay_client = configuration
        .relay
        .client()
        .expect("Failed to build the relay client.");

    TestApp {
        relay_server,
        relay_client: Arc::new(relay_client),
        public_key,
    }
}

pub fn when_relaying_a_message() -> MockBuilder {
    Mock::given(path("/api/v1.0/email/send")).and(method("POST"))
}

/// Parse a form body the way a browser would post it.
pub fn form_data(body: &str) -> ContactFormData {
    serde_urlencoded::from_str(body).unwrap()
}

pub fn valid_form_data() -> ContactFormData {
    form_data("firstName=Ann&lastName=Lee&email=ann%40example.com&phone=&message=")
}
