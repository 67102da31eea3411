//! Ready-wired service context against the mock backend

use std::sync::Arc;

use StudyBuddy::auth::TokenStore;
use StudyBuddy::config::Settings;
use StudyBuddy::services::ServiceFactory;
use StudyBuddy::InMemoryTokenStore;

use super::api_mock::StudyBuddyMockServer;
use super::test_data::make_token;

pub struct TestContext {
    pub mock: StudyBuddyMockServer,
    pub services: ServiceFactory,
    pub tokens: Arc<InMemoryTokenStore>,
}

impl TestContext {
    /// Context with no stored credential
    pub async fn new() -> Self {
        let mock = StudyBuddyMockServer::start().await;

        let mut settings = Settings::default();
        settings.api.base_url = mock.uri();
        settings.api.timeout_seconds = 5;

        let tokens = Arc::new(InMemoryTokenStore::new());
        let services =
            ServiceFactory::new(settings, tokens.clone()).expect("service factory builds");

        Self {
            mock,
            services,
            tokens,
        }
    }

    /// Context logged in as the given user
    pub async fn authenticated(user_id: &str, role: &str) -> Self {
        let ctx = Self::new().await;
        ctx.tokens.set_token(&make_token(user_id, role, user_id));
        ctx
    }

    pub fn page_size(&self) -> u32 {
        self.services.settings().api.page_size
    }
}
