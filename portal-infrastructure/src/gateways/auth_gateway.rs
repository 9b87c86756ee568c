use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use portal_domain::ports::{AuthGateway, GatewayResult};
use portal_domain::{CurrentUser, LoginRequest, TokenResponse};

pub struct HttpAuthGateway {
    api: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, request: &LoginRequest) -> GatewayResult<TokenResponse> {
        let builder = self
            .api
            .request(Method::POST, "/auth/login", None)
            .json(request);
        self.api.send_json(builder).await
    }

    async fn current_user(&self, token: &str) -> GatewayResult<CurrentUser> {
        self.api
            .send_json(self.api.request(Method::GET, "/auth/me", Some(token)))
            .await
    }
}
