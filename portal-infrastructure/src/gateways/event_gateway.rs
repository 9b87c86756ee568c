use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use portal_domain::ports::{EventGateway, GatewayResult};
use portal_domain::{Event, EventQuery};

pub struct HttpEventGateway {
    api: ApiClient,
}

impl HttpEventGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EventGateway for HttpEventGateway {
    async fn list_events(&self, query: &EventQuery) -> GatewayResult<Vec<Event>> {
        let request = self.api.request(Method::GET, "/events", None).query(query);
        self.api.send_json(request).await
    }
}
