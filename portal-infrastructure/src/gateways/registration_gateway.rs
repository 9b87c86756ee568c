use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use portal_domain::ports::{GatewayResult, RegistrationGateway};
use portal_domain::{
    AdminRegistration, AdminRegistrationQuery, AdminRegistrationUpdate, Registration,
    RegistrationCreate, RegistrationExportQuery, RegistrationId, RegistrationUpdate,
};

pub struct HttpRegistrationGateway {
    api: ApiClient,
}

impl HttpRegistrationGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn list_mine(&self, token: &str) -> GatewayResult<Vec<Registration>> {
        self.api
            .send_json(self.api.request(Method::GET, "/registrations", Some(token)))
            .await
    }

    async fn create(
        &self,
        token: &str,
        payload: &RegistrationCreate,
    ) -> GatewayResult<Registration> {
        let request = self
            .api
            .request(Method::POST, "/registrations", Some(token))
            .json(payload);
        self.api.send_json(request).await
    }

    async fn update(
        &self,
        token: &str,
        id: RegistrationId,
        payload: &RegistrationUpdate,
    ) -> GatewayResult<Registration> {
        let request = self
            .api
            .request(Method::PATCH, &format!("/registrations/{}", id), Some(token))
            .json(payload);
        self.api.send_json(request).await
    }

    async fn admin_list(
        &self,
        token: &str,
        query: &AdminRegistrationQuery,
    ) -> GatewayResult<Vec<AdminRegistration>> {
        let request = self
            .api
            .request(Method::GET, "/registrations/admin", Some(token))
            .query(query);
        self.api.send_json(request).await
    }

    async fn admin_get(&self, token: &str, id: RegistrationId) -> GatewayResult<AdminRegistration> {
        let path = format!("/registrations/admin/{}", id);
        self.api
            .send_json(self.api.request(Method::GET, &path, Some(token)))
            .await
    }

    async fn admin_update(
        &self,
        token: &str,
        id: RegistrationId,
        payload: &AdminRegistrationUpdate,
    ) -> GatewayResult<AdminRegistration> {
        let request = self
            .api
            .request(Method::PATCH, &format!("/registrations/admin/{}", id), Some(token))
            .json(payload);
        self.api.send_json(request).await
    }

    async fn admin_delete(&self, token: &str, id: RegistrationId) -> GatewayResult<()> {
        let path = format!("/registrations/admin/{}", id);
        self.api
            .send_empty(self.api.request(Method::DELETE, &path, Some(token)))
            .await
    }

    async fn admin_export(
        &self,
        token: &str,
        query: &RegistrationExportQuery,
    ) -> GatewayResult<Vec<u8>> {
        let request = self
            .api
            .request(Method::GET, "/registrations/admin/export", Some(token))
            .query(query);
        self.api.send_bytes(request, "Export failed").await
    }
}
