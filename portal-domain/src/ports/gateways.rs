use async_trait::async_trait;

use crate::entities::{
    AdminRegistration, AdminRegistrationQuery, AdminRegistrationUpdate, CurrentUser, Event,
    EventQuery, LoginRequest, Registration, RegistrationCreate, RegistrationExportQuery,
    RegistrationUpdate, TokenResponse,
};
use crate::error::GatewayError;
use crate::value_objects::RegistrationId;

pub type GatewayResult<T> = Result<T, GatewayError>;

#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    async fn list_mine(&self, token: &str) -> GatewayResult<Vec<Registration>>;
    async fn create(&self, token: &str, payload: &RegistrationCreate)
        -> GatewayResult<Registration>;
    async fn update(
        &self,
        token: &str,
        id: RegistrationId,
        payload: &RegistrationUpdate,
    ) -> GatewayResult<Registration>;

    async fn admin_list(
        &self,
        token: &str,
        query: &AdminRegistrationQuery,
    ) -> GatewayResult<Vec<AdminRegistration>>;
    async fn admin_get(&self, token: &str, id: RegistrationId) -> GatewayResult<AdminRegistration>;
    async fn admin_update(
        &self,
        token: &str,
        id: RegistrationId,
        payload: &AdminRegistrationUpdate,
    ) -> GatewayResult<AdminRegistration>;
    async fn admin_delete(&self, token: &str, id: RegistrationId) -> GatewayResult<()>;
    async fn admin_export(
        &self,
        token: &str,
        query: &RegistrationExportQuery,
    ) -> GatewayResult<Vec<u8>>;
}

#[async_trait]
pub trait EventGateway: Send + Sync {
    async fn list_events(&self, query: &EventQuery) -> GatewayResult<Vec<Event>>;
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> GatewayResult<TokenResponse>;
    async fn current_user(&self, token: &str) -> GatewayResult<CurrentUser>;
}
