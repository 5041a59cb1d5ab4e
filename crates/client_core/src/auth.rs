use std::sync::Arc;

use tracing::info;

use crate::action::{Action, LoginField};
use crate::api::Api;
use crate::error::ClientError;
use crate::session::{SessionStore, ACCESS_TOKEN_KEY};
use crate::store::Store;

/// Credential entry, login submission, and session restoration.
pub struct AuthController {
    store: Arc<Store>,
    api: Arc<dyn Api>,
    session: Arc<dyn SessionStore>,
}

impl AuthController {
    pub fn new(store: Arc<Store>, api: Arc<dyn Api>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            api,
            session,
        }
    }

    pub fn set_login_field(&self, field: LoginField) {
        self.store.dispatch(Action::SetLoginField(field));
    }

    /// Exchanges the drafted credentials for a bearer token, publishes it,
    /// and persists it for the next process start. A failed exchange leaves
    /// both the draft and the current token untouched.
    pub async fn login(&self) -> Result<(), ClientError> {
        let fields = self.store.state().auth.login_fields;
        let access_token = self.api.login(&fields.email, &fields.password).await?;
        self.store.dispatch(Action::SetAccessToken {
            access_token: access_token.clone(),
        });
        self.session
            .save(ACCESS_TOKEN_KEY, &access_token)
            .await
            .map_err(ClientError::storage)?;
        info!(email = %fields.email, "auth: login succeeded");
        Ok(())
    }

    /// Republishes a token persisted by an earlier login, if any. The token
    /// is not validated against the server; an expired one surfaces as an
    /// authorization failure on its first authenticated call.
    pub async fn restore_session(&self) -> Result<bool, ClientError> {
        let stored = self
            .session
            .load(ACCESS_TOKEN_KEY)
            .await
            .map_err(ClientError::storage)?;
        let Some(access_token) = stored.filter(|token| !token.is_empty()) else {
            info!("auth: no persisted session to restore");
            return Ok(false);
        };
        self.store.dispatch(Action::SetAccessToken { access_token });
        info!("auth: session restored from persisted token");
        Ok(true)
    }
}
