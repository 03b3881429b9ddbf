//! Session state and the login/logout flows.
//!
//! `AuthService` is the one source of truth for authentication in the
//! process: guards and any navigation chrome read it, nothing else keeps
//! an auth flag of its own.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};

use crate::modules::auth::domain::SessionUser;
use crate::modules::auth::infrastructure::AuthApi;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::storage::{
    KeyValueStore, KEY_AUTH_TOKEN, KEY_ID, KEY_MAX_AGE, KEY_NAME, KEY_PROFILE_IMG, KEY_USER,
};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info, log_warn};

#[derive(Debug, Default, Clone)]
struct Session {
    user: Option<SessionUser>,
    expires_at: Option<DateTime<Utc>>,
}

pub struct AuthService {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn KeyValueStore>,
    session: RwLock<Session>,
}

impl AuthService {
    /// Restores the session from durable storage. The session starts
    /// authenticated only when a persisted user exists and its expiry is
    /// strictly in the future; otherwise it starts unauthenticated and
    /// stale entries are left in place until the next logout.
    pub fn restore(api: Arc<dyn AuthApi>, store: Arc<dyn KeyValueStore>) -> Self {
        let persisted_user = store
            .get(KEY_USER)
            .and_then(|raw| serde_json::from_str::<SessionUser>(&raw).ok());
        let expires_at = store
            .get(KEY_MAX_AGE)
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(DateTime::<Utc>::from_timestamp_millis);

        let session = match (persisted_user, expires_at) {
            (Some(user), Some(expiry)) if expiry > Utc::now() => {
                log_debug!("Restored session for user {} (expires {})", user.id, expiry);
                Session {
                    user: Some(user),
                    expires_at: Some(expiry),
                }
            }
            _ => Session::default(),
        };

        Self {
            api,
            store,
            session: RwLock::new(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        let session = self.session.read().unwrap_or_else(PoisonError::into_inner);
        session.user.is_some()
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        let session = self.session.read().unwrap_or_else(PoisonError::into_inner);
        session.user.clone()
    }

    /// Absolute expiry of the current session, when authenticated.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let session = self.session.read().unwrap_or_else(PoisonError::into_inner);
        session.expires_at
    }

    /// Sends the credentials to the auth endpoint. On success the
    /// returned identity, token and absolute expiry are persisted and the
    /// in-memory session becomes authenticated; on failure the session is
    /// left untouched.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<SessionUser> {
        Validator::validate_email(email)?;

        let login = self.api.login(email, password).await?;

        let expires_at = Utc::now() + Duration::milliseconds(login.max_age);
        let user = SessionUser {
            id: login.id,
            name: login.name,
            email: email.to_string(),
            profile_img: login.profile_img,
        };

        self.store.set(KEY_ID, &user.id.to_string())?;
        self.store.set(KEY_NAME, &user.name)?;
        self.store
            .set(KEY_PROFILE_IMG, user.profile_img.as_deref().unwrap_or(""))?;
        self.store.set(KEY_AUTH_TOKEN, &login.token)?;
        self.store
            .set(KEY_MAX_AGE, &expires_at.timestamp_millis().to_string())?;
        self.store.set(KEY_USER, &serde_json::to_string(&user)?)?;

        {
            let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
            session.user = Some(user.clone());
            session.expires_at = Some(expires_at);
        }

        log_info!("User {} logged in", user.id);
        Ok(user)
    }

    /// Invalidates the server-side session, then clears all local state.
    /// Local cleanup happens even when the remote call fails; the failure
    /// is still surfaced afterwards.
    pub async fn logout(&self) -> AppResult<()> {
        let remote = self.api.logout().await;

        if remote.is_err() {
            log_warn!("Logout endpoint failed; clearing local session anyway");
        }

        self.store.clear()?;
        {
            let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
            *session = Session::default();
        }

        remote?;
        log_info!("User logged out");
        Ok(())
    }
}
