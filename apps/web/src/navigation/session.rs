use std::collections::HashMap;
use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::NavigationState;

pub const SESSION_COOKIE: &str = "portfolio_session";

/// Sessions not seen for this long are dropped on the next save.
const SESSION_IDLE_HOURS: i64 = 12;

/// Hard cap on stored sessions; the least recently seen is evicted first.
pub const MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Session {
    navigation: NavigationState,
    last_seen: DateTime<Utc>,
}

/// In-memory navigation state per browser session. Never persisted.
///
/// Visitors who never select a page have no entry: they are on Home.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation state of a known session, marking it as seen.
    pub async fn load(&self, id: Uuid) -> Option<NavigationState> {
        self.load_at(id, Utc::now()).await
    }

    async fn load_at(&self, id: Uuid, now: DateTime<Utc>) -> Option<NavigationState> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_seen = now;
        Some(session.navigation)
    }

    pub async fn save(&self, id: Uuid, navigation: NavigationState) {
        self.save_at(id, navigation, Utc::now()).await
    }

    async fn save_at(&self, id: Uuid, navigation: NavigationState, now: DateTime<Utc>) {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&id) {
            let cutoff = now - Duration::hours(SESSION_IDLE_HOURS);
            sessions.retain(|_, s| s.last_seen > cutoff);

            if sessions.len() >= MAX_SESSIONS {
                let oldest = sessions
                    .iter()
                    .min_by_key(|(_, s)| s.last_seen)
                    .map(|(id, _)| *id);
                if let Some(oldest) = oldest {
                    sessions.remove(&oldest);
                    debug!(session_id = %oldest, "Evicted least recently seen session");
                }
            }
            debug!(session_id = %id, active = sessions.len() + 1, "Opened navigation session");
        }
        sessions.insert(
            id,
            Session {
                navigation,
                last_seen: now,
            },
        );
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Session id carried by the request's cookies, if well-formed.
pub fn session_id(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value().trim()).ok())
}

pub fn session_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
