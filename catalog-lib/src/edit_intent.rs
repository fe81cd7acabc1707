//! One-shot edit-authorization tokens.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use rand::Rng;

const DEFAULT_TTL: Duration = Duration::from_secs(60);

struct Intent {
    id: String,
    expires_at: Instant,
}

/// Issues single-use tokens that authorize editing one entity.
///
/// A token is bound to an entity id and expires after the TTL (60 seconds
/// by default). Validation always consumes the token, valid or not, so a
/// token can never be replayed.
pub struct EditIntents {
    store: DashMap<String, Intent>,
    ttl: Duration,
}

impl EditIntents {
    /// Creates an issuer with the default 60 second TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Creates an issuer with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    /// Issues a token authorizing a single edit of the entity `id`.
    pub fn allow_once(&self, id: &str) -> String {
        let token = random_token();
        self.store.insert(
            token.clone(),
            Intent {
                id: id.to_string(),
                expires_at: Instant::now() + self.ttl,
            },
        );
        token
    }

    /// Consumes the token and returns whether it authorized editing `id`.
    ///
    /// Returns `false` for missing tokens, tokens bound to another id,
    /// and expired tokens. The token is removed in every case.
    pub fn validate_and_consume(&self, id: &str, token: Option<&str>) -> bool {
        self.consume_at(id, token, Instant::now())
    }

    fn consume_at(&self, id: &str, token: Option<&str>, now: Instant) -> bool {
        let Some(token) = token else {
            return false;
        };
        let Some((_, intent)) = self.store.remove(token) else {
            return false;
        };
        intent.id == id && now <= intent.expires_at
    }
}

impl Default for EditIntents {
    fn default() -> Self {
        Self::new()
    }
}

fn random_token() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
