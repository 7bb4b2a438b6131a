//! Banker session tokens.
//!
//! A random token is minted when a game is created and stored in two
//! places: on the game record (server side) and in the creating client's
//! local store keyed by join code. A client presenting a token equal to
//! the stored one is the banker - the only writer; everyone else is a
//! read-only viewer. This is the whole of the auth contract; there is no
//! account system.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::code::{JoinCode, CODE_ALPHABET};

/// Length of a minted session token.
pub const TOKEN_LENGTH: usize = 32;

/// Opaque bearer token identifying the banker client.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Mint a token with the given RNG (deterministic in tests).
    #[must_use]
    pub fn mint_with(rng: &mut impl Rng) -> Self {
        let token = (0..TOKEN_LENGTH)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        Self(token)
    }

    /// Mint a token from system entropy.
    #[must_use]
    pub fn mint() -> Self {
        Self::mint_with(&mut ChaCha8Rng::from_entropy())
    }

    /// The token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What a client is allowed to do with a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// The privileged operator: enters rolls, triggers banking and round
    /// transitions.
    Banker,
    /// Read-only observer.
    Viewer,
}

/// Resolve the role for a client.
///
/// Banker iff the game has a stored token and the client presents an
/// equal one. A game with no stored token has no banker seat to claim.
#[must_use]
pub fn role_for(stored: Option<&SessionToken>, presented: Option<&SessionToken>) -> Role {
    match (stored, presented) {
        (Some(stored), Some(presented)) if stored == presented => Role::Banker,
        _ => Role::Viewer,
    }
}

/// Client-side token store, keyed by join code.
///
/// Mirrors the browser-local storage the reference client uses: one token
/// per game the client has created.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionStore {
    tokens: FxHashMap<JoinCode, SessionToken>,
}

impl SessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the token for a game this client created.
    pub fn insert(&mut self, code: JoinCode, token: SessionToken) {
        self.tokens.insert(code, token);
    }

    /// Token held for a game, if any.
    #[must_use]
    pub fn get(&self, code: &JoinCode) -> Option<&SessionToken> {
        self.tokens.get(code)
    }

    /// Drop the token for a game.
    pub fn remove(&mut self, code: &JoinCode) -> Option<SessionToken> {
        self.tokens.remove(code)
    }
}
