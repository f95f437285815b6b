//! File-backed token store.
//!
//! Tokens are kept as JSON in a single file inside a directory opened with
//! capability-based filesystem access, so the store cannot touch paths
//! outside that directory.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::sync::{Mutex, PoisonError};

use crate::auth::{
    domain::{AccessToken, RefreshToken, TokenPair},
    ports::{TokenStore, TokenStoreError, TokenStoreResult},
};
use crate::config::ClientConfig;

const TOKEN_FILE: &str = "tokens.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredTokens {
    #[serde(default)]
    access: Option<AccessToken>,
    #[serde(default)]
    refresh: Option<RefreshToken>,
}

/// Token store persisting to `tokens.json` in a directory.
#[derive(Debug)]
pub struct FileTokenStore {
    dir: Dir,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    /// Opens the store, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(path: &Utf8Path) -> TokenStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Opens the store in the configured token directory.
    ///
    /// Returns `None` when the configuration names no token directory.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn from_config(config: &ClientConfig) -> TokenStoreResult<Option<Self>> {
        config.token_dir().map(Self::open).transpose()
    }

    fn read(&self) -> TokenStoreResult<StoredTokens> {
        match self.dir.read_to_string(TOKEN_FILE) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| TokenStoreError::Corrupt(err.to_string())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(StoredTokens::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, tokens: &StoredTokens) -> TokenStoreResult<()> {
        let contents =
            serde_json::to_string(tokens).map_err(|err| TokenStoreError::Corrupt(err.to_string()))?;
        self.dir.write(TOKEN_FILE, contents)?;
        Ok(())
    }

    fn modify(&self, apply: impl FnOnce(&mut StoredTokens)) -> TokenStoreResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut tokens = self.read()?;
        apply(&mut tokens);
        self.write(&tokens)
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> TokenStoreResult<Option<AccessToken>> {
        Ok(self.read()?.access)
    }

    fn refresh_token(&self) -> TokenStoreResult<Option<RefreshToken>> {
        Ok(self.read()?.refresh)
    }

    fn store_pair(&self, pair: &TokenPair) -> TokenStoreResult<()> {
        self.modify(|tokens| {
            tokens.access = Some(pair.access.clone());
            tokens.refresh = Some(pair.refresh.clone());
        })
    }

    fn store_access(&self, access: &AccessToken) -> TokenStoreResult<()> {
        self.modify(|tokens| tokens.access = Some(access.clone()))
    }

    fn clear(&self) -> TokenStoreResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        match self.dir.remove_file(TOKEN_FILE) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
