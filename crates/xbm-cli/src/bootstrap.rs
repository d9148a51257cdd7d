//! CLI bootstrap - the composition root.
//!
//! The backend is chosen once here from the environment:
//! - `remote`: spreadsheet store (`xbm-sheets`) and the embed relay (`xbm-embed`)
//! - `mock`: local mock store (`xbm-db`) and the offline embed fetcher
//!
//! Both keep their store identity in the local database, each under its own key.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use xbm_core::{
    AppCore, ConfigError, EmbedData, EmbedError, EmbedFetcherPort, EntityStore, SessionRepository,
    database_path,
};
use xbm_db::{MockStore, SqliteSessionRepository, setup_database};
use xbm_embed::{EmbedClientConfig, MockEmbedFetcher, ProxyEmbedFetcher};
use xbm_sheets::{DefaultSheetsStore, SheetsClientConfig};

/// Backend selector (`remote` or `mock`).
pub const BACKEND_ENV: &str = "XBM_BACKEND";
/// Bearer credential for the remote backend.
pub const ACCESS_TOKEN_ENV: &str = "XBM_ACCESS_TOKEN";
/// Embed relay endpoint, required by `add` on the remote backend.
pub const EMBED_PROXY_ENV: &str = "XBM_EMBED_PROXY_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Remote,
    Mock,
}

impl Backend {
    /// Name used for the backend's session key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Mock => "mock",
        }
    }
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "remote" => Ok(Self::Remote),
            "mock" => Ok(Self::Mock),
            other => anyhow::bail!("{BACKEND_ENV} must be 'remote' or 'mock', got '{other}'"),
        }
    }
}

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub backend: Backend,
    pub access_token: Option<String>,
    pub embed_proxy_url: Option<String>,
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Ok(Self {
            backend: get(BACKEND_ENV).as_deref().unwrap_or("remote").parse()?,
            access_token: get(ACCESS_TOKEN_ENV),
            embed_proxy_url: get(EMBED_PROXY_ENV),
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub app: AppCore,
    /// Whether `add` can reach a real embed source.
    pub embed_configured: bool,
}

impl CliContext {
    pub fn app(&self) -> &AppCore {
        &self.app
    }

    /// Fail with a configuration error unless an embed source is available.
    pub fn require_embed(&self) -> Result<(), ConfigError> {
        if self.embed_configured {
            Ok(())
        } else {
            Err(ConfigError::missing(EMBED_PROXY_ENV))
        }
    }
}

/// Stand-in fetcher when no relay is configured; `add` checks
/// `CliContext::require_embed` before it is ever reached.
struct UnconfiguredEmbed;

#[async_trait]
impl EmbedFetcherPort for UnconfiguredEmbed {
    async fn fetch(&self, _url: &str) -> Result<EmbedData, EmbedError> {
        Err(EmbedError::Unavailable {
            message: ConfigError::missing(EMBED_PROXY_ENV).to_string(),
        })
    }
}

/// Bootstrap the CLI application against the default database path.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let db_path = database_path()?;
    bootstrap_with_database(config, &db_path).await
}

/// Open only the selected backend's session, without building a store.
///
/// Logout needs nothing more, so it works without credentials.
pub async fn open_session(
    config: &CliConfig,
    db_path: &Path,
) -> Result<Arc<dyn SessionRepository>> {
    let pool = setup_database(db_path).await?;
    Ok(Arc::new(SqliteSessionRepository::new(pool, config.backend.as_str())))
}

/// Opens the local database, reads the remembered store identity and builds
/// the selected backend. Nothing touches the network here.
pub async fn bootstrap_with_database(config: CliConfig, db_path: &Path) -> Result<CliContext> {
    let pool = setup_database(db_path).await?;
    let session = Arc::new(SqliteSessionRepository::new(
        pool.clone(),
        config.backend.as_str(),
    ));

    let (store, embed, embed_configured): (Arc<dyn EntityStore>, Arc<dyn EmbedFetcherPort>, bool) =
        match config.backend {
            Backend::Mock => (
                Arc::new(MockStore::new(pool)),
                Arc::new(MockEmbedFetcher::new()),
                true,
            ),
            Backend::Remote => {
                let token = config
                    .access_token
                    .ok_or_else(|| ConfigError::missing(ACCESS_TOKEN_ENV))?;
                let sheets_config = SheetsClientConfig::new()
                    .with_token(token)
                    .with_store_id(session.load_store_id().await?);
                let store: Arc<dyn EntityStore> = Arc::new(DefaultSheetsStore::new(&sheets_config)?);

                let (embed, configured): (Arc<dyn EmbedFetcherPort>, bool) =
                    match config.embed_proxy_url {
                        Some(url) => (
                            Arc::new(ProxyEmbedFetcher::new(&EmbedClientConfig::new(url))?),
                            true,
                        ),
                        None => (Arc::new(UnconfiguredEmbed), false),
                    };
                (store, embed, configured)
            }
        };

    debug!(backend = store.backend_name(), db = %db_path.display(), "CLI bootstrapped");
    Ok(CliContext {
        app: AppCore::new(store, embed, session),
        embed_configured,
    })
}
