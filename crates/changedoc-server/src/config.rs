//! Process configuration: flags with environment fallbacks

use changedoc_core::errors::Result;
use changedoc_core::logging_facility::Profile;
use changedoc_engine::advisory::genai::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use changedoc_engine::advisory::{
    Advisory, EchoAdvisory, GenaiAdvisory, GenaiConfig, UnconfiguredAdvisory,
};
use changedoc_engine::RepositoryAcquirer;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdvisoryBackend {
    /// Gemini-style generateContent API (needs GENAI_API_KEY)
    Genai,
    /// Offline: reflect the payload keys
    Echo,
}

#[derive(Debug, Parser)]
#[command(name = "changedoc")]
#[command(about = "ChangeDoc - change report generation service", long_about = None)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "CHANGEDOC_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Logging profile (development or production)
    #[arg(long, env = "CHANGEDOC_LOG_PROFILE", default_value = "development")]
    pub log_profile: Profile,

    /// Advisory backend used for non-deterministic output modes
    #[arg(long, value_enum, env = "CHANGEDOC_ADVISORY", default_value_t = AdvisoryBackend::Genai)]
    pub advisory: AdvisoryBackend,

    #[arg(long, env = "GENAI_API_KEY", hide_env_values = true)]
    pub genai_api_key: Option<String>,

    #[arg(long, env = "GENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub genai_model: String,

    #[arg(long, env = "GENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub genai_base_url: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub advisory_timeout_secs: u64,

    /// git executable used for repository acquisition
    #[arg(long, default_value = "git")]
    pub git_bin: PathBuf,
}

impl Cli {
    /// Resolve the advisory once for the process lifetime.
    ///
    /// `genai` without an API key yields the unconfigured backend, which
    /// fails each advisory call instead of failing startup.
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client for the genai backend cannot be built.
    pub fn build_advisory(&self) -> Result<Arc<dyn Advisory>> {
        match self.advisory {
            AdvisoryBackend::Echo => Ok(Arc::new(EchoAdvisory)),
            AdvisoryBackend::Genai => match self.genai_api_key.as_deref().map(str::trim) {
                Some(key) if !key.is_empty() => {
                    let mut config = GenaiConfig::new(key);
                    config.model = self.genai_model.clone();
                    config.base_url = self.genai_base_url.clone();
                    config.timeout = Duration::from_secs(self.advisory_timeout_secs);
                    Ok(Arc::new(GenaiAdvisory::new(config)?))
                }
                _ => Ok(Arc::new(UnconfiguredAdvisory)),
            },
        }
    }

    pub fn acquirer(&self) -> RepositoryAcquirer {
        RepositoryAcquirer::new(self.git_bin.clone())
    }
}
