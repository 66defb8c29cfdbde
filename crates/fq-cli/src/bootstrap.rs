use anyhow::Context;
use fq_config::FqConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FqConfig> {
    if let Err(error) = dotenvy::dotenv()
        && !error.not_found()
    {
        return Err(error).context("failed to load .env file");
    }

    let mut config: FqConfig = FqConfig::figment()
        .extract()
        .map_err(fq_config::ConfigError::from)
        .context("failed to load factquiz configuration")?;
    apply_overrides(&mut config, flags);
    config.api.validate()?;

    tracing::debug!(
        root = %config.api.endpoint_root(),
        policy = %config.policy.correct_choice,
        "configuration loaded"
    );
    Ok(config)
}

fn apply_overrides(config: &mut FqConfig, flags: &GlobalFlags) {
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
    }
    if let Some(path) = &flags.session_file {
        config.session.path.clone_from(path);
    }
}
