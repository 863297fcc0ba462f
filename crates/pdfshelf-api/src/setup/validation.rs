//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.
//! Storage settings are deliberately not checked here.

use anyhow::Result;
use pdfshelf_core::Config;

/// Validate critical configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.login_password().is_empty() {
        return Err(anyhow::anyhow!("LOGIN_PASSWORD must be set"));
    }

    if config.is_production() && config.login_password().len() < 12 {
        tracing::warn!("LOGIN_PASSWORD is shorter than 12 characters");
    }

    if config.session_ttl_secs() == 0 {
        return Err(anyhow::anyhow!("SESSION_TTL_SECS cannot be 0"));
    }

    if config.presigned_url_ttl_secs() == 0 {
        return Err(anyhow::anyhow!("PRESIGNED_URL_TTL_SECS cannot be 0"));
    }

    // SigV4 presigned URLs are valid for at most 7 days.
    if config.presigned_url_ttl_secs() > 7 * 24 * 60 * 60 {
        return Err(anyhow::anyhow!(
            "PRESIGNED_URL_TTL_SECS cannot exceed 604800 (7 days)"
        ));
    }

    if config.max_upload_size_bytes() == 0 {
        return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB cannot be 0"));
    }

    let missing = config.storage().missing_vars();
    if !missing.is_empty() {
        tracing::warn!(
            missing = %missing.join(", "),
            "Storage is not fully configured"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(extra: &[(&str, &str)]) -> Config {
        let vars: Vec<(String, String)> = [("LOGIN_PASSWORD", "secret")]
            .iter()
            .chain(extra.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| {
            vars.iter()
                .rev()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        })
        .unwrap()
    }

    #[test]
    fn defaults_are_valid_without_storage() {
        assert!(validate_config(&config(&[])).is_ok());
    }

    #[test]
    fn zero_ttls_are_rejected() {
        assert!(validate_config(&config(&[("SESSION_TTL_SECS", "0")])).is_err());
        assert!(validate_config(&config(&[("PRESIGNED_URL_TTL_SECS", "0")])).is_err());
    }

    #[test]
    fn presigned_ttl_is_capped_at_seven_days() {
        assert!(validate_config(&config(&[("PRESIGNED_URL_TTL_SECS", "604800")])).is_ok());
        assert!(validate_config(&config(&[("PRESIGNED_URL_TTL_SECS", "604801")])).is_err());
    }
}
