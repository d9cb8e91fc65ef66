use std::sync::Arc;

use alamat_config::Config;
use alamat_core::AddressVerifier;
use alamat_provider_onemap::OneMapVerifier;

/// Every verifier the configuration enables, in registration order
pub fn enabled_verifiers(config: &Config) -> Vec<Arc<dyn AddressVerifier>> {
    let mut verifiers: Vec<Arc<dyn AddressVerifier>> = Vec::new();

    if config.onemap.enabled {
        verifiers.push(Arc::new(OneMapVerifier::with_base_url(
            config.onemap.base_url.clone(),
        )));
    }

    verifiers
}

/// Look up an enabled verifier by provider name
pub fn find(config: &Config, name: &str) -> Option<Arc<dyn AddressVerifier>> {
    enabled_verifiers(config)
        .into_iter()
        .find(|verifier| verifier.metadata().name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onemap_enabled_by_default() {
        let config = Config::default();
        let verifiers = enabled_verifiers(&config);

        assert_eq!(verifiers.len(), 1);
        assert_eq!(verifiers[0].metadata().name, "OneMap");
    }

    #[test]
    fn test_disabled_provider_is_not_registered() {
        let mut config = Config::default();
        config.onemap.enabled = false;

        assert!(enabled_verifiers(&config).is_empty());
        assert!(find(&config, "onemap").is_none());
    }

    #[test]
    fn test_find_ignores_case() {
        let config = Config::default();

        assert!(find(&config, "onemap").is_some());
        assert!(find(&config, "ONEMAP").is_some());
    }

    #[test]
    fn test_find_unknown_name() {
        let config = Config::default();

        assert!(find(&config, "nominatim").is_none());
    }
}
