use metrics_exporter_prometheus::PrometheusHandle;
use profile_intake::config::StoreConfig;
use profile_intake::submissions::{
    JsonFileSubmissionStore, MemorySubmissionStore, StoreError, StoreProfile, SubmissionStore,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) store_profile: StoreProfile,
}

/// File-backed store when a data file is configured, in-memory otherwise.
pub(crate) fn build_store(config: &StoreConfig) -> Result<Arc<dyn SubmissionStore>, StoreError> {
    let capabilities = config.profile.capabilities();
    match &config.data_file {
        Some(path) => Ok(Arc::new(JsonFileSubmissionStore::open(path, capabilities)?)),
        None => Ok(Arc::new(MemorySubmissionStore::with_capabilities(capabilities))),
    }
}

pub(crate) fn parse_profile(raw: &str) -> Result<StoreProfile, String> {
    StoreProfile::parse(raw).ok_or_else(|| {
        let expected = StoreProfile::ALL
            .iter()
            .map(|profile| profile.label())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown store profile '{raw}', expected one of: {expected}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_intake::submissions::PredicateKind;

    #[test]
    fn memory_store_uses_configured_profile() {
        let store = build_store(&StoreConfig {
            profile: StoreProfile::Document,
            data_file: None,
        })
        .expect("store builds");
        assert!(store.capabilities().supports(PredicateKind::MembershipAll));
        assert!(!store.capabilities().supports(PredicateKind::Count));
    }

    #[test]
    fn data_file_selects_file_store() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("submissions.json");

        let store = build_store(&StoreConfig {
            profile: StoreProfile::BasicDocument,
            data_file: Some(path),
        })
        .expect("store builds");
        assert!(store.all().expect("all").is_empty());
        assert!(!store.capabilities().supports(PredicateKind::TextSearch));
    }

    #[test]
    fn profile_parser_lists_choices() {
        assert_eq!(parse_profile("relational"), Ok(StoreProfile::Relational));
        let message = parse_profile("graph").unwrap_err();
        assert!(message.contains("basic-document"));
    }
}
