//! API 키 우선순위 조회 테스트.
use std::collections::HashMap;

use solar_finance_toolbox::integrations::{resolve_api_key, ApiKeys, ApiService, KeySource};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn unified_config_key_wins() {
    let keys = ApiKeys {
        ai_unified: "unified".into(),
        openai: "service".into(),
        ..ApiKeys::default()
    };
    let r = resolve_api_key(&keys, ApiService::OpenAi, env_of(&[("OPENAI_API_KEY", "env")]))
        .expect("key");
    assert_eq!(r.key, "unified");
    assert_eq!(r.source, KeySource::ConfigUnified);
}

#[test]
fn falls_back_to_service_key_then_env() {
    let keys = ApiKeys {
        anthropic: "  svc  ".into(),
        ..ApiKeys::default()
    };
    let r = resolve_api_key(&keys, ApiService::Anthropic, env_of(&[])).expect("key");
    assert_eq!(r.key, "svc");
    assert_eq!(r.source, KeySource::ConfigService);

    let r = resolve_api_key(
        &ApiKeys::default(),
        ApiService::Gemini,
        env_of(&[("SOLAR_AI_API_KEY", "u"), ("GEMINI_API_KEY", "g")]),
    )
    .expect("key");
    assert_eq!(r.source, KeySource::EnvUnified);

    let r = resolve_api_key(
        &ApiKeys::default(),
        ApiService::Gemini,
        env_of(&[("SOLAR_AI_API_KEY", "   "), ("GEMINI_API_KEY", "g")]),
    )
    .expect("key");
    assert_eq!(r.key, "g");
    assert_eq!(r.source, KeySource::EnvService);
}

#[test]
fn google_services_use_google_unified_key() {
    let keys = ApiKeys {
        ai_unified: "ai".into(),
        google_unified: "google".into(),
        ..ApiKeys::default()
    };
    for service in [ApiService::GoogleSolar, ApiService::GoogleMaps] {
        let r = resolve_api_key(&keys, service, env_of(&[])).expect("key");
        assert_eq!(r.key, "google");
    }
}

#[test]
fn missing_everywhere_is_none() {
    for service in ApiService::ALL {
        assert!(resolve_api_key(&ApiKeys::default(), service, env_of(&[])).is_none());
    }
}
