use serde::{Deserialize, Serialize};

/// 키를 사용하는 외부 서비스.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiService {
    Gemini,
    OpenAi,
    Anthropic,
    GoogleSolar,
    GoogleMaps,
}

impl ApiService {
    pub const ALL: [ApiService; 5] = [
        ApiService::Gemini,
        ApiService::OpenAi,
        ApiService::Anthropic,
        ApiService::GoogleSolar,
        ApiService::GoogleMaps,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ApiService::Gemini => "Gemini",
            ApiService::OpenAi => "OpenAI",
            ApiService::Anthropic => "Anthropic",
            ApiService::GoogleSolar => "Google Solar",
            ApiService::GoogleMaps => "Google Maps",
        }
    }

    pub fn is_google(&self) -> bool {
        matches!(self, ApiService::GoogleSolar | ApiService::GoogleMaps)
    }

    /// 서비스 그룹 공용 키의 환경 변수 이름.
    pub fn unified_env_var(&self) -> &'static str {
        if self.is_google() {
            "GOOGLE_API_KEY"
        } else {
            "SOLAR_AI_API_KEY"
        }
    }

    /// 서비스 전용 키의 환경 변수 이름.
    pub fn service_env_var(&self) -> &'static str {
        match self {
            ApiService::Gemini => "GEMINI_API_KEY",
            ApiService::OpenAi => "OPENAI_API_KEY",
            ApiService::Anthropic => "ANTHROPIC_API_KEY",
            ApiService::GoogleSolar => "GOOGLE_SOLAR_API_KEY",
            ApiService::GoogleMaps => "GOOGLE_MAPS_API_KEY",
        }
    }
}

/// 설정 파일의 `[api_keys]` 섹션. 빈 문자열은 미설정으로 본다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeys {
    /// AI 서비스 공용 키
    pub ai_unified: String,
    /// Google 서비스 공용 키
    pub google_unified: String,
    pub gemini: String,
    pub openai: String,
    pub anthropic: String,
    pub google_solar: String,
    pub google_maps: String,
}

impl ApiKeys {
    fn unified(&self, service: ApiService) -> &str {
        if service.is_google() {
            &self.google_unified
        } else {
            &self.ai_unified
        }
    }

    fn service(&self, service: ApiService) -> &str {
        match service {
            ApiService::Gemini => &self.gemini,
            ApiService::OpenAi => &self.openai,
            ApiService::Anthropic => &self.anthropic,
            ApiService::GoogleSolar => &self.google_solar,
            ApiService::GoogleMaps => &self.google_maps,
        }
    }
}

/// 키를 찾은 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    ConfigUnified,
    ConfigService,
    EnvUnified,
    EnvService,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub key: String,
    pub source: KeySource,
}

/// 우선순위대로 키를 찾는다: 설정 공용 키 → 설정 전용 키 → 환경 변수 공용 키 → 환경 변수 전용 키.
///
/// `env`는 환경 변수 조회 함수로, 보통 `|name| std::env::var(name).ok()`를 넘긴다.
pub fn resolve_api_key<F>(keys: &ApiKeys, service: ApiService, env: F) -> Option<ResolvedKey>
where
    F: Fn(&str) -> Option<String>,
{
    let candidates = [
        (Some(keys.unified(service).to_string()), KeySource::ConfigUnified),
        (Some(keys.service(service).to_string()), KeySource::ConfigService),
        (env(service.unified_env_var()), KeySource::EnvUnified),
        (env(service.service_env_var()), KeySource::EnvService),
    ];
    for (candidate, source) in candidates {
        let Some(key) = candidate else { continue };
        let key = key.trim();
        if !key.is_empty() {
            return Some(ResolvedKey {
                key: key.to_string(),
                source,
            });
        }
    }
    None
}

/// 프로세스 환경 변수를 사용해 키를 찾는다.
pub fn resolve_api_key_from_env(keys: &ApiKeys, service: ApiService) -> Option<ResolvedKey> {
    resolve_api_key(keys, service, |name| std::env::var(name).ok())
}
