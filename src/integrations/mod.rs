//! 외부 서비스(AI 채팅, Google Solar/Maps) 연동에 필요한 보조 기능.

pub mod api_keys;

pub use api_keys::{resolve_api_key, resolve_api_key_from_env, ApiKeys, ApiService, KeySource, ResolvedKey};
