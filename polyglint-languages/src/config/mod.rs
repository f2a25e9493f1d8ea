//! TOML language configuration

pub mod types;

pub use types::{
    LanguageConfig, MaintainerConfig, MetadataConfig, RuleConfig, SplitterConfig,
    SymbolConfig, SymbolPairConfig, TaggerConfig,
};
