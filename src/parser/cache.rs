//! Process-wide cache of compiled parsers, one per configuration
//!
//! Compiling a grammar builds a handful of regexes, so parsers are shared:
//! the cache hands out `Arc<PromptParser>` but holds only weak references,
//! so a configuration that has fallen out of use does not pin its parser
//! in memory. Dead entries are swept whenever a new parser is inserted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use once_cell::sync::Lazy;

use super::PromptParser;
use crate::config::GrammarConfig;
use crate::error::ConfigError;

static PARSERS: Lazy<Mutex<HashMap<GrammarConfig, Weak<PromptParser>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Fetch the shared parser for `config`, compiling it on first use.
pub fn shared_parser(config: &GrammarConfig) -> Result<Arc<PromptParser>, ConfigError> {
    let mut parsers = PARSERS.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(parser) = parsers.get(config).and_then(Weak::upgrade) {
        return Ok(parser);
    }
    let parser = Arc::new(PromptParser::new(config.clone())?);
    parsers.retain(|_, entry| entry.strong_count() > 0);
    parsers.insert(config.clone(), Arc::downgrade(&parser));
    Ok(parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_config_shares_one_parser() {
        let config = GrammarConfig::default().with_variant_delimiters("<similar>", "</similar>");
        let first = shared_parser(&config).unwrap();
        let second = shared_parser(&config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_configs_get_distinct_parsers() {
        let first = shared_parser(&GrammarConfig::default()).unwrap();
        let config = GrammarConfig::default().with_wildcard_wrap("**");
        let second = shared_parser(&config).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_dropped_parsers_are_rebuilt() {
        let config = GrammarConfig::default().with_wrap_delimiters("%%{", "}");
        drop(shared_parser(&config).unwrap());
        // The weak entry is now dead; a fresh request must recompile.
        shared_parser(&config).unwrap();
    }

    #[test]
    fn test_invalid_config_is_not_cached() {
        let config = GrammarConfig::default().with_variant_delimiters("", "}");
        assert!(shared_parser(&config).is_err());
        assert!(shared_parser(&config).is_err());
    }
}
