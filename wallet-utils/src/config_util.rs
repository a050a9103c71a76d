use configrs::config::Config as configrs;
use serde::Deserialize;
use std::{fmt::Debug, path::PathBuf};

use anyhow::anyhow;
use tracing::debug;

const ERROR_PREFIX: &str = "[utils]";

/// Read config from `<prefix>*` env variables. Debug builds let a `.env` file in
/// the working directory override them.
pub fn get_config<CFG>(prefix: &'static str) -> Result<CFG, anyhow::Error>
where
    CFG: for<'de> Deserialize<'de> + Debug + Clone,
{
    let cfg = configrs::new().with_env_prefix(prefix);
    let cfg = match dev_env_file() {
        Some(env_file) => {
            debug!("{} overriding {}* env with {:?}", ERROR_PREFIX, prefix, env_file);
            cfg.with_overwrite().with_env(&env_file)
        }
        None => cfg,
    };

    cfg.build::<CFG>()
        .map_err(|err| anyhow!("{} failed reading {}* config: {}", ERROR_PREFIX, prefix, err))
}

fn dev_env_file() -> Option<PathBuf> {
    if !cfg!(debug_assertions) {
        return None;
    }

    let env_file = std::env::current_dir().ok()?.join(".env");
    env_file.is_file().then_some(env_file)
}

#[cfg(test)]
mod config_util_tests {
    use super::*;

    #[test]
    fn test_dev_env_file() {
        // tests run from the crate dir
        let cwd = std::env::current_dir().unwrap();
        let expected = cwd.join(".env");

        match dev_env_file() {
            Some(path) => assert_eq!(path, expected),
            None => assert!(!expected.is_file()),
        }
    }
}
