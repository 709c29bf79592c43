// LOADTEST_USERS: usize // concurrent virtual users, defaults to 25
//
// LOADTEST_RUN_TIME: usize // run duration in seconds, defaults to 30

use std::env;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(PartialEq, Debug)]
pub struct Configuration {
    pub users: usize,
    pub run_time: usize,
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("expected an integer in {var}: {source}")]
    InvalidInteger {
        var: &'static str,
        source: ParseIntError,
    },
}

impl Configuration {
    pub const DEFAULT_USERS: usize = 25;
    pub const DEFAULT_RUN_TIME_SECS: usize = 30;

    pub fn from_env() -> Result<Self, ConfigurationError> {
        Ok(Self {
            users: env_usize("LOADTEST_USERS", Self::DEFAULT_USERS)?,
            run_time: env_usize("LOADTEST_RUN_TIME", Self::DEFAULT_RUN_TIME_SECS)?,
        })
    }
}

fn env_usize(var: &'static str, default: usize) -> Result<usize, ConfigurationError> {
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|source| ConfigurationError::InvalidInteger { var, source }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Configuration, ConfigurationError};
    use serial_test::serial;
    use std::env;

    struct VarEnvCleaner {
        vars: Vec<String>,
    }

    impl VarEnvCleaner {
        pub fn new() -> Self {
            Self { vars: Vec::new() }
        }

        pub fn set_var(&mut self, k: &str, v: &str) {
            self.vars.insert(0, k.to_string());
            env::set_var(k, v);
        }
    }

    impl Drop for VarEnvCleaner {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        let config = Configuration::from_env().unwrap();
        assert_eq!(config.users, 25);
        assert_eq!(config.run_time, 30);
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        let mut vars = VarEnvCleaner::new();
        vars.set_var("LOADTEST_USERS", "50");
        vars.set_var("LOADTEST_RUN_TIME", "120");

        let config = Configuration::from_env().unwrap();
        assert_eq!(config.users, 50);
        assert_eq!(config.run_time, 120);
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_values() {
        let mut vars = VarEnvCleaner::new();
        vars.set_var("LOADTEST_USERS", "many");

        match Configuration::from_env() {
            Err(ConfigurationError::InvalidInteger { var, .. }) => {
                assert_eq!(var, "LOADTEST_USERS");
            }
            Ok(_) => panic!("Should have rejected a non-numeric user count!"),
        }
    }
}
