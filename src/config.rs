// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::pkcs11::*;

use serde::de;
use serde::{Deserialize, Serialize};
use toml;

pub const CONF_ENV_VAR: &str = "PKCS11_OBJECTS_CONF";

const DEFAULT_INDENT: &str = "  ";

/// How attributes are fetched when materializing objects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Materialize {
    /// When false, attributes the token reports as unsupported (or returns
    /// in a form that can't be decoded) are left absent. When true any
    /// such attribute aborts the whole operation.
    pub strict: bool,
}

/// How objects and parameters are rendered for debugging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Render {
    /// Prefix of every attribute line
    pub indent: String,
}

impl Default for Render {
    fn default() -> Render {
        Render {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub materialize: Materialize,
    pub render: Render,
}

fn config_error<E: de::Error + Send + Sync + 'static>(error: E) -> Error {
    Error::ck_rv_from_error(CKR_ARGUMENTS_BAD, error)
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Returns the configuration file named by the environment, if any
    pub fn find_conf() -> Result<String> {
        match env::var(CONF_ENV_VAR) {
            Ok(var) => {
                if Path::new(&var).is_file() {
                    Ok(var)
                } else {
                    Err(Error::ck_rv_with_errmsg(
                        CKR_ARGUMENTS_BAD,
                        format!("{} does not name a file", CONF_ENV_VAR),
                    ))
                }
            }
            Err(_) => Err(CKR_ARGUMENTS_BAD)?,
        }
    }

    pub fn from_file(filename: &str) -> Result<Config> {
        let config_str = fs::read_to_string(filename)?;
        Config::from_toml(&config_str)
    }

    pub fn from_toml(config_str: &str) -> Result<Config> {
        let conf: Config = toml::from_str(config_str).map_err(config_error)?;
        if conf.render.indent.contains('\n') {
            return Err(Error::ck_rv_with_errmsg(
                CKR_ARGUMENTS_BAD,
                "render.indent must fit on a single line".to_string(),
            ));
        }
        Ok(conf)
    }

    /// Loads the configuration from the file named by the environment, or
    /// falls back to the defaults when none is set
    pub fn default_config() -> Result<Config> {
        match env::var(CONF_ENV_VAR) {
            Ok(_) => Config::from_file(&Config::find_conf()?),
            Err(_) => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let conf = Config::from_toml(
            r#"
[materialize]
strict = true

[render]
indent = "    "
"#,
        )
        .unwrap();
        assert!(conf.materialize.strict);
        assert_eq!(conf.render.indent, "    ");

        /* missing sections use the defaults */
        let conf = Config::from_toml("").unwrap();
        assert_eq!(conf, Config::default());
        assert_eq!(conf.render.indent, "  ");

        assert!(Config::from_toml("[render]\nindent = \"\\n\"").is_err());
        assert!(Config::from_toml("[materialize]\nstrict = 3").is_err());
    }
}
