use failure::Error;

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use crate::song::DEFAULT_TEMPO;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Project {
  pub name: String,
  pub tempo: u16,
}

impl Default for Project {
  fn default() -> Project {
    Project {
      name: "untitled".to_string(),
      tempo: DEFAULT_TEMPO,
    }
  }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
  pub project: Project,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      project: Project::default(),
    }
  }
}

impl Config {
  pub fn from_file<'a, T>(path: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
  }

  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    Ok(config)
  }
}
