use std::{fs, path::Path};

use crate::{Config, Error};

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, Error> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&content)?)
}
