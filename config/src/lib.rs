use std::fs::File;

use serde::Deserialize;

use self::{
    backend::BackendConfig, export::ExportConfig, log::LogConfig, registration::RegistrationConfig,
};

pub mod backend;
pub mod export;
pub mod log;
pub mod registration;

#[derive(Deserialize)]
pub struct Config {
    log: LogConfig,
    registration: Option<RegistrationConfig>,
    backend: BackendConfig,
    export: Option<ExportConfig>,
}

impl Config {
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn registration(&self) -> &Option<RegistrationConfig> {
        &self.registration
    }

    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    pub fn export(&self) -> &Option<ExportConfig> {
        &self.export
    }
}

pub fn from_path(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => panic!("Failed to open configuration file at '{path}': {err}"),
    };
    match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => panic!("Failed to parse configuration file at '{path}': {err}"),
    }
}
