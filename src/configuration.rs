use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::integration::integrationpath::IntegrationPath;
use crate::math::integration::integrationpathmanager::IntegrationPathManager;
use crate::math::integration::quadrature::QuadratureSettings;
use crate::math::integration::quadraturesettingsmanager::QuadratureSettingsManager;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    quadrature: Vec<serde_json::Value>,
    #[serde(default)]
    path: Vec<serde_json::Value>
}

pub struct Configuration {
    quadrature_settings_manager_cell: RefCell<Manager<QuadratureSettings>>,
    integration_path_manager_cell: RefCell<Manager<IntegrationPath>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            quadrature_settings_manager_cell: RefCell::new(QuadratureSettingsManager::new()),
            integration_path_manager_cell: RefCell::new(IntegrationPathManager::new())
        }
    }

    pub fn quadrature_settings_manager(&self) -> RefMut<'_, Manager<QuadratureSettings>> {
        self.quadrature_settings_manager_cell.borrow_mut()
    }

    pub fn integration_path_manager(&self) -> RefMut<'_, Manager<IntegrationPath>> {
        self.integration_path_manager_cell.borrow_mut()
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)?;
        info!(path = %file_path.as_ref().display(), "loaded integration configuration");
        Ok(())
    }

    /// `{"quadrature": [...], "path": [...]}`; both sections are optional.
    ///
    /// Nothing is registered unless every entry of both sections is valid.
    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let settings = self.quadrature_settings_manager().parse_obj_from_json_vec(&json_prop.quadrature)?;
        let paths = self.integration_path_manager().parse_obj_from_json_vec(&json_prop.path)?;
        self.quadrature_settings_manager().commit(settings);
        self.integration_path_manager().commit(paths);
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
