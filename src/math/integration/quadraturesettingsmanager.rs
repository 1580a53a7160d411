use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::integration::integrationerror::ConfigurationError;
use crate::math::integration::quadrature::{
    DEFAULT_SUBDIVISIONS,
    QuadratureSettings
};
use crate::math::integration::quadraturerule::QuadratureRule;

// {"name": "Simpson1000", "rule": "simpson", "subdivisions": 1000}
//
// rule 先以字串讀入，驗證錯誤才能保留 ConfigurationError 型別
#[derive(Deserialize)]
pub(crate) struct QuadratureSettingsJsonProp {
    #[serde(default = "default_rule")]
    rule: String,
    #[serde(default = "default_subdivisions")]
    subdivisions: usize
}

fn default_rule() -> String {
    QuadratureRule::Simpson.name().to_owned()
}

fn default_subdivisions() -> usize {
    DEFAULT_SUBDIVISIONS
}

impl QuadratureSettingsJsonProp {
    pub(crate) fn to_settings(&self) -> Result<QuadratureSettings, ConfigurationError> {
        let rule: QuadratureRule = self.rule.parse()?;
        QuadratureSettings::new(rule, self.subdivisions)
    }
}

fn get_quadrature_settings_from_json(json_value: serde_json::Value) -> Result<QuadratureSettings, ManagerError> {
    let json_prop: QuadratureSettingsJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(json_prop.to_settings()?)
}

pub struct QuadratureSettingsManager;

impl QuadratureSettingsManager {
    pub fn new() -> Manager<QuadratureSettings> {
        Manager::new(get_quadrature_settings_from_json)
    }
}
