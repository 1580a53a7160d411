use nalgebra::Complex;
use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::complex::tocomplex::deserialize_complex;
use crate::math::integration::integrationpath::IntegrationPath;
use crate::math::integration::quadrature::DEFAULT_SUBDIVISIONS;
use crate::math::integration::quadraturesettingsmanager::QuadratureSettingsJsonProp;

// ─────────────────────────────────────────────────────────────────────────────
// JSON 格式（複數可寫成實數或 [re, im]）
// ─────────────────────────────────────────────────────────────────────────────
//
// {"name": "ToOnePlusI", "path_type": "General", "a": 0, "b": [1, 1], "rule": "simpson", "subdivisions": 1000}
// {"name": "ToIPi", "path_type": "LineSegment", "start": 0, "end": [0, 3.14159], "subdivisions": 1000}
// {"name": "UnitCircle", "path_type": "CircularContour", "center": 0, "radius": 1, "subdivisions": 2000}

#[derive(Deserialize)]
pub enum IntegrationPathType {
    General,
    LineSegment,
    CircularContour
}

#[derive(Deserialize)]
struct IntegrationPathTypedObject {
    path_type: IntegrationPathType
}

#[derive(Deserialize)]
struct GeneralPathJsonProp {
    #[serde(deserialize_with = "deserialize_complex")]
    a: Complex<f64>,
    #[serde(deserialize_with = "deserialize_complex")]
    b: Complex<f64>
}

#[derive(Deserialize)]
struct LineSegmentJsonProp {
    #[serde(deserialize_with = "deserialize_complex")]
    start: Complex<f64>,
    #[serde(deserialize_with = "deserialize_complex")]
    end: Complex<f64>,
    #[serde(default = "default_subdivisions")]
    subdivisions: usize
}

#[derive(Deserialize)]
struct CircularContourJsonProp {
    #[serde(deserialize_with = "deserialize_complex")]
    center: Complex<f64>,
    radius: f64,
    #[serde(default = "default_subdivisions")]
    subdivisions: usize
}

fn default_subdivisions() -> usize {
    DEFAULT_SUBDIVISIONS
}

fn get_integration_path_from_json(json_value: serde_json::Value) -> Result<IntegrationPath, ManagerError> {
    let typed_object: IntegrationPathTypedObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
    let path = match typed_object.path_type {
        IntegrationPathType::General => {
            let json_prop: GeneralPathJsonProp = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
            // rule 與 subdivisions 與 QuadratureSettings 共用同一份 JSON
            let settings_prop: QuadratureSettingsJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            IntegrationPath::general(json_prop.a, json_prop.b, settings_prop.to_settings()?)
        },
        IntegrationPathType::LineSegment => {
            let json_prop: LineSegmentJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            IntegrationPath::line_segment(json_prop.start, json_prop.end, json_prop.subdivisions)?
        },
        IntegrationPathType::CircularContour => {
            let json_prop: CircularContourJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            IntegrationPath::circular_contour(json_prop.center, json_prop.radius, json_prop.subdivisions)?
        }
    };
    Ok(path)
}

pub struct IntegrationPathManager;

impl IntegrationPathManager {
    pub fn new() -> Manager<IntegrationPath> {
        Manager::new(get_integration_path_from_json)
    }
}
