// In release builds we deny(warnings) at crate level. This module contains
// tolerant parsers for the form payload that may gain fields during
// incremental integration. Allow them in release to avoid breaking the build.
#![cfg_attr(not(debug_assertions), allow(dead_code, unused_imports))]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use serde::Deserialize;
use serde_json as json;
use serde_path_to_error as spte;

use crate::error::HealthError;
use crate::health_report_document;
use crate::models::{ActivityLevel, Gender, Measurement};
use crate::report::build_report;

// ──────────────────────────────────────────────────────────────────────────────
// TOLERANT INNGANG (aliaser for eldre skjema-versjoner)
// ──────────────────────────────────────────────────────────────────────────────

/// Skjema-payload slik Python-siden sender den. Kjønn og aktivitetsnivå
/// kommer som strenger og valideres her, ikke i serde.
#[derive(Debug, Deserialize)]
struct MeasurementIn {
    #[serde(alias = "weight")]
    weight_kg: f64,
    #[serde(alias = "height")]
    height_m: f64,
    age: u32,
    gender: String,
    #[serde(alias = "activity")]
    activity_level: String,
}

fn to_core_measurement(input: MeasurementIn) -> Result<Measurement, HealthError> {
    Ok(Measurement {
        weight_kg: input.weight_kg,
        height_m: input.height_m,
        age: input.age,
        gender: Gender::parse(&input.gender)?,
        activity_level: ActivityLevel::parse(&input.activity_level)?,
    })
}

/// Tolerant variant av JSON-inngangen: aksepterer alias-feltnavn og
/// case-avvik i kjønn/aktivitetsnivå. Brukes av PyO3-funksjonene.
pub fn compute_report_from_form_json(json_in: &str) -> Result<String, String> {
    let mut de = json::Deserializer::from_str(json_in);
    let parsed: MeasurementIn = spte::deserialize(&mut de)
        .map_err(|e| format!("parse error (MeasurementIn) at {}: {}", e.path(), e))?;

    let measurement = to_core_measurement(parsed).map_err(|e| e.to_string())?;
    let report = build_report(&measurement).map_err(|e| e.to_string())?;

    json::to_string(&health_report_document(&report)).map_err(|e| e.to_string())
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-FUNKSJONER
// ──────────────────────────────────────────────────────────────────────────────

/// 1-arg: JSON-streng eller Python-objekt → dict med rapport + grafdata.
#[pyfunction]
fn compute_health_report_json(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    // 1) Få inn JSON-string fra payload (tillater både str og dict/objekt)
    let json_in: String = if let Ok(s) = payload.extract::<&str>() {
        s.to_owned()
    } else {
        // Bruk Python sin json.dumps for å serialisere hvilket som helst Python-objekt
        let json_mod = py
            .import("json")
            .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
        json_mod
            .call_method1("dumps", (payload,))
            .and_then(|o| o.extract::<String>())
            .map_err(|e| {
                PyValueError::new_err(format!("failed to serialize payload with json.dumps: {e}"))
            })?
    };

    // 2) Kjør kjernen
    let out = compute_report_from_form_json(&json_in).map_err(PyValueError::new_err)?;

    // 3) Returnér som Python-objekt (dict) via Python's json.loads
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    let obj = json_mod
        .call_method1("loads", (out.as_str(),))
        .map_err(|e| PyValueError::new_err(format!("internal JSON parse error via json.loads: {e}")))?;
    Ok(obj.into_py(py))
}

/// Strengvariant – beholdt for eksplisitt testing fra UI-siden.
#[pyfunction]
fn compute_health_report_json_str(json_str: &str) -> PyResult<String> {
    compute_report_from_form_json(json_str).map_err(PyValueError::new_err)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn healthgraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    // 1-arg: payload (str/dict) → dict
    m.add_function(wrap_pyfunction!(compute_health_report_json, m)?)?;

    // Eksplisitt strengvariant for testing
    m.add_function(wrap_pyfunction!(compute_health_report_json_str, m)?)?;
    Ok(())
}
