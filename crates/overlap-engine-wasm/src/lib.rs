//! WASM bindings for overlap-engine.
//!
//! Exposes slot normalization, overlap computation, and match summaries to
//! JavaScript via `wasm-bindgen`. All complex types are passed as JSON
//! strings in the REST payload shape the web frontend already speaks:
//! `[{"dayOfWeek": 1, "startHour": 9, "endHour": 17, "timeZone": "GMT+0"}]`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p overlap-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/overlap_engine_wasm.wasm
//! ```

use overlap_engine::{normalize_all, TimeZoneCatalog, WeeklySlot};
use wasm_bindgen::prelude::*;

/// Parse a JSON array of weekly slots, mapping parse/validation failures to
/// a `JsValue` error string.
fn parse_slots(json: &str, side: &str) -> Result<Vec<WeeklySlot>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid {} slots: {}", side, e)))
}

/// Compare required slots against available slots and return the match
/// summary as JSON.
///
/// Both arguments are JSON arrays of `{dayOfWeek, startHour, endHour,
/// timeZone}` records. The result carries `coveredMinutes`,
/// `requiredMinutes`, `coverageRatio`, and `isFullMatch` plus the input
/// slots, ready for a ranking UI.
#[wasm_bindgen]
pub fn summarize(required_json: &str, available_json: &str) -> Result<String, JsValue> {
    let required = parse_slots(required_json, "required")?;
    let available = parse_slots(available_json, "available")?;

    let summary = overlap_engine::summarize(&required, &available, TimeZoneCatalog::builtin())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Normalize one slot onto the UTC week-minute axis and return its canonical
/// intervals as JSON. Inspection surface for the availability editor.
#[wasm_bindgen]
pub fn normalize_slot(slot_json: &str) -> Result<String, JsValue> {
    let slot: WeeklySlot = serde_json::from_str(slot_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid slot: {}", e)))?;

    let intervals = overlap_engine::normalize(&slot, TimeZoneCatalog::builtin())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&intervals).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Total overlapping minutes between two slot collections.
#[wasm_bindgen]
pub fn overlap_minutes(required_json: &str, available_json: &str) -> Result<u32, JsValue> {
    let required = parse_slots(required_json, "required")?;
    let available = parse_slots(available_json, "available")?;

    let catalog = TimeZoneCatalog::builtin();
    let r = normalize_all(&required, catalog).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let a = normalize_all(&available, catalog).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(overlap_engine::overlap_minutes(&r, &a))
}
