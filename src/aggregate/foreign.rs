//! Toleranter Import fremder Wegpunkt-Strukturen.
//!
//! Andere Mods serialisieren ihre Wegpunkte in leicht abweichenden
//! Formen. Statt auf deren interne Typen zuzugreifen wird der Payload
//! als JSON-Wertebaum interpretiert: Felder werden nachsichtig gelesen,
//! unbrauchbare Einträge übersprungen. Nur ein strukturell unbrauchbarer
//! Payload ist ein Fehler.

use glam::DVec3;
use serde_json::{Map, Value};

use super::{ProviderError, ProviderWaypoint};

/// Interpretiert einen fremden Payload als Wegpunkt-Liste.
///
/// Erwartet ein Array von Objekten; alles andere ist ein
/// [`ProviderError::ShapeMismatch`]. Einträge ohne brauchbare Position
/// werden übersprungen (aggregierte Wegpunkte haben immer Koordinaten),
/// falsch typisierte Anzeige-Felder werden verworfen statt zu scheitern.
pub fn waypoints_from_value(value: &Value) -> Result<Vec<ProviderWaypoint>, ProviderError> {
    let entries = value.as_array().ok_or_else(|| {
        ProviderError::ShapeMismatch("Wegpunkt-Payload ist kein Array".to_string())
    })?;

    let mut waypoints = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_null() {
            continue;
        }
        let Some(object) = entry.as_object() else {
            log::debug!("Wegpunkt-Eintrag ist kein Objekt, übersprungen");
            continue;
        };

        let Some(position) = read_position(object) else {
            log::debug!("Wegpunkt-Eintrag ohne Position, übersprungen");
            continue;
        };

        waypoints.push(ProviderWaypoint {
            title: read_string(object, "Title"),
            text: read_string(object, "Text"),
            position,
            icon: read_string(object, "Icon"),
            color: read_color(object),
        });
    }

    Ok(waypoints)
}

/// Liest ein Feld unabhängig von Groß-/Kleinschreibung des Namens.
fn read_field<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object
        .get(name)
        .or_else(|| object.get(&name.to_lowercase()))
}

fn read_string(object: &Map<String, Value>, name: &str) -> Option<String> {
    read_field(object, name)
        .and_then(Value::as_str)
        .map(String::from)
}

/// Liest die Position als `[x, y, z]`-Array oder `{X, Y, Z}`-Objekt.
fn read_position(object: &Map<String, Value>) -> Option<DVec3> {
    let value = read_field(object, "Position")?;

    if let Some(components) = value.as_array() {
        if components.len() < 3 {
            return None;
        }
        let x = components[0].as_f64()?;
        let y = components[1].as_f64()?;
        let z = components[2].as_f64()?;
        return Some(DVec3::new(x, y, z));
    }

    if let Some(nested) = value.as_object() {
        let x = read_field(nested, "X")?.as_f64()?;
        let y = read_field(nested, "Y")?.as_f64()?;
        let z = read_field(nested, "Z")?.as_f64()?;
        return Some(DVec3::new(x, y, z));
    }

    None
}

/// Liest die Farbe als `[r, g, b, a]`- oder `[r, g, b]`-Array (0–255).
fn read_color(object: &Map<String, Value>) -> Option<[u8; 4]> {
    let components = read_field(object, "Color")?.as_array()?;
    if components.len() != 3 && components.len() != 4 {
        return None;
    }

    let mut color = [0u8, 0, 0, 255];
    for (slot, component) in color.iter_mut().zip(components) {
        let channel = component.as_u64()?;
        if channel > 255 {
            return None;
        }
        *slot = channel as u8;
    }

    Some(color)
}
