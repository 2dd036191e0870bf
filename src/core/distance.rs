//! Planare Distanzberechnung und Anzeige-Formatierung.

use glam::DVec3;

/// Planare euklidische Distanz zwischen zwei Weltpositionen.
///
/// Die Y-Achse (Höhe) geht nicht in die Entfernung ein — die Karte ist
/// eine Draufsicht, nur X und Z zählen.
pub fn planar_distance(a: DVec3, b: DVec3) -> f64 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;

    (dx * dx + dz * dz).sqrt()
}

/// Formatiert eine Distanz in Metern als Anzeigetext.
///
/// Bis `km_threshold` aufgerundete Meter ("876 m"), darüber Kilometer
/// mit einer Nachkommastelle ("2.4 km").
pub fn format_distance(distance_m: f64, km_threshold: f64) -> String {
    let distance = distance_m.ceil();
    if distance > km_threshold {
        let km = (distance / 1000.0 * 10.0).round() / 10.0;
        format!("{} km", km)
    } else {
        format!("{} m", distance)
    }
}
