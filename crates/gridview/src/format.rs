//! JSON wire format of a grid dataset.
//!
//! ```json
//! { "GridList": [
//!     { "GridPoints": [{ "x": 0, "y": 0, "z": 0 }, ...],
//!       "GridPropertys": [{ "PropertyValue": 2.0 }, ...] },
//!     ...
//! ] }
//! ```
//!
//! Only the first eight `GridPoints` and the first property's
//! `PropertyValue` are read. Unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::{GridCell, GridError, Result, Vec3, CELL_CORNERS};

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "GridList")]
    grid_list: Option<Vec<RawCell>>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    #[serde(rename = "GridPoints")]
    grid_points: Option<Vec<RawPoint>>,
    #[serde(rename = "GridPropertys")]
    grid_propertys: Option<Vec<RawProperty>>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Debug, Deserialize)]
struct RawProperty {
    #[serde(rename = "PropertyValue")]
    property_value: Option<f32>,
}

impl RawCell {
    fn into_cell(self, index: usize) -> Result<GridCell> {
        let points = self.grid_points.ok_or_else(|| {
            GridError::MalformedData(format!("cell {index} has no GridPoints"))
        })?;
        if points.len() < CELL_CORNERS {
            return Err(GridError::MalformedData(format!(
                "cell {index} has {} points, expected {CELL_CORNERS}",
                points.len()
            )));
        }
        if points.len() > CELL_CORNERS {
            log::warn!(
                "cell {index} lists {} points, using the first {CELL_CORNERS}",
                points.len()
            );
        }

        let property_value = self
            .grid_propertys
            .and_then(|props| props.into_iter().next())
            .and_then(|prop| prop.property_value)
            .ok_or_else(|| {
                GridError::MalformedData(format!("cell {index} has no PropertyValue"))
            })?;

        let points = points
            .into_iter()
            .take(CELL_CORNERS)
            .map(|p| Vec3::new(p.x, p.y, p.z))
            .collect();

        Ok(GridCell::new(points, property_value))
    }
}

fn malformed(message: String) -> GridError {
    GridError::MalformedData(message)
}

/// Rejects arrays where the format expects objects.
///
/// Derived deserializers also accept a struct written as a sequence of its
/// fields, so the root, each cell, each point and each property must be
/// checked to be a JSON object first.
fn check_objects(document: &Value) -> Result<()> {
    let root = document
        .as_object()
        .ok_or_else(|| malformed("grid document must be a JSON object".to_string()))?;

    let Some(cells) = root.get("GridList").and_then(Value::as_array) else {
        return Ok(());
    };
    for (index, cell) in cells.iter().enumerate() {
        let cell = cell
            .as_object()
            .ok_or_else(|| malformed(format!("cell {index} is not an object")))?;
        for key in ["GridPoints", "GridPropertys"] {
            let entries = cell.get(key).and_then(Value::as_array);
            if entries.is_some_and(|entries| entries.iter().any(|e| !e.is_object())) {
                return Err(malformed(format!(
                    "cell {index} has a {key} entry that is not an object"
                )));
            }
        }
    }
    Ok(())
}

/// Parses a grid document into cells, in document order.
///
/// Fails with [`GridError::MalformedData`] when the text is not a grid
/// document, `GridList` is missing, or any cell lacks eight points or a
/// property value. Nothing is returned unless every cell parses.
pub fn parse_grid_document(text: &str) -> Result<Vec<GridCell>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| malformed(format!("invalid grid document: {e}")))?;
    check_objects(&value)?;

    let document: RawDocument = serde_json::from_value(value)
        .map_err(|e| malformed(format!("invalid grid document: {e}")))?;

    let raw_cells = document
        .grid_list
        .ok_or_else(|| malformed("missing GridList".to_string()))?;

    raw_cells
        .into_iter()
        .enumerate()
        .map(|(index, raw)| raw.into_cell(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUBE_POINTS: &str = r#"[
        {"x":0,"y":0,"z":0},{"x":1,"y":0,"z":0},{"x":1,"y":1,"z":0},{"x":0,"y":1,"z":0},
        {"x":0,"y":1,"z":1},{"x":0,"y":0,"z":1},{"x":1,"y":0,"z":1},{"x":1,"y":1,"z":1}
    ]"#;

    fn document(cells: &[String]) -> String {
        format!(r#"{{ "GridList": [{}] }}"#, cells.join(","))
    }

    fn cell(points: &str, properties: &str) -> String {
        format!(r#"{{ "GridPoints": {points}, "GridPropertys": {properties} }}"#)
    }

    #[test]
    fn test_parse_cells() {
        let text = document(&[
            cell(CUBE_POINTS, r#"[{"PropertyValue": 2}, {"PropertyValue": 7}]"#),
            cell(CUBE_POINTS, r#"[{"PropertyValue": 3.5, "Name": "poro"}]"#),
        ]);
        let cells = parse_grid_document(&text).unwrap();

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].property_value, 2.0);
        assert_eq!(cells[1].property_value, 3.5);
        assert_eq!(cells[0].points.len(), 8);
        assert_eq!(cells[0].points[4], Vec3::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_extra_fields_and_points() {
        let points = CUBE_POINTS.replace(
            r#"{"x":1,"y":1,"z":1}"#,
            r#"{"x":1,"y":1,"z":1,"w":5},{"x":9,"y":9,"z":9}"#,
        );
        let text = format!(
            r#"{{ "Version": 3, "GridList": [{}] }}"#,
            cell(&points, r#"[{"PropertyValue": 1}]"#)
        );
        let cells = parse_grid_document(&text).unwrap();
        assert_eq!(cells[0].points.len(), 8);
        assert_eq!(cells[0].points[7], Vec3::ONE);
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_grid_document(r#"{ "GridList": [] }"#).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_documents() {
        let short_points = r#"[{"x":0,"y":0,"z":0},{"x":1,"y":0,"z":0}]"#;
        let cases = [
            "not json".to_string(),
            "[]".to_string(),
            "{}".to_string(),
            r#"{ "GridList": null }"#.to_string(),
            document(&[cell(short_points, r#"[{"PropertyValue": 1}]"#)]),
            document(&[cell(CUBE_POINTS, "[]")]),
            document(&[cell(CUBE_POINTS, r#"[{"Name": "poro"}]"#)]),
            document(&[format!(r#"{{ "GridPoints": {CUBE_POINTS} }}"#)]),
            document(&[r#"{ "GridPropertys": [{"PropertyValue": 1}] }"#.to_string()]),
            document(&[cell(CUBE_POINTS, r#"[{"PropertyValue": "high"}]"#)]),
            format!(r#"[[{CUBE_POINTS}, [{{"PropertyValue": 2}}]]]"#),
            format!(r#"{{ "GridList": [[{CUBE_POINTS}, [{{"PropertyValue": 2}}]]] }}"#),
            document(&[cell(
                &CUBE_POINTS.replace(r#"{"x":0,"y":0,"z":0}"#, "[0,0,0]"),
                r#"[{"PropertyValue": 1}]"#,
            )]),
            document(&[cell(CUBE_POINTS, "[[2]]")]),
        ];

        for text in &cases {
            let result = parse_grid_document(text);
            assert!(
                matches!(result, Err(GridError::MalformedData(_))),
                "expected malformed data for {text}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_array_root_rejected() {
        let text = format!(r#"[[{CUBE_POINTS}, [{{"PropertyValue": 2}}]]]"#);
        let err = parse_grid_document(&text).unwrap_err();
        assert!(
            matches!(err, GridError::MalformedData(ref msg) if msg.contains("object")),
            "{err}"
        );
    }

    #[test]
    fn test_error_names_cell() {
        let text = document(&[
            cell(CUBE_POINTS, r#"[{"PropertyValue": 1}]"#),
            cell(CUBE_POINTS, "[]"),
        ]);
        let err = parse_grid_document(&text).unwrap_err();
        assert!(err.to_string().contains("cell 1"), "{err}");
    }
}
