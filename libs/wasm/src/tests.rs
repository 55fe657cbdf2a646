//! Tests for the WASM-facing export helpers.

use super::*;

const RESPONSE: &str = r#"{
    "status": "success",
    "parse_result": [
        {"type": "wall", "x": 0, "y": 0, "width": 100, "height": 20},
        {"type": "circle", "cx": 50, "cy": 50, "r": 10}
    ]
}"#;

/// Exports the wall and circle response.
#[test]
fn export_counts_facets_and_solids() {
    let stl = export_stl_internal(RESPONSE, 1.0, 0.0, 5.0).expect("export succeeds");

    assert_eq!(stl.facet_count(), 136);
    assert_eq!(stl.solid_count(), 2);
    assert_eq!(stl.file_name(), "model.stl");
    assert!(stl.text().starts_with("solid MODEL\n"));
    assert!(stl.text().ends_with("endsolid MODEL\n"));
}

/// Uploaded copies carry the generated file name.
#[test]
fn mark_generated_renames_file() {
    let mut stl = export_stl_internal(RESPONSE, 1.0, 0.0, 5.0).expect("export succeeds");
    stl.mark_generated();
    assert_eq!(stl.file_name(), "generated_model.stl");
}

/// Nothing to export surfaces an explicit error.
#[test]
fn export_rejects_unknown_only_input() {
    let err = export_stl_internal(r#"[{"type": "blob"}]"#, 1.0, 0.0, 5.0).unwrap_err();
    assert_eq!(err, MeshError::EmptyInput);
    assert!(!err.to_string().is_empty());
}

#[test]
fn export_rejects_invalid_json() {
    let err = export_stl_internal("[{", 1.0, 0.0, 5.0).unwrap_err();
    assert!(matches!(err, MeshError::Shape(_)));
}

#[test]
fn export_rejects_invalid_scale() {
    let err = export_stl_internal(RESPONSE, 0.0, 0.0, 5.0).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { name: "scale", .. }));
}

/// Rotation changes coordinates but not the facet count.
#[test]
fn rotation_keeps_facet_count() {
    let flat = export_stl_internal(RESPONSE, 1.0, 0.0, 5.0).unwrap();
    let turned = export_stl_internal(RESPONSE, 1.0, 0.5, 5.0).unwrap();
    assert_eq!(flat.facet_count(), turned.facet_count());
    assert_ne!(flat.text(), turned.text());
}

#[test]
fn default_params_json() {
    let json = default_params().expect("serializes");
    let params: ExportParams = serde_json::from_str(&json).unwrap();
    assert_eq!(params, ExportParams::default());
    assert!(json.contains("rotationY"));
}

#[test]
fn scale_steps_clamp() {
    assert!((next_scale_up(1.0) - 1.1).abs() < 1e-12);
    assert!((next_scale_down(1.0) - 0.9).abs() < 1e-12);
    assert_eq!(next_scale_up(3.0), 3.0);
    assert_eq!(next_scale_down(0.25), 0.2);
}
