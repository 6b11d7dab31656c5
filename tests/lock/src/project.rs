//! Scratch project layout: `test_data/` fixtures under a temp root.

use std::path::Path;

use cdtest_harness::config::{DEFAULT_INPUT_PATH, DEFAULT_REFERENCE_PATH};

/// Write the two fixture files under `root` in the default layout.
///
/// `cases` is `(id, endpoint, description)`; `references` is
/// `(id, expected_result)`.
///
/// # Panics
///
/// Panics on any I/O error. Test-only.
pub fn write_fixtures(root: &Path, cases: &[(i64, &str, &str)], references: &[(i64, &str)]) {
    let cases: Vec<serde_json::Value> = cases
        .iter()
        .map(|(id, endpoint, description)| {
            serde_json::json!({"id": id, "endpoint": endpoint, "description": description})
        })
        .collect();
    let references: Vec<serde_json::Value> = references
        .iter()
        .map(|(id, expected)| serde_json::json!({"id": id, "expected_result": expected}))
        .collect();

    let input_path = root.join(DEFAULT_INPUT_PATH);
    let reference_path = root.join(DEFAULT_REFERENCE_PATH);
    std::fs::create_dir_all(input_path.parent().expect("fixture dir")).expect("create test_data");
    std::fs::write(
        &input_path,
        serde_json::to_vec_pretty(&cases).expect("serialize cases"),
    )
    .expect("write input fixture");
    std::fs::write(
        &reference_path,
        serde_json::to_vec_pretty(&references).expect("serialize references"),
    )
    .expect("write reference fixture");
}
