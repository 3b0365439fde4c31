// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mep_lite_core::{ElementId, Error, ModelSnapshot};
use mep_lite_risers::{classify_view, plan_tags, RiserCategory, RiserOptions, TagTypeMapping};

const SHAFT_MODEL: &str = r#"{
    "name": "Shaft.rvt",
    "view_range": {"top_elevation": 13.0, "bottom_elevation": 0.0},
    "elements": [
        {"id": 1, "type_name": "Pipe", "kind": "pipe", "connectors": [
            {"origin": [0.0, 0.0, 1.0], "flow_direction": "In"},
            {"origin": [6.0, 0.0, 1.0], "flow_direction": "Out"}
        ]},
        {"id": 2, "type_name": "Pipe", "kind": "pipe", "connectors": [
            {"origin": [5.0, 0.0, 1.0], "flow_direction": "In"},
            {"origin": [5.0, 0.0, 20.0], "flow_direction": "Out"}
        ]},
        {"id": 3, "type_name": "Pipe", "kind": "pipe", "connectors": [
            {"origin": [0.0, 1.0, 1.0], "flow_direction": "Out"},
            {"origin": [0.0, 1.0, -8.0], "flow_direction": "In"}
        ]},
        {"id": 4, "type_name": "Pipe", "kind": "pipe", "connectors": [
            {"origin": [40.0, 40.0, 0.0]},
            {"origin": [40.0, 40.0, 10.0]}
        ]},
        {"id": 5, "type_name": "Pipe", "kind": "pipe", "connectors": [
            {"origin": [8.0, 8.0, 30.0], "flow_direction": "Bidirectional"},
            {"origin": [8.0, 8.0, -30.0], "flow_direction": "Bidirectional"}
        ]},
        {"id": 6, "type_name": "Pipe", "kind": "pipe", "connectors": [
            {"origin": [9.0, 9.0, -5.0], "flow_direction": "In"},
            {"origin": [9.0, 9.2, 25.0], "flow_direction": "Out"}
        ]},
        {"id": 7, "type_name": "Elbow", "kind": "fitting"}
    ],
    "view_elements": [1, 2, 3, 4, 5, 6, 7]
}"#;

#[test]
fn classifies_risers_in_active_view() {
    let model = ModelSnapshot::from_json(SHAFT_MODEL).unwrap();
    let risers = classify_view(&model, &RiserOptions::default()).unwrap();

    assert_eq!(risers.pipes_in_view, 6);
    // pipe 1 is horizontal
    assert_eq!(risers.vertical_pipes.len(), 5);

    let c = &risers.classification;
    assert_eq!(c.pipes(RiserCategory::GoingToAbove), &[ElementId(2)]);
    assert_eq!(c.pipes(RiserCategory::ComingFromBelow), &[ElementId(3)]);
    assert_eq!(c.pipes(RiserCategory::GoingToBelow), &[ElementId(4)]);
    assert_eq!(c.pipes(RiserCategory::FallingThrough), &[ElementId(5)]);
    assert_eq!(c.pipes(RiserCategory::RisingThrough), &[ElementId(6)]);
    assert_eq!(c.category_of(ElementId(1)), None);
}

#[test]
fn tolerance_controls_verticality() {
    let model = ModelSnapshot::from_json(SHAFT_MODEL).unwrap();
    // pipe 6 leans ~0.38° off plumb
    let strict = RiserOptions {
        vertical_tolerance_deg: 0.1,
    };
    let risers = classify_view(&model, &strict).unwrap();
    assert_eq!(risers.vertical_pipes.len(), 4);
    assert_eq!(risers.classification.category_of(ElementId(6)), None);
}

#[test]
fn inverted_view_range_fails_fast() {
    let json = SHAFT_MODEL.replace(
        r#""top_elevation": 13.0, "bottom_elevation": 0.0"#,
        r#""top_elevation": 0.0, "bottom_elevation": 13.0"#,
    );
    let model = ModelSnapshot::from_json(&json).unwrap();
    let err = classify_view(&model, &RiserOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MalformedViewRange { .. }));
}

#[test]
fn tag_plan_covers_categorized_risers() {
    let model = ModelSnapshot::from_json(SHAFT_MODEL).unwrap();
    let risers = classify_view(&model, &RiserOptions::default()).unwrap();
    let tags = plan_tags(
        &risers.classification,
        &risers.vertical_pipes,
        &risers.view_range,
        &TagTypeMapping::default(),
    );

    assert_eq!(tags.len(), 5);
    assert!(tags.iter().all(|t| t.point.z == 13.0));
    let tag = tags.iter().find(|t| t.pipe == ElementId(3)).unwrap();
    assert_eq!(tag.tag_type, "BHE_DE_PipeTag_FlowArrow - VonUnten");
}
