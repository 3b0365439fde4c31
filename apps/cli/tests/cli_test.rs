// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const PLANT_ROOM: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../rust/network/tests/fixtures/plant_room.json"
);

fn mep_lite() -> Command {
    let mut cmd = Command::cargo_bin("mep-lite").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("MEP_LITE_VERTICAL_TOLERANCE_DEG")
        .env_remove("MEP_LITE_MAX_NODES")
        .env_remove("MEP_LITE_TAG_FAMILY")
        .env_remove("MEP_LITE_LOG_JSON");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn discover_prints_node_link_json() {
    let doc = stdout_json(mep_lite().args(["discover", "--model", PLANT_ROOM, "--seed", "1002"]));

    assert_eq!(doc["directed"], false);
    assert_eq!(doc["graph"]["source_model"], "PlantRoom.rvt");
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 9);
    assert_eq!(doc["links"].as_array().unwrap().len(), 11);
}

#[test]
fn discover_strips_systems() {
    let doc = stdout_json(mep_lite().args([
        "discover",
        "--model",
        PLANT_ROOM,
        "--seed",
        "1002",
        "--strip-systems",
    ]));

    let nodes = doc["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 8);
    assert!(nodes.iter().all(|n| n["id"] != 9001));
    assert_eq!(doc["links"].as_array().unwrap().len(), 7);
}

#[test]
fn discover_text_listing() {
    mep_lite()
        .args(["discover", "--model", PLANT_ROOM, "--seed", "1002", "--text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node: 1002"))
        .stdout(predicate::str::contains("edge: 1001, 1002"))
        .stdout(predicate::str::contains("1008").not());
}

#[test]
fn discover_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("network.json");

    mep_lite()
        .args(["discover", "--model", PLANT_ROOM, "--seed", "2001", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 1);
    assert!(doc["links"].as_array().unwrap().is_empty());
}

#[test]
fn node_limit_from_environment() {
    mep_lite()
        .env("MEP_LITE_MAX_NODES", "3")
        .args(["discover", "--model", PLANT_ROOM, "--seed", "1002"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("limit of 3 nodes"));
}

#[test]
fn unknown_seed_is_bad_input() {
    mep_lite()
        .args(["discover", "--model", PLANT_ROOM, "--seed", "424242"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("424242"));
}

#[test]
fn missing_model_file_is_bad_input() {
    mep_lite()
        .args(["discover", "--model", "/nonexistent/model.json", "--seed", "1"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn risers_report() {
    let doc = stdout_json(mep_lite().args(["risers", "--model", PLANT_ROOM]));

    assert_eq!(doc["model"], "PlantRoom.rvt");
    assert_eq!(doc["pipes_in_view"], 5);
    assert_eq!(doc["vertical_pipes"], 3);

    let classification = &doc["classification"]["categories"];
    assert_eq!(classification["GoingToAbove"], serde_json::json!([1004]));
    assert_eq!(classification["ComingFromBelow"], serde_json::json!([1010]));
    assert_eq!(classification["GoingToBelow"], serde_json::json!([2001]));

    let tags = doc["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 3);
    assert!(tags
        .iter()
        .any(|t| t["pipe"] == 1010 && t["tag_type"] == "BHE_DE_PipeTag_FlowArrow - VonUnten"));
    assert_eq!(doc["required_tag_types"].as_array().unwrap().len(), 6);
}

#[test]
fn risers_tag_family_flag_overrides_environment() {
    let doc = stdout_json(
        mep_lite()
            .env("MEP_LITE_TAG_FAMILY", "EnvArrows")
            .args(["risers", "--model", PLANT_ROOM, "--tag-family", "Arrows"]),
    );

    let tags = doc["tags"].as_array().unwrap();
    assert!(tags
        .iter()
        .all(|t| t["tag_type"].as_str().unwrap().starts_with("Arrows - ")));
}
