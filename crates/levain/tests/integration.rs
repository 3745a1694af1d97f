//! End-to-end CLI integration tests for the `levain` binary.
//!
//! Each test runs the binary as a subprocess via `assert_cmd` inside its
//! own temporary directory, with colour and `LEVAIN_*` overrides cleared.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `Command` for the `levain` binary running in `dir`.
fn levain(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("levain").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("LEVAIN_DIR")
        .env_remove("LEVAIN_OUTPUT__JSON");
    cmd
}

/// Run with `--json` and parse stdout.
fn json_output(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = levain(dir).arg("--json").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "levain {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn f64_at(value: &serde_json::Value, pointer: &str) -> f64 {
    value
        .pointer(pointer)
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| panic!("no number at {} in {}", pointer, value))
}

const RECIPE_WITH_STEPS: &str = r#"{
  "recipeName": "Weekend loaf",
  "mandatory": { "doughPortions": 1, "portionWeight": 500, "hydrationPercent": 72 },
  "addons": {},
  "steps": [
    { "id": 1, "name": "Day1. Autolyse", "duration": "30 minutes",
      "ingredients": [
        { "name": "flour", "type": "flour", "unit": "g", "defaultValue": 500, "value": null },
        { "name": "water", "type": "water", "unit": "g", "defaultValue": 360, "value": 350 }
      ] },
    { "id": 2, "name": "Day1. Bulk Fermentation", "duration": "4 hours", "temperature": 24 },
    { "id": 3, "name": "Day2. Bake", "duration": "35 minutes", "temperature": 230 },
    { "id": 4, "name": "Cool", "duration": "1h" },
    { "id": 5, "name": "Day1. Notes", "duration": "whenever" }
  ]
}"#;

// ---------------------------------------------------------------------------
// calc / export
// ---------------------------------------------------------------------------

#[test]
fn calc_defaults() {
    let tmp = TempDir::new().unwrap();
    let out = json_output(&tmp, &["calc"]);

    assert_eq!(out["recipeName"], "New Recipe");
    assert_eq!(f64_at(&out, "/ingredients/flour"), 290.7);
    assert_eq!(f64_at(&out, "/ingredients/water"), 209.3);
    assert_eq!(f64_at(&out, "/ingredients/salt"), 6.4);
    assert_eq!(f64_at(&out, "/ingredients/yeast"), 0.6);
    assert_eq!(f64_at(&out, "/stats/totalWeight"), 507.0);
    assert_eq!(f64_at(&out, "/stats/actualHydration"), 72.0);
}

#[test]
fn calc_text_output() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args(["calc", "--name", "Pizza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza"))
        .stdout(predicate::str::contains("1 x 500 g = 500 g"))
        .stdout(predicate::str::contains("290.7 g"))
        .stdout(predicate::str::contains("TOTALS"));
}

#[test]
fn calc_sourdough_sets_preferment() {
    let tmp = TempDir::new().unwrap();
    let out = json_output(&tmp, &["calc", "--leavening", "sourdough-starter"]);

    assert_eq!(out["inputs"]["leaveningType"], "sourdough-starter");
    assert_eq!(f64_at(&out, "/inputs/yeastPercent"), 4.2);
    assert_eq!(f64_at(&out, "/ingredients/preferment/flour"), 58.1);
    assert_eq!(f64_at(&out, "/ingredients/preferment/water"), 58.1);
}

#[test]
fn calc_with_addons() {
    let tmp = TempDir::new().unwrap();
    let out = json_output(
        &tmp,
        &["calc", "-a", "tangzhong=50", "-a", "cold-fermentation=18 h"],
    );

    assert_eq!(f64_at(&out, "/ingredients/flour"), 240.7);
    assert_eq!(f64_at(&out, "/ingredients/water"), 109.3);
    assert_eq!(f64_at(&out, "/ingredients/tangzhong/water"), 100.0);
    assert_eq!(out["processes"][0]["id"], "cold-fermentation");
    assert_eq!(out["processes"][0]["parsed"]["minutes"], 1080.0);
}

#[test]
fn calc_rejects_bad_addon() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args(["calc", "--addon", "butter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ID=VALUE"));
}

#[test]
fn export_then_calc_file() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args([
            "export",
            "--name",
            "Rolls",
            "-n",
            "6",
            "-w",
            "80",
            "--addon",
            "butter=40",
            "-o",
            "rolls.json",
        ])
        .assert()
        .success();

    let saved = std::fs::read_to_string(tmp.path().join("rolls.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(doc["recipeName"], "Rolls");
    assert_eq!(doc["mandatory"]["doughPortions"], 6);
    assert_eq!(doc["addons"]["butter"]["amount"], 40.0);

    let out = json_output(&tmp, &["calc", "--file", "rolls.json"]);
    assert_eq!(out["recipeName"], "Rolls");
    assert_eq!(f64_at(&out, "/ingredients/addons/butter"), 40.0);
}

#[test]
fn calc_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args(["calc", "--file", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load recipe"));
}

#[test]
fn errors_as_json() {
    let tmp = TempDir::new().unwrap();
    let output = levain(&tmp)
        .args(["--json", "calc", "--file", "nope.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(err["error"].as_str().unwrap().contains("nope.json"));
}

// ---------------------------------------------------------------------------
// duration / step-name
// ---------------------------------------------------------------------------

#[test]
fn duration_valid() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args(["duration", "2h", "30m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2h 30m"))
        .stdout(predicate::str::contains("150 min"));

    let out = json_output(&tmp, &["duration", "1:45"]);
    assert_eq!(out["isValid"], true);
    assert_eq!(out["minutes"], 105.0);
    assert_eq!(out["display"], "1h 45m");
}

#[test]
fn duration_invalid() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args(["duration", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized duration"));

    let out = json_output(&tmp, &["duration", "--lenient", "soon"]);
    assert_eq!(out["isValid"], false);
    assert_eq!(out["display"], "");
}

#[test]
fn step_name_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let out = json_output(&tmp, &["step-name", "parse", "Day1. Mix dough"]);
    assert_eq!(out["groupId"], "Day1");
    assert_eq!(out["title"], "Mix dough");

    let out = json_output(&tmp, &["step-name", "parse", "Mix dough"]);
    assert!(out["groupId"].is_null());

    levain(&tmp)
        .args(["step-name", "format", "--group", " Day2 ", "Bake"])
        .assert()
        .success()
        .stdout("Day2. Bake\n");
}

// ---------------------------------------------------------------------------
// templates / steps
// ---------------------------------------------------------------------------

#[test]
fn templates_search() {
    let tmp = TempDir::new().unwrap();
    let out = json_output(&tmp, &["templates", "ferm"]);
    let names: Vec<&str> = out
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cold Fermentation", "Bulk Fermentation"]);

    levain(&tmp)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stretch and Fold"))
        .stdout(predicate::str::contains("230 °C"));
}

#[test]
fn templates_check_builtin_and_bad_file() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args(["templates", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 templates"));

    std::fs::write(
        tmp.path().join("bad.toml"),
        "[[templates]]\nname = \"Soak\"\ndefaultDuration = \"overnight\"\nreps = 0\n",
    )
    .unwrap();
    levain(&tmp)
        .args(["templates", "check", "--file", "bad.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unrecognized default duration"))
        .stdout(predicate::str::contains("reps must be at least 1"));
}

#[test]
fn steps_grouped_with_timeline() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("loaf.json"), RECIPE_WITH_STEPS).unwrap();

    levain(&tmp)
        .args(["steps", "-f", "loaf.json", "--start", "2024-05-04 08:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Day1]"))
        .stdout(predicate::str::contains("[ungrouped]"))
        .stdout(predicate::str::contains("whenever (invalid)"))
        .stdout(predicate::str::contains("08:30 - 12:30"))
        .stdout(predicate::str::contains("Total: 6h 5m"));

    let out = json_output(&tmp, &["steps", "-f", "loaf.json"]);
    assert_eq!(out["groups"].as_array().unwrap().len(), 4);
    assert_eq!(out["groups"][0]["groupId"], "Day1");
    assert_eq!(out["groups"][0]["flourGrams"], 500.0);
    assert_eq!(out["groups"][0]["waterGrams"], 350.0);
    assert_eq!(out["timeline"]["totalMinutes"], 365.0);
    assert_eq!(out["timeline"]["invalid"], 1);
}

#[test]
fn steps_add_from_template() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("loaf.json"), RECIPE_WITH_STEPS).unwrap();

    levain(&tmp)
        .args(["steps", "-f", "loaf.json", "--add", "stretch and fold", "--group", "Day1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day1. Stretch and Fold"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(tmp.path().join("loaf.json")).unwrap())
            .unwrap();
    let last = saved["steps"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["id"], "6");
    assert_eq!(last["name"], "Day1. Stretch and Fold");
    assert_eq!(last["reps"], 4);

    levain(&tmp)
        .args(["steps", "-f", "loaf.json", "--add", "Fold"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean: Stretch and Fold"));
}

#[test]
fn steps_add_rejects_unreadable_group() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("loaf.json"), RECIPE_WITH_STEPS).unwrap();

    for group in ["Day 1", "pre-shape"] {
        levain(&tmp)
            .args(["steps", "-f", "loaf.json", "--add", "Autolyse", "--group", group])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid group id"));
    }

    let saved = std::fs::read_to_string(tmp.path().join("loaf.json")).unwrap();
    assert_eq!(saved, RECIPE_WITH_STEPS);

    levain(&tmp)
        .args(["steps", "-f", "loaf.json", "--add", "Autolyse", "--group", " Day_2 "])
        .assert()
        .success();
    let out = json_output(&tmp, &["steps", "-f", "loaf.json"]);
    let groups = out["groups"].as_array().unwrap();
    assert_eq!(groups.last().unwrap()["groupId"], "Day_2");
}

// ---------------------------------------------------------------------------
// catalogs
// ---------------------------------------------------------------------------

#[test]
fn ingredients_search() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args(["ingredients", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk (90% water)"))
        .stdout(predicate::str::contains("0.9"));

    let out = json_output(&tmp, &["ingredients", "eggs", "--amount", "50"]);
    assert_eq!(out[0]["name"], "Eggs");
    assert_eq!(out[0]["type"], "water");
    assert_eq!(out[0]["value"], 50.0);
    assert_eq!(out[0]["scaling"], 0.75);
}

#[test]
fn addons_marks_active() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args(["export", "-a", "oil=20", "-o", "r.json"])
        .assert()
        .success();

    let out = json_output(&tmp, &["addons", "--file", "r.json"]);
    let oil = out
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["id"] == "oil")
        .unwrap();
    assert_eq!(oil["active"], true);

    let out = json_output(&tmp, &["addons", "ferm"]);
    assert_eq!(out.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// init / config
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config_once() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));
    assert!(tmp.path().join(".levain").join("config.yaml").is_file());

    levain(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    levain(&tmp).args(["init", "--force"]).assert().success();
}

#[test]
fn config_file_changes_defaults() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join(".levain");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(
        dir.join("config.yaml"),
        "recipe:\n  dough-portions: 2\n  leavening-type: instant-yeast\n",
    )
    .unwrap();

    let out = json_output(&tmp, &["calc"]);
    assert_eq!(out["inputs"]["doughPortions"], 2);
    assert_eq!(f64_at(&out, "/inputs/yeastPercent"), 0.158);
    assert_eq!(f64_at(&out, "/stats/totalFlour"), 581.4);
}

#[test]
fn config_dir_flag() {
    let tmp = TempDir::new().unwrap();
    levain(&tmp)
        .args(["--config-dir", "settings", "init"])
        .assert()
        .success();
    assert!(tmp.path().join("settings").join("config.yaml").is_file());
}

#[test]
fn version_json() {
    let tmp = TempDir::new().unwrap();
    let out = json_output(&tmp, &["version"]);
    assert_eq!(out["version"], env!("CARGO_PKG_VERSION"));
}
