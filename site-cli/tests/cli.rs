//! End-to-end tests for the `matdiscover` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn matdiscover() -> Command {
    cargo_bin_cmd!("matdiscover")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        matdiscover()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("datasets"));
    }

    #[test]
    fn shows_version() {
        matdiscover()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        matdiscover().assert().failure();
    }
}

mod render {
    use super::*;

    #[test]
    fn writes_page_with_default_state() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("index.html");

        matdiscover()
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"value="Fe2O3""#));
        assert!(!html.contains(r#"data-role="results-panel""#));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist/site/index.html");

        matdiscover()
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success();

        assert!(out.exists());
    }

    #[test]
    fn show_results_prerenders_fixed_values() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("preview.html");

        matdiscover()
            .args(["render", "--formula", "banana", "--show-results", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.contains(r#"value="banana""#));
        assert!(html.contains(r#"data-role="results-panel""#));
        assert!(html.contains("-5.23 eV/atom"));
    }

    #[test]
    fn applies_config_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("site.json");
        std::fs::write(
            &config,
            r#"{ "brand": "CrystalScope", "page_title": "CrystalScope preview" }"#,
        )
        .unwrap();
        let out = dir.path().join("index.html");

        matdiscover()
            .args(["render", "--config"])
            .arg(&config)
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.contains("<title>CrystalScope preview</title>"));
    }

    #[test]
    fn rejects_unknown_config_field() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("site.json");
        std::fs::write(&config, r#"{ "theme": "dark" }"#).unwrap();

        matdiscover()
            .args(["render", "--config"])
            .arg(&config)
            .arg("--out")
            .arg(dir.path().join("index.html"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("site.json"));
    }

    #[test]
    fn rejects_empty_brand() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("site.json");
        std::fs::write(&config, r#"{ "brand": "  " }"#).unwrap();

        matdiscover()
            .args(["render", "--config"])
            .arg(&config)
            .arg("--out")
            .arg(dir.path().join("index.html"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("brand"));
    }

    #[test]
    fn missing_config_file_fails() {
        let dir = TempDir::new().unwrap();

        matdiscover()
            .args(["render", "--config"])
            .arg(dir.path().join("nope.json"))
            .arg("--out")
            .arg(dir.path().join("index.html"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("nope.json"));
    }
}

mod datasets {
    use super::*;

    #[test]
    fn prints_all_four_datasets() {
        let output = matdiscover().arg("datasets").output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["accuracy"].as_array().unwrap().len(), 3);
        assert_eq!(json["energy"].as_array().unwrap().len(), 5);
        assert_eq!(json["volume"].as_array().unwrap().len(), 2);
        assert_eq!(json["phase"].as_array().unwrap().len(), 3);
        assert_eq!(json["energy"][0]["material"], "Fe2O3");
    }

    #[test]
    fn pretty_output_is_indented() {
        matdiscover()
            .args(["datasets", "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\n  \"accuracy\""));
    }
}
