//! End-to-end tests for the `scoutlog` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `scoutlog` running in `dir` with no inherited config.
fn scoutlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scoutlog").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SCOUTLOG_CONFIG")
        .env("SCOUTLOG_LOG", "off");
    cmd
}

const VALID_FORM: [&str; 8] = [
    "--team", "118", "--match", "12", "--level", "Quals", "--station", "Red 1",
];

mod exit_status {
    use super::*;

    #[test]
    fn validation_error_exits_with_two() {
        let tmp = TempDir::new().unwrap();
        scoutlog(&tmp)
            .args(["add", "--team", "abc", "--match", "12", "--station", "Red 1"])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("team number must be an integer"));
    }

    #[test]
    fn unselected_station_exits_with_two() {
        let tmp = TempDir::new().unwrap();
        scoutlog(&tmp)
            .args(["add", "--team", "118", "--match", "12"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("team station must be selected"));
    }

    #[test]
    fn storage_error_exits_with_one() {
        let tmp = TempDir::new().unwrap();
        let db = tmp.path().join("missing").join("scouting.db");
        scoutlog(&tmp)
            .arg("--database")
            .arg(&db)
            .arg("add")
            .args(VALID_FORM)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cannot open scouting database"));
    }

    #[test]
    fn missing_explicit_config_exits_with_one() {
        let tmp = TempDir::new().unwrap();
        scoutlog(&tmp)
            .args(["--config", "absent.toml", "init"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cannot read config"));
    }
}

mod commands {
    use super::*;

    #[test]
    fn add_prints_new_id() {
        let tmp = TempDir::new().unwrap();
        scoutlog(&tmp)
            .arg("add")
            .args(VALID_FORM)
            .assert()
            .success()
            .stdout("1\n");
        scoutlog(&tmp)
            .arg("add")
            .args(VALID_FORM)
            .assert()
            .success()
            .stdout("2\n");
    }

    #[test]
    fn export_prints_written_path() {
        let tmp = TempDir::new().unwrap();
        scoutlog(&tmp).arg("add").args(VALID_FORM).assert().success();

        let out = scoutlog(&tmp)
            .args(["export", "--export-dir", "."])
            .assert()
            .success()
            .stdout(predicate::str::contains("scouting_data_"))
            .get_output()
            .stdout
            .clone();

        let path = String::from_utf8(out).unwrap();
        let contents = fs::read_to_string(tmp.path().join(path.trim())).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn qr_encodes_invalid_form_without_touching_database() {
        let tmp = TempDir::new().unwrap();
        scoutlog(&tmp)
            .args(["qr", "--team", "abc", "--auto=-4", "--png", "form.png"])
            .assert()
            .success()
            .stdout(predicate::str::contains("form.png"));

        assert!(tmp.path().join("form.png").is_file());
        assert!(!tmp.path().join("scouting.db").exists());
    }

    #[test]
    fn qr_works_with_unavailable_database() {
        let tmp = TempDir::new().unwrap();
        let db = tmp.path().join("missing").join("scouting.db");
        scoutlog(&tmp)
            .arg("--database")
            .arg(&db)
            .args(["qr", "--team", "1"])
            .assert()
            .success();
    }
}

mod config_lookup {
    use super::*;

    #[test]
    fn defaults_without_config_file() {
        let tmp = TempDir::new().unwrap();
        scoutlog(&tmp)
            .arg("init")
            .assert()
            .success()
            .stdout("scouting.db\n");
        assert!(tmp.path().join("scouting.db").is_file());
    }

    #[test]
    fn config_file_in_working_directory_is_used() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("scoutlog.toml"), "database = \"cwd.db\"\n").unwrap();

        scoutlog(&tmp).arg("init").assert().success().stdout("cwd.db\n");
        assert!(tmp.path().join("cwd.db").is_file());
        assert!(!tmp.path().join("scouting.db").exists());
    }

    #[test]
    fn config_flag_wins_over_working_directory_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("scoutlog.toml"), "database = \"cwd.db\"\n").unwrap();
        fs::write(tmp.path().join("event.toml"), "database = \"event.db\"\n").unwrap();

        scoutlog(&tmp)
            .args(["--config", "event.toml", "init"])
            .assert()
            .success()
            .stdout("event.db\n");
        assert!(!tmp.path().join("cwd.db").exists());
    }

    #[test]
    fn config_env_var_is_used() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("env.toml"), "database = \"env.db\"\n").unwrap();

        scoutlog(&tmp)
            .env("SCOUTLOG_CONFIG", "env.toml")
            .arg("init")
            .assert()
            .success()
            .stdout("env.db\n");
        assert!(tmp.path().join("env.db").is_file());
    }

    #[test]
    fn database_flag_overrides_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("scoutlog.toml"), "database = \"cwd.db\"\n").unwrap();

        scoutlog(&tmp)
            .args(["--database", "override.db", "add"])
            .args(VALID_FORM)
            .assert()
            .success()
            .stdout("1\n");
        assert!(tmp.path().join("override.db").is_file());
        assert!(!tmp.path().join("cwd.db").exists());
    }
}
