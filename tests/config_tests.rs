use std::fs;

use catascan::error::{ConfigError, Error};
use catascan::infrastructure::config::geolocation::GeolocationProvider;
use catascan::infrastructure::config::settings::Config;

fn write_temp_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[logging]
level = "debug"
format = "json"

[geolocation]
provider = "fixed"
latitude = 6.5244
longitude = 3.3792
timeout_ms = 5000

[overpass]
url = "https://overpass.kumi.systems/api/interpreter"
radius_m = 5000

[backend]
base_url = "http://localhost:8000/"

[http]
timeout_ms = 30000

[store]
path = "/tmp/catascan-store.json"
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.geolocation.provider, GeolocationProvider::Fixed);
    assert_eq!(config.geolocation.options().timeout.as_millis(), 5000);
    assert!(config.geolocation.options().high_accuracy);
    assert_eq!(config.overpass.radius_m, 5000);
    assert_eq!(config.overpass.query_builder().radius_m(), 5000);
    assert_eq!(config.backend.upload_url(), "http://localhost:8000/upload-image");
    assert_eq!(config.backend.predict_url(), "http://localhost:8000/predict");
    assert_eq!(config.http.timeout_ms, 30_000);
    assert_eq!(config.http.connect_timeout_ms, 10_000);
    assert_eq!(
        config.store.resolved_path(),
        std::path::PathBuf::from("/tmp/catascan-store.json")
    );
}

#[test]
fn config_rejects_zero_geolocation_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[geolocation]\ntimeout_ms = 0\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "geolocation.timeout_ms",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid timeout error, got {err}"),
        Ok(_) => panic!("Expected invalid timeout error, got Ok"),
    }
}

#[test]
fn config_rejects_malformed_overpass_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[overpass]\nurl = \"not a url\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "overpass.url",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_provider() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[geolocation]\nprovider = \"gps\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn missing_explicit_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.overpass.radius_m, 10_000);
    assert_eq!(
        config.backend.upload_url(),
        "https://catascan-app-backend.onrender.com/upload-image"
    );
}
