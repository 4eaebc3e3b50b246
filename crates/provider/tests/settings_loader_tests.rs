use crate::ai_sdk_core::SdkError;
use crate::ai_sdk_provider::{
    load_optional_setting, load_setting, without_trailing_slash, EnvSettingsLoader,
    LoadSettingRequest, MapSettingsLoader, SettingsLoader,
};

fn project_request(value: Option<&str>) -> LoadSettingRequest<'_> {
    LoadSettingRequest {
        setting_value: value,
        env_var: "GOOGLE_VERTEX_PROJECT",
        setting_name: "project",
        description: "Google Vertex project",
    }
}

#[test]
fn explicit_value_wins_over_loader() {
    let loader = MapSettingsLoader::new().with("GOOGLE_VERTEX_PROJECT", "from-env");
    let value = load_setting(&loader, project_request(Some("explicit"))).unwrap();
    assert_eq!(value, "explicit");
}

#[test]
fn falls_back_to_loader_when_explicit_missing() {
    let loader = MapSettingsLoader::new().with("GOOGLE_VERTEX_PROJECT", "from-env");
    let value = load_setting(&loader, project_request(None)).unwrap();
    assert_eq!(value, "from-env");
}

#[test]
fn blank_explicit_value_is_treated_as_missing() {
    let loader = MapSettingsLoader::new().with("GOOGLE_VERTEX_PROJECT", "from-env");
    let value = load_setting(&loader, project_request(Some("   "))).unwrap();
    assert_eq!(value, "from-env");
}

#[test]
fn missing_everywhere_is_an_error() {
    let loader = MapSettingsLoader::from_iter([("GOOGLE_VERTEX_PROJECT", "")]);
    let err = load_setting(&loader, project_request(None)).unwrap_err();
    match err {
        SdkError::MissingSetting {
            setting, env_var, ..
        } => {
            assert_eq!(setting, "project");
            assert_eq!(env_var, "GOOGLE_VERTEX_PROJECT");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[test]
fn optional_setting_returns_none_when_absent() {
    let loader = MapSettingsLoader::new();
    assert_eq!(
        load_optional_setting(&loader, None, "GOOGLE_VERTEX_LOCATION"),
        None
    );
    assert_eq!(
        load_optional_setting(&loader, Some("europe-west4"), "GOOGLE_VERTEX_LOCATION"),
        Some("europe-west4".to_string())
    );
}

#[test]
fn env_loader_reads_process_environment() {
    let key = "AI_SDK_SETTINGS_LOADER_TEST_VALUE";
    std::env::set_var(key, "present");
    assert_eq!(EnvSettingsLoader.lookup(key), Some("present".to_string()));
    std::env::remove_var(key);
    assert_eq!(EnvSettingsLoader.lookup(key), None);
}

#[test]
fn trailing_slashes_are_stripped() {
    assert_eq!(
        without_trailing_slash("https://custom-endpoint.example.com/"),
        "https://custom-endpoint.example.com"
    );
    assert_eq!(without_trailing_slash("https://a.example//"), "https://a.example");
    assert_eq!(without_trailing_slash("https://a.example"), "https://a.example");
}
