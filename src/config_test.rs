use super::*;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    let mut full = vec!["sonar-report"];
    full.extend_from_slice(args);
    Cli::parse_from(full)
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_project_key_is_fatal() {
    let err = Config::resolve_with(parse(&[]), no_env).unwrap_err();
    assert!(err.to_string().contains("project key is required"));
}

#[test]
fn project_key_from_flag() {
    let config = Config::resolve_with(parse(&["--project", "demo-proj"]), no_env).unwrap();
    assert_eq!(config.project_key, "demo-proj");
}

#[test]
fn project_key_from_env() {
    let env = |key: &str| (key == "SONAR_PROJECT_KEY").then(|| "env-proj".to_string());
    let config = Config::resolve_with(parse(&[]), env).unwrap();
    assert_eq!(config.project_key, "env-proj");
}

#[test]
fn flag_wins_over_env() {
    let env = |key: &str| (key == "SONAR_PROJECT_KEY").then(|| "env-proj".to_string());
    let config = Config::resolve_with(parse(&["--project", "flag-proj"]), env).unwrap();
    assert_eq!(config.project_key, "flag-proj");
}

#[test]
fn default_host_and_outputs() {
    let config = Config::resolve_with(parse(&["--project", "p"]), no_env).unwrap();
    assert_eq!(config.host, "http://localhost:9000");
    assert_eq!(config.json_output, PathBuf::from("report.json"));
    assert_eq!(config.html_output, PathBuf::from("report.html"));
    assert_eq!(config.source_root, PathBuf::from("."));
}

#[test]
fn host_trailing_slash_trimmed() {
    let config = Config::resolve_with(
        parse(&["--project", "p", "--host", "http://sonar:9000/"]),
        no_env,
    )
    .unwrap();
    assert_eq!(config.host, "http://sonar:9000");
}

#[test]
fn host_from_env() {
    let env = |key: &str| (key == "SONAR_HOST").then(|| "http://ci-sonar:9000".to_string());
    let config = Config::resolve_with(parse(&["--project", "p"]), env).unwrap();
    assert_eq!(config.host, "http://ci-sonar:9000");
}

#[test]
fn token_takes_precedence_over_credentials() {
    let config = Config::resolve_with(
        parse(&["--project", "p", "--token", "squ_abc", "--user", "u"]),
        no_env,
    )
    .unwrap();
    assert!(matches!(config.auth, Auth::Token(ref t) if t == "squ_abc"));
}

#[test]
fn token_from_env() {
    let env = |key: &str| (key == "SONAR_TOKEN").then(|| "squ_env".to_string());
    let config = Config::resolve_with(parse(&["--project", "p"]), env).unwrap();
    assert!(matches!(config.auth, Auth::Token(ref t) if t == "squ_env"));
}

#[test]
fn defaults_to_admin_credentials() {
    let config = Config::resolve_with(parse(&["--project", "p"]), no_env).unwrap();
    match config.auth {
        Auth::Basic { user, password } => {
            assert_eq!(user, "admin");
            assert_eq!(password, "admin");
        }
        Auth::Token(_) => panic!("expected basic auth"),
    }
}

#[test]
fn explicit_credentials_kept() {
    let config = Config::resolve_with(
        parse(&["--project", "p", "--user", "ops", "--password", "s3cret"]),
        no_env,
    )
    .unwrap();
    match config.auth {
        Auth::Basic { user, password } => {
            assert_eq!(user, "ops");
            assert_eq!(password, "s3cret");
        }
        Auth::Token(_) => panic!("expected basic auth"),
    }
}
