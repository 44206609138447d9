//! Tests for a complete run: prompts answered, descriptor written.

use crate::support::*;

#[test]
fn test_reference_scenario() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);

    let output = t.run(&Answers::scenario(&cert).stdin());
    assert_success(&output);

    let fly = t.descriptor();
    assert_eq!(fly.lines().next(), Some(r#"app = "demo""#));
    assert_env_line(&fly, "BASIC_AUTH_USERNAME", "u");
    assert_env_line(&fly, "BASIC_AUTH_PASSWORD", "p");
    assert_env_line(&fly, "BUILDER_GITHUB_ORG_NAME", "org");
    assert_env_line(&fly, "BUILDER_GITHUB_REPO_NAME", "repo");
    assert_env_line(&fly, "BUILDER_GITHUB_TOKEN", "tok");
    assert_env_line(&fly, "BUILDER_GITHUB_WORKFLOW_FILE_NAME", "sign.yml");
    assert_env_line(&fly, "PROFILE_ACCOUNT_NAME", "a@b.com");
    assert_env_line(&fly, "PROFILE_ACCOUNT_PASS", "pw");
    assert_env_line(&fly, "PROFILE_CERT_BASE64", "AQID");
    assert_env_line(&fly, "PROFILE_CERT_PASS", "cp");
    assert_env_line(&fly, "PROFILE_NAME", "Main");
}

#[test]
fn test_confirmation_on_stdout() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);

    let output = t.run(&Answers::scenario(&cert).stdin());
    assert_success(&output);

    assert_eq!(stdout(&output), "✓ Your fly.toml file has been created!\n");
}

#[test]
fn test_descriptor_is_valid_toml() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);

    assert_success(&t.run(&Answers::scenario(&cert).stdin()));

    let doc: toml::Table = toml::from_str(&t.descriptor()).unwrap();
    assert_eq!(doc["app"].as_str(), Some("demo"));
    assert_eq!(doc["kill_signal"].as_str(), Some("SIGINT"));
    assert_eq!(doc["env"]["REDIRECT_HTTPS"].as_str(), Some("true"));
    assert_eq!(doc["experimental"]["auto_rollback"].as_bool(), Some(true));
    let services = doc["services"].as_array().unwrap();
    assert_eq!(services[0]["internal_port"].as_integer(), Some(8080));
    assert_eq!(services[0]["tcp_checks"][0]["interval"].as_str(), Some("15s"));
}

#[test]
fn test_custom_workflow_file_kept() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);
    let answers = Answers {
        builder_workflow_file_name: "build.yaml",
        ..Answers::scenario(&cert)
    };

    assert_success(&t.run(&answers.stdin()));

    assert_env_line(&t.descriptor(), "BUILDER_GITHUB_WORKFLOW_FILE_NAME", "build.yaml");
}

#[test]
fn test_quoted_certificate_path() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);
    let quoted = format!("\"{}\"", cert);

    assert_success(&t.run(&Answers::scenario(&quoted).stdin()));

    assert_env_line(&t.descriptor(), "PROFILE_CERT_BASE64", "AQID");
}

#[test]
fn test_relative_certificate_path() {
    let t = Test::new();
    t.cert(CERT_BYTES);

    assert_success(&t.run(&Answers::scenario("cert.p12").stdin()));

    assert_env_line(&t.descriptor(), "PROFILE_CERT_BASE64", "AQID");
}

#[test]
fn test_values_substituted_verbatim() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);
    let answers = Answers {
        app_name: "my app ",
        basic_auth_password: "p@ss w0rd!",
        profile_name: "Ünïcode 🚀",
        ..Answers::scenario(&cert)
    };

    assert_success(&t.run(&answers.stdin()));

    let fly = t.descriptor();
    assert_eq!(fly.lines().next(), Some(r#"app = "my app ""#));
    assert_env_line(&fly, "BASIC_AUTH_PASSWORD", "p@ss w0rd!");
    assert_env_line(&fly, "PROFILE_NAME", "Ünïcode 🚀");
}

#[test]
fn test_crlf_input() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);
    let input = Answers::scenario(&cert).stdin().replace('\n', "\r\n");

    assert_success(&t.run(&input));

    let fly = t.descriptor();
    assert_eq!(fly.lines().next(), Some(r#"app = "demo""#));
    assert_env_line(&fly, "BUILDER_GITHUB_WORKFLOW_FILE_NAME", "sign.yml");
}

#[test]
fn test_existing_descriptor_overwritten() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);
    std::fs::write(t.path("fly.toml"), "stale content that is quite long\n".repeat(100)).unwrap();

    assert_success(&t.run(&Answers::scenario(&cert).stdin()));

    let fly = t.descriptor();
    assert!(!fly.contains("stale"));
    assert!(fly.starts_with("app = \"demo\"\n"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);
    let input = Answers::scenario(&cert).stdin();

    assert_success(&t.run(&input));
    let first = std::fs::read(t.path("fly.toml")).unwrap();
    assert_success(&t.run(&input));
    let second = std::fs::read(t.path("fly.toml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_output_flag() {
    let t = Test::new();
    let cert = t.cert(CERT_BYTES);

    let output = t.run_with(&["--output", "staging.toml"], &Answers::scenario(&cert).stdin());
    assert_success(&output);

    assert!(t.path("staging.toml").exists());
    assert!(!t.path("fly.toml").exists());
    assert!(stdout(&output).contains("Your staging.toml file has been created!"));
}

#[test]
fn test_large_certificate() {
    let t = Test::new();
    let bytes: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    let cert = t.cert(&bytes);

    assert_success(&t.run(&Answers::scenario(&cert).stdin()));

    let fly = t.descriptor();
    let line = fly
        .lines()
        .find(|l| l.starts_with("    PROFILE_CERT_BASE64 = "))
        .unwrap();
    // 64 KiB encodes to 87384 characters plus the quotes
    assert_eq!(line.len(), "    PROFILE_CERT_BASE64 = ".len() + 87_384 + 2);
}
