use assert_cmd::Command;
use predicates::str::contains;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("mastoblock").unwrap();
    cmd.env_clear();
    cmd
}

#[test]
fn missing_required_config_fails_before_start() {
    cmd()
        .assert()
        .failure()
        .stderr(contains("--json-url"));
}

#[test]
fn required_config_can_come_from_environment() {
    cmd()
        .env("JSON_URL", "https://example.org/blocklist.json")
        .env("MASTODON_BASE_URL", "https://mastodon.example")
        .env("MASTODON_ACCESS_TOKEN", "secret")
        .env("TASK_INTERVAL", "soon")
        .assert()
        .failure()
        .stderr(contains("TASK_INTERVAL"));
}

#[test]
fn zero_interval_is_rejected() {
    cmd()
        .args([
            "--json-url",
            "https://example.org/blocklist.json",
            "--mastodon-base-url",
            "https://mastodon.example",
            "--mastodon-access-token",
            "secret",
            "--task-interval",
            "0s",
        ])
        .assert()
        .failure()
        .stderr(contains("greater than zero"));
}

#[test]
fn env_file_in_working_directory_is_loaded() {
    let dir = std::env::temp_dir().join(format!("mastoblock-dotenv-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join(".env"),
        "JSON_URL=https://example.org/blocklist.json\n\
         MASTODON_BASE_URL=https://mastodon.example\n\
         MASTODON_ACCESS_TOKEN=secret\n\
         TASK_INTERVAL=later\n",
    )
    .unwrap();

    // The file replaces values already in the environment
    cmd()
        .current_dir(&dir)
        .env("TASK_INTERVAL", "5m")
        .assert()
        .failure()
        .stderr(contains("TASK_INTERVAL"))
        .stderr(contains("later"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn help_lists_environment_variables() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("MASTODON_BASE_URL"))
        .stdout(contains("TASK_INTERVAL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn once_runs_a_single_cycle_against_the_instance() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocklist.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domain_blocks": [
                {"domains": ["bad.example"], "severity": "suspend", "reject_media": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/domain_blocks"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "3", "domain": "old.com", "severity": "silence",
             "reject_media": false, "reject_reports": false, "public_comment": ""}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/admin/domain_blocks"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/domain_blocks/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let feed_url = format!("{uri}/blocklist.json");
    let output = tokio::task::spawn_blocking(move || {
        cmd()
            .args([
                "--json-url",
                feed_url.as_str(),
                "--mastodon-base-url",
                uri.as_str(),
                "--mastodon-access-token",
                "secret",
                "--environment",
                "prod",
                "--once",
            ])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn once_fails_when_the_instance_rejects_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocklist.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"domain_blocks": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/domain_blocks"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid token"})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let feed_url = format!("{uri}/blocklist.json");
    let output = tokio::task::spawn_blocking(move || {
        cmd()
            .args([
                "--json-url",
                feed_url.as_str(),
                "--mastodon-base-url",
                uri.as_str(),
                "--mastodon-access-token",
                "wrong",
                "--once",
            ])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("sync cycle failed"));
}
