//! Tests for `workers-preview teardown`.

use crate::support::*;
use httpmock::prelude::*;

#[test]
fn test_teardown_deletes_script_and_namespace() {
    let t = Test::new();
    let npx = t.fake_wrangler();
    t.namespace_listing(NAMESPACE_LISTING);

    let server = MockServer::start();
    let script = server.mock(|when, then| {
        when.method(DELETE)
            .path("/accounts/acct-1/workers/scripts/pr-42")
            .header("Authorization", "Bearer tok-1");
        then.status(200).body(r#"{"success":true}"#);
    });
    let kv = server.mock(|when, then| {
        when.method(DELETE)
            .path("/accounts/acct-1/storage/kv/namespaces/abc123")
            .header("Authorization", "Bearer tok-1");
        then.status(200).body(r#"{"success":true}"#);
    });

    let output = t
        .teardown(&npx, &server.base_url(), &["--deploy-name", "pr-42"])
        .output()
        .unwrap();
    assert_success(&output);
    script.assert();
    kv.assert();
    assert_stdout_contains(&output, "deleted script pr-42");
    assert_stdout_contains(&output, "abc123");
    assert!(t.calls().contains("ARGS kv:namespace list"));
}

#[test]
fn test_teardown_script_mode_skips_namespace() {
    let t = Test::new();
    let npx = t.fake_wrangler();

    let server = MockServer::start();
    let script = server.mock(|when, then| {
        when.method(DELETE).path("/accounts/acct-1/workers/scripts/pr-42");
        then.status(200);
    });

    let output = t
        .teardown(
            &npx,
            &server.base_url(),
            &["--deploy-name", "pr-42", "--mode", "script"],
        )
        .output()
        .unwrap();
    assert_success(&output);
    script.assert();
    assert!(t.calls().is_empty());
}

#[test]
fn test_teardown_no_matching_namespace_fails() {
    let t = Test::new();
    let npx = t.fake_wrangler();
    t.namespace_listing(NAMESPACE_LISTING);

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/accounts/acct-1/workers/scripts/pr-7");
        then.status(200);
    });
    let kv = server.mock(|when, then| {
        when.method(DELETE).path_contains("/storage/kv/namespaces/");
        then.status(200);
    });

    let output = t
        .teardown(&npx, &server.base_url(), &["--deploy-name", "pr-7"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "No KV namespace found");
    kv.assert_hits(0);
}

#[test]
fn test_teardown_unparseable_listing_fails() {
    let t = Test::new();
    let npx = t.fake_wrangler();
    t.namespace_listing("Error: you are not logged in\n");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/accounts/acct-1/workers/scripts/pr-42");
        then.status(200);
    });

    let output = t
        .teardown(&npx, &server.base_url(), &["--deploy-name", "pr-42"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "No matching namespaces found");
}

#[test]
fn test_teardown_api_namespace_source() {
    let t = Test::new();
    let npx = t.fake_wrangler();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/accounts/acct-1/workers/scripts/pr-42");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(GET).path("/accounts/acct-1/storage/kv/namespaces");
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "errors": [],
            "result": [{"id": "from-api", "title": "__pr-42-workers_sites_assets"}],
            "result_info": {"page": 1, "per_page": 100, "total_pages": 1}
        }));
    });
    let kv = server.mock(|when, then| {
        when.method(DELETE)
            .path("/accounts/acct-1/storage/kv/namespaces/from-api");
        then.status(200);
    });

    let output = t
        .teardown(
            &npx,
            &server.base_url(),
            &["--deploy-name", "pr-42", "--namespace-source", "api"],
        )
        .output()
        .unwrap();
    assert_success(&output);
    kv.assert();
    assert!(t.calls().is_empty());
}

#[test]
fn test_teardown_reports_api_error_status() {
    let t = Test::new();
    let npx = t.fake_wrangler();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/accounts/acct-1/workers/scripts/pr-42");
        then.status(404).body(r#"{"success":false}"#);
    });

    let output = t
        .teardown(
            &npx,
            &server.base_url(),
            &["--deploy-name", "pr-42", "--mode", "script"],
        )
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "returned 404");
}
