use serde_json::json;
use repo_remediator::enums::http_method::HttpMethod;
use repo_remediator::structs::remediation_response::RemediationResponse;
use crate::support::{dir, file, request, Harness};

fn blob_paths(harness: &Harness) -> Vec<String> {
    let tree = harness.body(HttpMethod::Post, "/git/trees", 0);
    tree["tree"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["path"].as_str().unwrap().to_string())
        .collect()
}

fn publish_succeeds(harness: &Harness, blobs: usize) {
    harness.branch("main", "base-commit");
    harness.no_branch("fix-1");
    harness.object_writes(blobs);
    harness.ref_created("fix-1");
}

#[tokio::test]
async fn excluded_folder_names_apply_at_every_depth() {
    let harness = Harness::new();
    harness.listing("", json!([dir("test"), dir("src"), file("main.py", 4)]));
    harness.listing("src", json!([dir("src/test"), file("src/app.py", 4)]));
    harness.raw_file("src/app.py", "app!");
    harness.raw_file("main.py", "main");
    publish_succeeds(&harness, 2);

    let mut req = request("fix-1");
    req.exclude_folders = Some(vec!["test".to_string()]);
    let response = harness.orchestrator().run(&req).await;

    assert_eq!(response, RemediationResponse::success("fix-1"));
    assert_eq!(blob_paths(&harness), vec!["main.py", "src/app.py"]);
    assert!(harness.mock.requests_to(HttpMethod::Get, "contents/test?ref=main").is_empty());
    assert!(harness.mock.requests_to(HttpMethod::Get, "contents/src/test?ref=main").is_empty());
}

#[tokio::test]
async fn configured_exclusions_merge_with_request_exclusions() {
    let mut harness = Harness::new();
    harness.config.fetch.exclude_folders = vec!["node_modules".to_string()];
    harness.listing("", json!([dir("node_modules"), dir("docs"), file("index.js", 2)]));
    harness.raw_file("index.js", "42");
    publish_succeeds(&harness, 1);

    let mut req = request("fix-1");
    req.exclude_folders = Some(vec!["docs".to_string()]);
    let response = harness.orchestrator().run(&req).await;

    assert!(response.is_success());
    assert_eq!(blob_paths(&harness), vec!["index.js"]);
}

#[tokio::test]
async fn depth_cutoff_drops_subtree_but_publishes_the_rest() {
    let mut harness = Harness::new();
    harness.config.fetch.max_depth = 1;
    harness.listing("", json!([file("a.py", 1), dir("one")]));
    harness.raw_file("a.py", "a");
    harness.listing("one", json!([file("one/b.py", 1), dir("one/two")]));
    harness.raw_file("one/b.py", "b");
    publish_succeeds(&harness, 2);

    let response = harness.orchestrator().run(&request("fix-1")).await;

    assert!(response.is_success());
    assert_eq!(blob_paths(&harness), vec!["a.py", "one/b.py"]);
    assert!(harness.mock.requests_to(HttpMethod::Get, "contents/one/two?ref=main").is_empty());
}

#[tokio::test]
async fn oversize_files_are_left_out_of_the_branch() {
    let mut harness = Harness::new();
    harness.config.fetch.max_file_size = "1KB".to_string();
    harness.listing("", json!([file("huge.json", 2048), file("small.py", 10)]));
    harness.raw_file("small.py", "print('x')");
    publish_succeeds(&harness, 1);

    let response = harness.orchestrator().run(&request("fix-1")).await;

    assert!(response.is_success());
    assert_eq!(blob_paths(&harness), vec!["small.py"]);
    assert!(harness.mock.requests_to(HttpMethod::Get, "huge.json").is_empty());
}

#[tokio::test]
async fn excluded_extensions_are_not_republished() {
    let harness = Harness::new();
    harness.listing("", json!([file("README.md", 3), file("a.py", 3)]));
    harness.raw_file("README.md", "# x");
    harness.raw_file("a.py", "x=1");
    publish_succeeds(&harness, 1);

    let mut req = request("fix-1");
    req.exclude_extensions = Some(vec!["md".to_string()]);
    let response = harness.orchestrator().run(&req).await;

    assert!(response.is_success());
    assert_eq!(blob_paths(&harness), vec!["a.py"]);
}
