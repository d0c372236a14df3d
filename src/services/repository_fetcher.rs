use std::vec;
use crate::adapters::github_client::GitHubClient;
use crate::enums::entry_kind::EntryKind;
use crate::errors::RemediatorResult;
use crate::structs::fetch_options::FetchOptions;
use crate::structs::fetch_report::FetchReport;
use crate::structs::file_map::FileMap;
use crate::structs::tree_entry::TreeEntry;

/// One listed directory whose entries are still being walked.
struct PendingListing {
    entries: vec::IntoIter<TreeEntry>,
    depth_left: usize,
}

/// Walks a remote directory tree and downloads the files that pass the
/// exclusion, depth and size filters.
///
/// The walk keeps its own stack of open listings instead of recursing, but
/// issues calls in the same order a depth-first recursion would: children
/// left to right as listed, a subdirectory fully before its next sibling.
pub struct RepositoryFetcher<'a> {
    client: &'a GitHubClient,
}

impl<'a> RepositoryFetcher<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, path: &str, options: &FetchOptions) -> RemediatorResult<FileMap> {
        let (files, _) = self.fetch_with_report(path, options).await?;
        Ok(files)
    }

    pub async fn fetch_with_report(&self, path: &str, options: &FetchOptions) -> RemediatorResult<(FileMap, FetchReport)> {
        let mut files = FileMap::new();
        let mut report = FetchReport::default();

        let root = self.list(path, &mut report).await?;
        let mut stack = vec![PendingListing {
            entries: root.into_iter(),
            depth_left: options.max_depth,
        }];

        while let Some(current) = stack.last_mut() {
            let Some(entry) = current.entries.next() else {
                stack.pop();
                continue;
            };
            let depth_left = current.depth_left;

            match entry.kind {
                EntryKind::Directory => {
                    if options.exclude_folders.contains(entry.base_name()) {
                        log::info!("Skipping excluded folder: {}", entry.path);
                        report.excluded_folders += 1;
                        continue;
                    }

                    if depth_left == 0 {
                        log::warn!("⚠️ Max depth reached at {}, skipping its contents", entry.path);
                        report.depth_cutoffs += 1;
                        continue;
                    }

                    let children = self.list(&entry.path, &mut report).await?;
                    stack.push(PendingListing {
                        entries: children.into_iter(),
                        depth_left: depth_left - 1,
                    });
                }
                EntryKind::File => {
                    if entry.size > options.max_file_size {
                        log::warn!(
                            "⚠️ Skipping {} ({} bytes exceeds limit of {} bytes)",
                            entry.path, entry.size, options.max_file_size
                        );
                        report.oversize_files += 1;
                        continue;
                    }

                    let Some(url) = entry.download_url.as_deref() else {
                        log::debug!("No download URL for {}, skipping", entry.path);
                        report.unsupported_entries += 1;
                        continue;
                    };

                    let content = self.client.download(url).await?;
                    log::debug!("Fetched {} ({} bytes)", entry.path, content.len());
                    report.files_fetched += 1;
                    files.insert(entry.path, content);
                }
                EntryKind::Symlink | EntryKind::Submodule | EntryKind::Unknown => {
                    log::debug!("Skipping {:?} entry {}", entry.kind, entry.path);
                    report.unsupported_entries += 1;
                }
            }
        }

        report.log_summary(&self.client.repository().full_name());
        Ok((files, report))
    }

    async fn list(&self, path: &str, report: &mut FetchReport) -> RemediatorResult<Vec<TreeEntry>> {
        log::debug!("Listing '{}'", path);
        report.listings += 1;
        self.client.list_directory(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use serde_json::json;
    use crate::enums::http_method::HttpMethod;
    use crate::errors::ErrorKind;
    use crate::services::rate_limiter::ApiRateLimiter;
    use crate::services::retrying_transport::{RetryPolicy, RetryingTransport};
    use crate::structs::repository_ref::RepositoryRef;
    use crate::testing::manual_clock::ManualClock;
    use crate::testing::mock_transport::MockTransport;

    const CONTENTS: &str = "https://api.github.com/repos/acme/widgets/contents";

    fn client(mock: &MockTransport) -> GitHubClient {
        let clock = Arc::new(ManualClock::new());
        let transport = RetryingTransport::new(
            Arc::new(mock.clone()),
            ApiRateLimiter::new(1000, Duration::from_secs(60), clock.clone()),
            clock,
            RetryPolicy::new(3, Duration::from_millis(10)),
            Duration::from_secs(10),
        );
        let repository = RepositoryRef::parse("https://github.com/acme/widgets", "main", &["github.com".to_string()]).unwrap();
        GitHubClient::new(transport, "https://api.github.com", repository, "secret", "repo-remediator")
    }

    fn listing(path: &str) -> String {
        if path.is_empty() {
            format!("{}?ref=main", CONTENTS)
        } else {
            format!("{}/{}?ref=main", CONTENTS, path)
        }
    }

    fn file(path: &str, size: u64) -> serde_json::Value {
        json!({"type": "file", "path": path, "size": size, "download_url": format!("https://raw.example/{}", path)})
    }

    fn dir(path: &str) -> serde_json::Value {
        json!({"type": "dir", "path": path, "size": 0, "download_url": null})
    }

    fn raw(mock: &MockTransport, path: &str, body: &str) {
        mock.push_response(
            HttpMethod::Get,
            format!("https://raw.example/{}", path),
            crate::structs::http::http_response::HttpResponse::new(200, body),
        );
    }

    fn options(exclude: &[&str], max_depth: usize) -> FetchOptions {
        FetchOptions::new(exclude.iter().map(|s| s.to_string()), max_depth, 1024)
    }

    #[tokio::test]
    async fn excluded_names_are_skipped_at_every_depth() {
        let mock = MockTransport::new();
        mock.push_json(HttpMethod::Get, listing(""), 200, json!([dir("test"), dir("src")]));
        mock.push_json(HttpMethod::Get, listing("src"), 200, json!([file("src/lib.py", 5), dir("src/test")]));
        raw(&mock, "src/lib.py", "x = 1");

        let client = client(&mock);
        let (files, report) = RepositoryFetcher::new(&client)
            .fetch_with_report("", &options(&["test"], 5))
            .await
            .unwrap();

        assert_eq!(files.keys().collect::<Vec<_>>(), vec!["src/lib.py"]);
        assert_eq!(report.excluded_folders, 2);
        assert!(mock.requests_to(HttpMethod::Get, "contents/test?ref=main").is_empty());
        assert!(mock.requests_to(HttpMethod::Get, "contents/src/test?ref=main").is_empty());
    }

    #[tokio::test]
    async fn depth_cutoff_skips_subtree_without_failing() {
        let mock = MockTransport::new();
        mock.push_json(HttpMethod::Get, listing(""), 200, json!([file("a.py", 1), dir("one")]));
        mock.push_json(HttpMethod::Get, listing("one"), 200, json!([file("one/b.py", 1), dir("one/two")]));
        raw(&mock, "a.py", "a");
        raw(&mock, "one/b.py", "b");

        let client = client(&mock);
        let (files, report) = RepositoryFetcher::new(&client)
            .fetch_with_report("", &options(&[], 1))
            .await
            .unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(report.depth_cutoffs, 1);
        assert_eq!(report.listings, 2);
        assert!(mock.requests_to(HttpMethod::Get, "contents/one/two?ref=main").is_empty());
    }

    #[tokio::test]
    async fn oversize_files_are_dropped_but_siblings_survive() {
        let mock = MockTransport::new();
        mock.push_json(HttpMethod::Get, listing(""), 200, json!([file("big.bin", 4096), file("small.py", 10)]));
        raw(&mock, "small.py", "print('hi')");

        let client = client(&mock);
        let (files, report) = RepositoryFetcher::new(&client)
            .fetch_with_report("", &options(&[], 3))
            .await
            .unwrap();

        assert!(!files.contains_key("big.bin"));
        assert_eq!(files["small.py"], b"print('hi')".to_vec());
        assert_eq!(report.oversize_files, 1);
        assert!(mock.requests_to(HttpMethod::Get, "big.bin").is_empty());
    }

    #[tokio::test]
    async fn calls_follow_listing_order_depth_first() {
        let mock = MockTransport::new();
        mock.push_json(HttpMethod::Get, listing(""), 200, json!([dir("a"), file("b.py", 1)]));
        mock.push_json(HttpMethod::Get, listing("a"), 200, json!([file("a/c.py", 1)]));
        raw(&mock, "a/c.py", "c");
        raw(&mock, "b.py", "b");

        let client = client(&mock);
        RepositoryFetcher::new(&client).fetch("", &options(&[], 3)).await.unwrap();

        let urls: Vec<String> = mock.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                listing(""),
                listing("a"),
                "https://raw.example/a/c.py".to_string(),
                "https://raw.example/b.py".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn unsupported_entries_are_ignored() {
        let mock = MockTransport::new();
        mock.push_json(
            HttpMethod::Get,
            listing(""),
            200,
            json!([
                {"type": "symlink", "path": "link", "size": 4, "download_url": "https://raw.example/link"},
                {"type": "submodule", "path": "vendor", "size": 0, "download_url": null}
            ]),
        );

        let client = client(&mock);
        let (files, report) = RepositoryFetcher::new(&client)
            .fetch_with_report("", &options(&[], 3))
            .await
            .unwrap();

        assert!(files.is_empty());
        assert_eq!(report.unsupported_entries, 2);
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn unknown_entry_types_do_not_stop_the_walk() {
        let mock = MockTransport::new();
        mock.push_json(
            HttpMethod::Get,
            listing(""),
            200,
            json!([
                {"type": "worktree", "path": "odd", "size": 0, "download_url": null},
                file("a.py", 1)
            ]),
        );
        raw(&mock, "a.py", "a");

        let client = client(&mock);
        let (files, report) = RepositoryFetcher::new(&client)
            .fetch_with_report("", &options(&[], 3))
            .await
            .unwrap();

        assert_eq!(files.keys().collect::<Vec<_>>(), vec!["a.py"]);
        assert_eq!(report.unsupported_entries, 1);
        assert_eq!(report.files_fetched, 1);
    }

    #[tokio::test]
    async fn terminal_errors_abort_the_fetch() {
        let mock = MockTransport::new();
        mock.push_json(HttpMethod::Get, listing(""), 200, json!([file("a.py", 1)]));
        mock.push_json(HttpMethod::Get, "https://raw.example/a.py", 401, json!({"message": "Bad credentials"}));

        let client = client(&mock);
        let err = RepositoryFetcher::new(&client).fetch("", &options(&[], 3)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Auth);
    }
}
