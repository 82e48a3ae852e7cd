//! Mock GitHub + NuGet server

use flate2::Compression;
use flate2::write::GzEncoder;
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

pub const OWNER: &str = "IBM";
pub const REPO: &str = "dotnet-s390x";
pub const PACKAGE: &str = "microsoft.netcore.app.runtime.linux-x64";

/// In-memory `.tar.gz` with the given files
pub fn tarball(files: &[(&str, &[u8])]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append_data(&mut header, name, *contents).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

pub fn asset_name(tag: &str, arch: &str) -> String {
    format!("dotnet-sdk-{}-linux-{}.tar.gz", tag.trim_start_matches('v'), arch)
}

/// Release JSON as the GitHub API returns it, with s390x and ppc64le SDK assets
pub fn release_json(server_url: &str, tag: &str) -> serde_json::Value {
    let assets: Vec<serde_json::Value> = ["s390x", "ppc64le"]
        .iter()
        .map(|arch| {
            let name = asset_name(tag, arch);
            json!({
                "name": name,
                "browser_download_url": format!("{}/download/{}", server_url, name),
                "content_type": "application/gzip"
            })
        })
        .collect();

    json!({ "tag_name": tag, "draft": false, "assets": assets })
}

pub async fn start() -> ServerGuard {
    Server::new_async().await
}

/// Serve `tags` as a single page of releases followed by an empty page
pub async fn mock_release_list(server: &mut ServerGuard, tags: &[&str]) -> Vec<Mock> {
    let url = server.url();
    let releases: Vec<serde_json::Value> =
        tags.iter().map(|tag| release_json(&url, tag)).collect();
    let path = format!("/repos/{}/{}/releases", OWNER, REPO);

    let first = server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::Value::from(releases).to_string())
        .create_async()
        .await;
    let empty = server
        .mock("GET", path.as_str())
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    vec![first, empty]
}

pub async fn mock_release(server: &mut ServerGuard, tag: &str) -> Mock {
    let body = release_json(&server.url(), tag).to_string();
    server
        .mock(
            "GET",
            format!("/repos/{}/{}/releases/tags/{}", OWNER, REPO, tag).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

pub async fn mock_nuget_versions(server: &mut ServerGuard, versions: &[&str]) -> Mock {
    server
        .mock(
            "GET",
            format!("/v3-flatcontainer/{}/index.json", PACKAGE).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "versions": versions }).to_string())
        .create_async()
        .await
}

pub async fn mock_download(server: &mut ServerGuard, name: &str, body: Vec<u8>) -> Mock {
    server
        .mock("GET", format!("/download/{}", name).as_str())
        .with_status(200)
        .with_header("content-type", "application/gzip")
        .with_body(body)
        .create_async()
        .await
}
