#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::{write::GzEncoder, Compression};
use libriprep::progress::{ProgressBarOpts, ProgressDisplay, StyleOptions};
use libriprep::{create_http_client, HttpClientConfig};
use reqwest_middleware::ClientWithMiddleware;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// A port from the "discard" range nothing listens on; a request sent there
// fails immediately, which lets tests prove no request was made.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9/file.tar.gz";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Creates an HTTP client with the default test configuration
pub fn test_client() -> ClientWithMiddleware {
    create_http_client(HttpClientConfig::default()).expect("Failed to create test client")
}

/// Creates a progress display that draws nothing
pub fn hidden_display() -> ProgressDisplay {
    ProgressDisplay::new(StyleOptions::new(
        ProgressBarOpts::hidden(),
        ProgressBarOpts::hidden(),
    ))
}

/// Builds a gzip-compressed tar archive at `dest`.
///
/// Each entry is `(path, Some(content))` for a file or `(path, None)` for a
/// directory.
pub fn build_tar_gz(dest: &Path, entries: &[(&str, Option<&[u8]>)]) {
    let file = File::create(dest).expect("Failed to create archive file");
    let enc = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(enc);

    for (path, content) in entries {
        match content {
            Some(bytes) => {
                let mut header = tar::Header::new_gnu();
                header.set_size(bytes.len() as u64);
                header.set_mode(0o644);
                header.set_cksum();
                builder
                    .append_data(&mut header, path, *bytes)
                    .expect("Failed to append file member");
            }
            None => {
                let mut header = tar::Header::new_gnu();
                header.set_entry_type(tar::EntryType::dir());
                header.set_size(0);
                header.set_mode(0o755);
                header.set_cksum();
                builder
                    .append_data(&mut header, path, std::io::empty())
                    .expect("Failed to append directory member");
            }
        }
    }

    let enc = builder.into_inner().expect("Failed to finish tar stream");
    enc.finish().expect("Failed to finish gzip stream");
}

/// Builds an archive ending in a member whose name bytes are written directly
/// into the header, bypassing the path validation `tar::Builder` would
/// otherwise apply. Used to craft traversal members, optionally preceded by
/// well-formed file members.
pub fn build_tar_gz_with_raw_member(
    dest: &Path,
    leading: &[(&str, &[u8])],
    raw_name: &[u8],
    content: &[u8],
) {
    let file = File::create(dest).expect("Failed to create archive file");
    let enc = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(enc);

    for (path, bytes) in leading {
        let mut header = tar::Header::new_gnu();
        header.set_size(bytes.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, path, *bytes)
            .expect("Failed to append file member");
    }

    let mut header = tar::Header::new_gnu();
    header.as_old_mut().name[..raw_name.len()].copy_from_slice(raw_name);
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder
        .append(&header, content)
        .expect("Failed to append raw member");

    let enc = builder.into_inner().expect("Failed to finish tar stream");
    enc.finish().expect("Failed to finish gzip stream");
}

/// Spawns a local HTTP server answering every request with the given status
/// and body. Returns the base URL, e.g. `http://127.0.0.1:49152`.
///
/// With `content_length` set to false the response omits the Content-Length
/// header and terminates the body by closing the connection.
pub async fn spawn_http_server(status: u16, body: Vec<u8>, content_length: bool) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get server address");

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                _ => "Error",
            };
            let mut head = format!("HTTP/1.1 {status} {reason}\r\nConnection: close\r\n");
            if content_length {
                head.push_str(&format!("Content-Length: {}\r\n", body.len()));
            }
            head.push_str("\r\n");

            let _ = stream.write_all(head.as_bytes()).await;
            let _ = stream.write_all(&body).await;
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{addr}")
}

/// Collects every file and directory path beneath `root`, relative to it.
pub fn collect_paths(root: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    collect_paths_into(root, root, &mut paths);
    paths.sort();
    paths
}

fn collect_paths_into(root: &Path, dir: &Path, paths: &mut Vec<PathBuf>) {
    for entry in std::fs::read_dir(dir).expect("Failed to read directory") {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();
        paths.push(
            path.strip_prefix(root)
                .expect("Entry outside of root")
                .to_path_buf(),
        );
        if path.is_dir() {
            collect_paths_into(root, &path, paths);
        }
    }
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = std::fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}
