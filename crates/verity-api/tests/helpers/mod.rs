//! Test helpers: build the router against scratch directories.
//!
//! Run from workspace root: `cargo test -p verity-api`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use verity_core::Config;

/// Test application: server plus the scratch directories it writes to.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Names of the files currently in the upload directory.
    pub fn stored_files(&self) -> Vec<String> {
        list_files(&self.upload_dir)
    }

    /// POST `data` as the `image` field of a multipart form.
    pub async fn upload(&self, filename: &str, mime: &str, data: Vec<u8>) -> TestResponse {
        let part = Part::bytes(bytes::Bytes::from(data))
            .file_name(filename.to_string())
            .mime_type(mime.to_string());
        let form = MultipartForm::new().add_part("image", part);
        self.server.post("/analyze").multipart(form).await
    }
}

pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read upload dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Default test configuration rooted in `root`.
pub fn test_config(root: &Path) -> Config {
    Config {
        upload_dir: root.join("uploads"),
        static_dir: root.join("static"),
        ..Config::default()
    }
}

/// Setup test app with a landing page and an empty upload directory.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup test app, letting the caller adjust the configuration first.
pub async fn setup_test_app_with(customize: impl FnOnce(&mut Config)) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let mut config = test_config(temp_dir.path());
    customize(&mut config);

    std::fs::create_dir_all(&config.static_dir).expect("create static dir");
    std::fs::write(config.static_dir.join("index.html"), fixtures::INDEX_HTML)
        .expect("write index.html");

    let upload_dir = config.upload_dir.clone();
    let static_dir = config.static_dir.clone();

    let (_state, app) = verity_api::setup::build_app(config)
        .await
        .expect("Failed to build app");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        upload_dir,
        static_dir,
        _temp_dir: temp_dir,
    }
}
