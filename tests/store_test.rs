mod common;

use imgmirror::{FetchOutcome, LocalStore};

#[tokio::test]
async fn writes_bytes_under_url_basename() {
    let scratch = common::create_test_dir();
    let image_dir = scratch.path().join("download_image");
    let store = LocalStore::new(&image_dir, scratch.path().join("default.jpg"));

    let saved = store
        .save(
            FetchOutcome::Bytes(b"jpeg bytes".to_vec()),
            "https://cdn.example.com/photos/a.jpg",
        )
        .await
        .expect("save should succeed");

    assert_eq!(saved, image_dir.join("a.jpg"));
    let written = tokio::fs::read(&saved).await.expect("file should exist");
    assert_eq!(written, b"jpeg bytes");
}

#[tokio::test]
async fn strips_query_string_from_destination_name() {
    let scratch = common::create_test_dir();
    let image_dir = scratch.path().join("download_image");
    let store = LocalStore::new(&image_dir, scratch.path().join("default.jpg"));

    let saved = store
        .save(
            FetchOutcome::Bytes(b"png".to_vec()),
            "https://cdn.example.com/b.png?size=large&v=2",
        )
        .await
        .expect("save should succeed");

    assert_eq!(saved, image_dir.join("b.png"));
}

#[tokio::test]
async fn fallback_resolves_to_default_image_without_writing() {
    let scratch = common::create_test_dir();
    let image_dir = scratch.path().join("download_image");
    let default_image = common::write_default_image(scratch.path()).await;
    let store = LocalStore::new(&image_dir, &default_image);

    let saved = store
        .save(FetchOutcome::Fallback, "https://cdn.example.com/dead.jpg")
        .await
        .expect("fallback always resolves");

    assert_eq!(saved, default_image);
    // No write happened: the image directory was never created.
    assert!(!image_dir.exists());
}

#[tokio::test]
async fn same_basename_overwrites_silently() {
    let scratch = common::create_test_dir();
    let image_dir = scratch.path().join("download_image");
    let store = LocalStore::new(&image_dir, scratch.path().join("default.jpg"));

    store
        .save(
            FetchOutcome::Bytes(b"first".to_vec()),
            "https://one.example.com/same.jpg",
        )
        .await
        .expect("first save");
    let saved = store
        .save(
            FetchOutcome::Bytes(b"second".to_vec()),
            "https://two.example.com/same.jpg",
        )
        .await
        .expect("second save");

    let written = tokio::fs::read(&saved).await.expect("file should exist");
    assert_eq!(written, b"second");
}

#[tokio::test]
async fn skips_url_without_derivable_filename() {
    let scratch = common::create_test_dir();
    let store = LocalStore::new(
        scratch.path().join("download_image"),
        scratch.path().join("default.jpg"),
    );

    let saved = store
        .save(FetchOutcome::Bytes(b"x".to_vec()), "https://cdn.example.com/")
        .await;

    assert!(saved.is_none());
}

#[tokio::test]
async fn skips_image_on_write_failure() {
    let scratch = common::create_test_dir();
    // A regular file where the image directory should be: every write fails.
    let blocked = scratch.path().join("not_a_directory");
    tokio::fs::write(&blocked, b"occupied").await.expect("setup");
    let store = LocalStore::new(&blocked, scratch.path().join("default.jpg"));

    let saved = store
        .save(
            FetchOutcome::Bytes(b"jpeg".to_vec()),
            "https://cdn.example.com/a.jpg",
        )
        .await;

    assert!(saved.is_none());
}
