// SPDX-License-Identifier: MPL-2.0
//! End-to-end gallery and to-do flows over the bundled backends.

use futures_util::StreamExt;
use skyboard::application::command::todos::TodoList;
use skyboard::application::port::{ImageResolver, ImageUploader, TodoStore};
use skyboard::application::query::gallery::{FooterStatus, LoadOutcome, PageLoader};
use skyboard::infrastructure::{LocalStorage, MemoryTodoStore};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

const PREFIX: &str = "image-submissions/";

fn seed(root: &Path, count: usize) {
    let dir = root.join("image-submissions");
    fs::create_dir_all(&dir).expect("create prefix dir");
    for i in 0..count {
        fs::write(dir.join(format!("img_{i:02}.png")), b"png").expect("write image");
    }
}

#[tokio::test]
async fn thirteen_images_load_in_two_pages() {
    let dir = tempdir().expect("temp dir");
    seed(dir.path(), 13);
    let storage = LocalStorage::new(dir.path());
    let mut loader = PageLoader::new(PREFIX, 10);

    let first = loader.load_next_page(&storage).await;
    // The folder marker takes one slot of the first page and is dropped.
    assert!(matches!(first, Some(LoadOutcome::Appended { added: 9 })));
    assert_eq!(loader.footer(), FooterStatus::LoadMore(10));

    let second = loader.load_next_page(&storage).await;
    assert!(matches!(second, Some(LoadOutcome::Appended { added: 4 })));
    assert_eq!(loader.items().len(), 13);
    assert_eq!(loader.footer(), FooterStatus::AllLoaded);
    assert_eq!(loader.items()[0].display_name(), "img_00.png");
    assert_eq!(loader.items()[12].display_name(), "img_12.png");

    assert!(loader.load_next_page(&storage).await.is_none());
}

#[tokio::test]
async fn missing_folder_shows_empty_state() {
    let dir = tempdir().expect("temp dir");
    let storage = LocalStorage::new(dir.path());
    let mut loader = PageLoader::new(PREFIX, 10);

    loader.load_next_page(&storage).await;
    assert!(loader.items().is_empty());
    assert_eq!(loader.footer(), FooterStatus::Empty);
}

#[tokio::test]
async fn uploaded_image_appears_after_refresh() {
    let dir = tempdir().expect("temp dir");
    seed(dir.path(), 2);
    let storage = LocalStorage::new(dir.path());
    let mut loader = PageLoader::new(PREFIX, 10);
    loader.load_next_page(&storage).await;
    assert_eq!(loader.items().len(), 2);

    let item = storage
        .upload(format!("{PREFIX}new.png"), b"fresh".to_vec())
        .await
        .expect("upload");
    assert_eq!(storage.resolve(&item.path).await.expect("resolve"), b"fresh");

    loader.reset();
    loader.load_next_page(&storage).await;
    assert_eq!(loader.items().len(), 3);
}

#[tokio::test]
async fn todo_list_follows_store_snapshots() {
    let dir = tempdir().expect("temp dir");
    let file = dir.path().join("todos.cbor");
    let store = Arc::new(MemoryTodoStore::open(&file).expect("open store"));
    let mut list = TodoList::new(store.clone());
    let mut snapshots = list.observe();

    let initial = snapshots.next().await.expect("initial snapshot");
    list.apply_snapshot(initial);
    assert!(list.todos().is_empty());

    list.create("  buy milk ")
        .expect("non-empty content")
        .await
        .expect("create");
    list.apply_snapshot(snapshots.next().await.expect("snapshot after create"));
    assert_eq!(list.todos().len(), 1);
    assert_eq!(list.todos()[0].content, "buy milk");
    assert!(!list.todos()[0].is_done);

    list.toggle(0).expect("has id").await.expect("toggle");
    list.apply_snapshot(snapshots.next().await.expect("snapshot after toggle"));
    assert!(list.todos()[0].is_done);

    drop(snapshots);
    assert_eq!(store.subscriber_count(), 0);

    let reopened = MemoryTodoStore::open(&file).expect("reopen store");
    let mut again = reopened.observe();
    let persisted = again.next().await.expect("persisted snapshot");
    assert_eq!(persisted.len(), 1);
    assert!(persisted[0].is_done);
}

#[tokio::test]
async fn deleting_removes_the_row() {
    let store = Arc::new(MemoryTodoStore::in_memory());
    let mut list = TodoList::new(store.clone());
    let mut snapshots = list.observe();
    snapshots.next().await;

    let created = store.create("water plants".into()).await.expect("create");
    list.apply_snapshot(snapshots.next().await.expect("snapshot"));

    list.delete(created.id.as_ref())
        .expect("has id")
        .await
        .expect("delete");
    list.apply_snapshot(snapshots.next().await.expect("snapshot"));
    assert!(list.todos().is_empty());
}
