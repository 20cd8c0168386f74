use super::*;
use crate::{ClusterStore, IdeaStore, StorageBackend};

#[tokio::test]
async fn upsert_then_get_roundtrips_fields() {
    let storage = create_test_storage();
    let idea = create_test_idea("1", "Печь");
    storage.upsert_ideas(std::slice::from_ref(&idea)).await.unwrap();

    let stored = storage.get_idea("1").await.unwrap().unwrap();
    assert_eq!(stored, idea);
    assert!(storage.idea_exists("1").await.unwrap());
    assert!(!storage.idea_exists("2").await.unwrap());
}

#[tokio::test]
async fn upsert_replaces_in_place_and_keeps_order() {
    let storage = create_test_storage();
    let ideas = vec![create_test_idea("a", "A"), create_test_idea("b", "B"), create_test_idea("c", "C")];
    storage.upsert_ideas(&ideas).await.unwrap();

    let mut replaced = create_test_idea("a", "A2");
    replaced.embedding = None;
    storage.upsert_ideas(&[replaced]).await.unwrap();

    let listed = storage.list_ideas().await.unwrap();
    let ids: Vec<&str> = listed.iter().map(|i| i.idea_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(listed[0].title, "A2");
    assert!(listed[0].embedding.is_none());
    assert_eq!(storage.count_ideas().await.unwrap(), 3);
}

#[tokio::test]
async fn duplicate_ids_in_one_batch_last_wins() {
    let storage = create_test_storage();
    let batch = vec![create_test_idea("x", "first"), create_test_idea("x", "second")];
    storage.upsert_ideas(&batch).await.unwrap();
    assert_eq!(storage.count_ideas().await.unwrap(), 1);
    assert_eq!(storage.get_idea("x").await.unwrap().unwrap().title, "second");
}

#[tokio::test]
async fn delete_reports_existence() {
    let storage = create_test_storage();
    storage.upsert_ideas(&[create_test_idea("1", "T")]).await.unwrap();
    assert_eq!(storage.delete_idea_cascade("1").await.unwrap(), Some(0));
    assert_eq!(storage.delete_idea_cascade("1").await.unwrap(), None);
    assert!(storage.get_idea("1").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_removes_idea_and_rewrites_subgroup() {
    let storage = create_test_storage();
    let ideas = vec![create_test_idea("a", "A"), create_test_idea("b", "B"), create_test_idea("c", "C")];
    storage.upsert_ideas(&ideas).await.unwrap();
    storage
        .replace_clusters(&[subgroup("cluster_0_0", &["a", "b"]), subgroup("cluster_1_1", &["c", "d"])])
        .await
        .unwrap();

    assert_eq!(storage.delete_idea_cascade("a").await.unwrap(), Some(1));
    assert!(!storage.idea_exists("a").await.unwrap());
    assert_eq!(storage.count_ideas().await.unwrap(), 2);
    assert_eq!(
        storage.list_clusters().await.unwrap(),
        vec![subgroup("cluster_0_0", &["b"]), subgroup("cluster_1_1", &["c", "d"])]
    );
}

#[tokio::test]
async fn delete_of_last_member_drops_subgroup() {
    let backend = StorageBackend::new_memory();
    backend.upsert_ideas(&[create_test_idea("a", "A"), create_test_idea("c", "C")]).await.unwrap();
    backend
        .replace_clusters(&[subgroup("cluster_0_0", &["a"]), subgroup("cluster_1_1", &["c", "a"])])
        .await
        .unwrap();

    assert_eq!(backend.delete_idea_cascade("a").await.unwrap(), Some(2));
    assert_eq!(backend.list_clusters().await.unwrap(), vec![subgroup("cluster_1_1", &["c"])]);
    assert_eq!(backend.list_ideas().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_of_unknown_idea_changes_nothing() {
    let storage = create_test_storage();
    storage.upsert_ideas(&[create_test_idea("a", "A")]).await.unwrap();
    let stored = vec![subgroup("cluster_0_0", &["a", "zzz"])];
    storage.replace_clusters(&stored).await.unwrap();

    assert_eq!(storage.delete_idea_cascade("zzz").await.unwrap(), None);
    assert_eq!(storage.list_clusters().await.unwrap(), stored);
    assert_eq!(storage.count_ideas().await.unwrap(), 1);
}

#[tokio::test]
async fn backend_dispatches_to_memory() {
    let backend = StorageBackend::new_memory();
    assert_eq!(backend.kind(), "memory");
    backend.upsert_ideas(&[create_test_idea("1", "T")]).await.unwrap();
    assert_eq!(backend.list_ideas().await.unwrap().len(), 1);
}
