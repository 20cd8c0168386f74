use super::*;
use crate::ClusterStore;

#[tokio::test]
async fn replace_drops_previous_subgroups() {
    let storage = create_test_storage();
    storage.replace_clusters(&[subgroup("cluster_0_0", &["a", "b"])]).await.unwrap();
    let next = vec![subgroup("cluster_0_0", &["c", "d"]), subgroup("cluster_1_1", &["e", "f"])];
    storage.replace_clusters(&next).await.unwrap();
    assert_eq!(storage.list_clusters().await.unwrap(), next);

    storage.replace_clusters(&[]).await.unwrap();
    assert!(storage.list_clusters().await.unwrap().is_empty());
}
