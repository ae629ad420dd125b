//! The in-memory store tracking every committed board mutation.

use super::helpers::{Harness, harness};
use rstest::rstest;
use taskboard::board::domain::{Priority, TaskDraft, TaskPatch};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_are_stored_in_order(mut harness: Harness) {
    harness.seed(harness.todo, &["A", "B", "C"]).await;
    harness
        .service
        .add_task_at(harness.todo, TaskDraft::new("first"), 0)
        .await
        .expect("persist should succeed");

    assert_eq!(harness.store.stored_count().expect("readable"), 4);
    harness.assert_store_matches_board();
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn direct_moves_are_mirrored(mut harness: Harness) {
    let ids = harness.seed(harness.todo, &["A", "B", "C"]).await;

    harness
        .service
        .move_task(ids[2], harness.todo, 0)
        .await
        .expect("persist should succeed");
    harness
        .service
        .move_task(ids[0], harness.done, 0)
        .await
        .expect("persist should succeed");

    harness.assert_store_matches_board();
    let stored = harness.store.find(ids[0]).expect("readable").expect("stored");
    assert_eq!(stored.column_id, harness.done);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updates_are_merged_into_the_store(mut harness: Harness) {
    let ids = harness.seed(harness.doing, &["A"]).await;

    harness
        .service
        .update_task(
            ids[0],
            TaskPatch::new()
                .with_priority(Priority::Urgent)
                .with_labels(["blocked"]),
        )
        .await
        .expect("persist should succeed");

    let stored = harness.store.find(ids[0]).expect("readable").expect("stored");
    assert_eq!(stored.priority, Priority::Urgent);
    assert!(stored.labels.contains("blocked"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletions_are_mirrored(mut harness: Harness) {
    let ids = harness.seed(harness.todo, &["A", "B"]).await;
    harness.seed(harness.done, &["Z"]).await;

    harness
        .service
        .delete_task(ids[0])
        .await
        .expect("persist should succeed");
    harness
        .service
        .delete_column(harness.done)
        .await
        .expect("persist should succeed");

    assert_eq!(harness.store.stored_count().expect("readable"), 1);
    harness.assert_store_matches_board();
}
