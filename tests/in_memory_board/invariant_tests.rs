//! Board invariants over long sequences of operations.

use super::helpers::{Harness, harness};
use rstest::rstest;
use std::collections::BTreeSet;
use taskboard::board::domain::{Board, ColumnId, TaskId};

fn task_set(board: &Board) -> BTreeSet<TaskId> {
    board
        .columns()
        .iter()
        .flat_map(|column| column.task_ids())
        .collect()
}

fn assert_owners(board: &Board) {
    for column in board.columns() {
        assert!(column.tasks().iter().all(|task| task.column_id() == column.id()));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scripted_moves_keep_every_task_exactly_once(mut harness: Harness) {
    let mut ids = harness.seed(harness.todo, &["A", "B", "C", "D"]).await;
    ids.extend(harness.seed(harness.doing, &["E", "F"]).await);
    let columns: [ColumnId; 3] = [harness.todo, harness.doing, harness.done];
    let expected = task_set(harness.service.board());

    // Differing cycle lengths vary the pairings.
    let script = ids
        .iter()
        .cycle()
        .zip(columns.iter().cycle())
        .zip((0..8_usize).cycle())
        .take(200);
    for ((&task_id, &column_id), index) in script {
        let moved = harness
            .service
            .move_task(task_id, column_id, index)
            .await
            .expect("persist should succeed");

        if moved.is_some() {
            let owner = harness.service.board().task(task_id).map(|task| task.column_id());
            assert_eq!(owner, Some(column_id));
        }
        assert_eq!(task_set(harness.service.board()), expected);
        assert_owners(harness.service.board());
    }

    harness.assert_store_matches_board();
}
