//! Full drag gestures driven through the board service.

use super::helpers::{Harness, harness, harness_with, titles};
use rstest::rstest;
use taskboard::board::{
    config::{BoardConfig, FilteredDragPolicy},
    domain::{Point, Rect},
    drag::{DragOutcome, DragPhase, HoverTarget, Resolution},
};

const CARD: Rect = Rect::new(0, 0, 200, 40);
const UPPER: Point = Point::new(10, 5);
const LOWER: Point = Point::new(10, 35);

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_across_columns_before_a_card(mut harness: Harness) {
    let todo = harness.seed(harness.todo, &["A", "B"]).await;
    let doing = harness.seed(harness.doing, &["X", "Y"]).await;
    let (a, y) = (todo[0], doing[1]);

    assert!(harness.service.press(a, Point::new(0, 0)));
    assert!(!harness.service.pointer_move(Point::new(2, 2)));
    assert!(harness.service.pointer_move(Point::new(60, 0)));
    harness.service.hover(HoverTarget::column(harness.done));
    let resolution = harness.service.hover(HoverTarget::task_at(y, CARD, UPPER));
    assert!(matches!(resolution, Some(Resolution::Move(_))));

    let preview = harness.service.visible_board();
    assert_eq!(titles(&preview, harness.doing), vec!["X", "A", "Y"]);
    assert_eq!(titles(harness.service.board(), harness.doing), vec!["X", "Y"]);

    let outcome = harness.service.release().await.expect("persist should succeed");

    assert!(matches!(outcome, DragOutcome::Dropped(Some(_))));
    assert_eq!(titles(harness.service.board(), harness.todo), vec!["B"]);
    assert_eq!(titles(harness.service.board(), harness.doing), vec!["X", "A", "Y"]);
    assert_eq!(harness.service.drag_phase(), DragPhase::Idle);
    harness.assert_store_matches_board();
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_within_column_after_a_card(mut harness: Harness) {
    let ids = harness.seed(harness.todo, &["A", "B", "C", "D"]).await;

    harness.service.press(ids[0], Point::new(0, 0));
    harness.service.pointer_move(Point::new(0, 90));
    harness.service.hover(HoverTarget::task_at(ids[2], CARD, LOWER));
    harness.service.release().await.expect("persist should succeed");

    assert_eq!(titles(harness.service.board(), harness.todo), vec!["B", "C", "A", "D"]);
    harness.assert_store_matches_board();
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lost_pointer_capture_cancels(mut harness: Harness) {
    let ids = harness.seed(harness.todo, &["A", "B"]).await;
    let before = harness.service.board().clone();

    harness.service.press(ids[1], Point::new(0, 0));
    harness.service.pointer_move(Point::new(0, 90));
    harness.service.hover(HoverTarget::column(harness.doing));
    assert_eq!(harness.service.cancel(), DragOutcome::Cancelled);

    assert_eq!(harness.service.board(), &before);
    assert_eq!(harness.service.visible_board(), before);
    harness.assert_store_matches_board();
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn release_over_nothing_cancels(mut harness: Harness) {
    let ids = harness.seed(harness.todo, &["A"]).await;
    let before = harness.service.board().clone();

    harness.service.press(ids[0], Point::new(0, 0));
    harness.service.pointer_move(Point::new(0, 90));
    harness.service.hover(HoverTarget::column(harness.done));
    harness.service.hover(HoverTarget::Nothing);
    let outcome = harness.service.release().await.expect("nothing to persist");

    assert_eq!(outcome, DragOutcome::Cancelled);
    assert_eq!(harness.service.board(), &before);
}

#[tokio::test(flavor = "multi_thread")]
async fn disabled_policy_requires_clearing_the_query() {
    let mut harness =
        harness_with(BoardConfig::default().with_filtered_drag(FilteredDragPolicy::Disabled));
    let ids = harness.seed(harness.todo, &["Alpha", "Beta"]).await;

    harness.service.set_query("alp");
    assert!(!harness.service.press(ids[0], Point::new(0, 0)));
    assert_eq!(harness.service.drag_phase(), DragPhase::Idle);

    harness.service.set_query("");
    assert!(harness.service.press(ids[0], Point::new(0, 0)));
}

#[tokio::test(flavor = "multi_thread")]
async fn large_activation_distance_delays_drag() {
    let mut harness = harness_with(BoardConfig::default().with_activation_distance(50));
    let ids = harness.seed(harness.todo, &["A"]).await;

    harness.service.press(ids[0], Point::new(0, 0));

    assert!(!harness.service.pointer_move(Point::new(30, 40)));
    assert!(harness.service.pointer_move(Point::new(31, 40)));
}
