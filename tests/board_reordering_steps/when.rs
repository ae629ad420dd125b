//! When steps for board reordering BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::{
    domain::{Point, Rect, TaskId},
    drag::HoverTarget,
};

const PRESS_AT: Point = Point::new(20, 20);
const DRAGGED_TO: Point = Point::new(20, 80);

fn start_drag(world: &mut BoardWorld, task: &str) -> Result<(), eyre::Report> {
    let task_id = world.task(task)?;
    world.take_snapshot();
    eyre::ensure!(world.service.press(task_id, PRESS_AT), "press on '{task}' ignored");
    eyre::ensure!(world.service.pointer_move(DRAGGED_TO), "drag of '{task}' did not activate");
    Ok(())
}

#[when(r#"task "{task}" is moved to "{column}" at index {index:usize}"#)]
fn move_task(
    world: &mut BoardWorld,
    task: String,
    column: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?;
    let column_id = world.column(&column)?;
    world.take_snapshot();
    run_async(world.service.move_task(task_id, column_id, index)).wrap_err("move task")?;
    Ok(())
}

#[when(r#"an unknown task is moved to "{column}" at index {index:usize}"#)]
fn move_unknown_task(world: &mut BoardWorld, column: String, index: usize) -> Result<(), eyre::Report> {
    let column_id = world.column(&column)?;
    world.take_snapshot();
    let moved = run_async(world.service.move_task(TaskId::new(), column_id, index))
        .wrap_err("move unknown task")?;
    eyre::ensure!(moved.is_none(), "unknown task unexpectedly moved");
    Ok(())
}

#[when(r#"the board is filtered by "{query}""#)]
fn filter_board(world: &mut BoardWorld, query: String) {
    world.take_snapshot();
    world.service.set_query(query);
}

#[when(r#"task "{task}" is dragged over the empty area of "{column}""#)]
fn drag_over_column(world: &mut BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    let column_id = world.column(&column)?;
    start_drag(world, &task)?;
    world
        .service
        .hover(HoverTarget::column(column_id))
        .ok_or_else(|| eyre::eyre!("hover ignored"))?;
    Ok(())
}

#[when(r#"task "{task}" is dragged over the lower half of "{target}""#)]
fn drag_over_lower_half(world: &mut BoardWorld, task: String, target: String) -> Result<(), eyre::Report> {
    let target_id = world.task(&target)?;
    start_drag(world, &task)?;
    let card = Rect::new(0, 100, 240, 60);
    world
        .service
        .hover(HoverTarget::task_at(target_id, card, Point::new(40, 145)))
        .ok_or_else(|| eyre::eyre!("hover ignored"))?;
    Ok(())
}

#[when("the drag is cancelled")]
fn cancel_drag(world: &mut BoardWorld) {
    world.service.cancel();
}

#[when("the drag is released")]
fn release_drag(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.service.release()).wrap_err("release drag")?;
    Ok(())
}
