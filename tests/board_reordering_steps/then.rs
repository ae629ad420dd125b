//! Then steps for board reordering BDD scenarios.

use super::world::{BoardWorld, split_list, titles};
use rstest_bdd_macros::then;

#[then(r#"column "{column}" holds "{expected}""#)]
fn column_holds(world: &BoardWorld, column: String, expected: String) -> Result<(), eyre::Report> {
    let column_id = world.column(&column)?;
    let actual = titles(world.service.board(), column_id);
    let wanted = split_list(&expected);
    eyre::ensure!(
        actual == wanted,
        "column '{column}' holds {actual:?}, expected {wanted:?}"
    );
    Ok(())
}

#[then(r#"the filtered column "{column}" shows "{expected}""#)]
fn filtered_column_shows(
    world: &BoardWorld,
    column: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let column_id = world.column(&column)?;
    let actual = titles(&world.service.visible_board(), column_id);
    let wanted = split_list(&expected);
    eyre::ensure!(
        actual == wanted,
        "filtered column '{column}' shows {actual:?}, expected {wanted:?}"
    );
    Ok(())
}

#[then(r#"task "{task}" belongs to "{column}""#)]
fn task_belongs_to(world: &BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?;
    let column_id = world.column(&column)?;
    let owner = world
        .service
        .board()
        .task(task_id)
        .map(|found| found.column_id());
    eyre::ensure!(
        owner == Some(column_id),
        "task '{task}' is owned by {owner:?}, expected {column_id}"
    );
    Ok(())
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let snapshot = world
        .snapshot
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board snapshot"))?;
    eyre::ensure!(
        world.service.board() == snapshot,
        "board changed during the scenario"
    );
    Ok(())
}

#[then(r#"the store places "{task}" at position {position:usize}"#)]
fn store_places_task(world: &BoardWorld, task: String, position: usize) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?;
    let stored = world
        .store
        .position(task_id)
        .map_err(|err| eyre::eyre!("store read failed: {err}"))?;
    eyre::ensure!(
        stored == Some(position),
        "store places '{task}' at {stored:?}, expected {position}"
    );
    Ok(())
}

#[then(r#"column "{column}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let column_id = world.column(&column)?;
    let actual = titles(world.service.board(), column_id);
    eyre::ensure!(actual.is_empty(), "column '{column}' holds {actual:?}");
    Ok(())
}
