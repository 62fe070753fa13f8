//! When steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::when;
use tasklist::task::domain::TaskId;

#[when(r#"the user adds a task titled "{title}""#)]
fn add_task(world: &mut TaskListWorld, title: String) -> Result<(), eyre::Report> {
    let result = world.board_mut()?.add(&title);
    world.last_error_code = result.err().map(|err| err.code());
    Ok(())
}

#[when(r#"the user toggles the task titled "{title}""#)]
fn toggle_task(world: &mut TaskListWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(world.board_mut()?.toggle(task.id()), "toggle matched no task");
    Ok(())
}

#[when(r#"the user deletes the task titled "{title}""#)]
fn delete_task(world: &mut TaskListWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(world.board_mut()?.delete(task.id()), "delete matched no task");
    Ok(())
}

#[when(r#"the user renames task "{id}" to "{title}""#)]
fn rename_task(world: &mut TaskListWorld, id: String, title: String) -> Result<(), eyre::Report> {
    let result = world.board_mut()?.rename(&TaskId::new(id), &title);
    world.last_error_code = result.err().map(|err| err.code());
    Ok(())
}

#[when("the user clears completed tasks")]
fn clear_completed(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    let cleared = world.board_mut()?.clear_completed();
    world.last_cleared = Some(cleared);
    Ok(())
}

#[when("the task list is opened")]
fn open_task_list(world: &mut TaskListWorld) {
    world.open_board();
}

#[when("the task list is reopened")]
fn reopen_task_list(world: &mut TaskListWorld) {
    world.open_board();
}
