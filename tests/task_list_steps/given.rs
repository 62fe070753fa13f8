//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklist::task::{ports::KeyValueStorage, services::TASKS_STORAGE_KEY};

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskListWorld) {
    world.open_board();
}

#[given(r#"stored task data "{raw}""#)]
fn stored_task_data(world: &mut TaskListWorld, raw: String) -> Result<(), eyre::Report> {
    world
        .storage
        .set(TASKS_STORAGE_KEY, &raw)
        .wrap_err("seed stored task data")
}
