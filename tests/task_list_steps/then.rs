//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;

#[then(r#"the task titles are "{titles}""#)]
fn task_titles_are(world: &TaskListWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let actual: Vec<&str> = world.board()?.tasks().iter().map(|task| task.title()).collect();

    if actual != expected {
        return Err(eyre::eyre!("expected titles {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the task titled "{title}" is completed"#)]
fn task_is_completed(world: &TaskListWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(task.is_completed(), "task '{title}' is not completed");
    Ok(())
}

#[then(r#"the task titled "{title}" is active"#)]
fn task_is_active(world: &TaskListWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(!task.is_completed(), "task '{title}' is completed");
    Ok(())
}

#[then("nothing was cleared")]
fn nothing_was_cleared(world: &TaskListWorld) -> Result<(), eyre::Report> {
    match world.last_cleared {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected nothing cleared, got {other:?}")),
    }
}

#[then(r#"the last action fails with code "{code}""#)]
fn last_action_fails_with(world: &TaskListWorld, code: String) -> Result<(), eyre::Report> {
    if world.last_error_code != Some(code.as_str()) {
        return Err(eyre::eyre!(
            "expected error code {code}, got {:?}",
            world.last_error_code
        ));
    }
    Ok(())
}

#[then("the task list is empty")]
fn task_list_is_empty(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let count = world.board()?.tasks().len();
    eyre::ensure!(count == 0, "expected an empty task list, found {count} tasks");
    Ok(())
}
