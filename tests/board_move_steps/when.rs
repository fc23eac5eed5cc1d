//! When steps for board move BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::{DragOutcome, DropLocation};

fn drag(world: &mut BoardWorld, destination: Option<DropLocation>) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    let outcome = DragOutcome {
        task_id: task.id(),
        source: DropLocation::new(task.status(), 0),
        destination,
    };
    run_async(world.client.apply_drag(&outcome)).wrap_err("apply drag outcome")?;
    Ok(())
}

#[when(r#"the task is dragged to the "{status}" column at position {index:u64}"#)]
fn drag_to_column(
    world: &mut BoardWorld,
    status: String,
    index: u64,
) -> Result<(), eyre::Report> {
    let column = parse_status(&status)?;
    let position = usize::try_from(index).wrap_err("drop position out of range")?;
    drag(world, Some(DropLocation::new(column, position)))
}

#[when("the drag is cancelled")]
fn drag_cancelled(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    drag(world, None)
}
