//! Given steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::TaskForm;

#[given(r#"a task titled "{title}" in the "{status}" column"#)]
fn task_in_column(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let form = TaskForm::new(title).with_status(status);
    let created = run_async(world.client.create(form)).wrap_err("create task for scenario")?;
    world.last_created_task = Some(created);
    Ok(())
}
