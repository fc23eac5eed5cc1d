//! Then steps for board move BDD scenarios.

use super::world::{BoardWorld, parse_status};
use rstest_bdd_macros::then;
use taskboard::{
    board::arrange,
    task::domain::{PriorityFilter, SortKey},
};

#[then("the gateway has received {count:u64} status changes")]
fn gateway_status_changes(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let received = world.client.gateway().status_changes();
    if received != count {
        return Err(eyre::eyre!(
            "expected {count} status changes, gateway received {received}"
        ));
    }
    Ok(())
}

#[then(r#"the task is shown in the "{status}" column"#)]
fn task_shown_in_column(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let column = parse_status(&status)?;
    let task_id = world.current_task()?.id();
    let today = chrono::Utc::now().date_naive();
    let view = world
        .client
        .view(PriorityFilter::All, SortKey::Created, today);

    if !view.columns().column(column).task_ids().contains(&task_id) {
        return Err(eyre::eyre!("task {task_id} is not in the {column} column"));
    }
    Ok(())
}

#[then("{count:u64} tasks on the board are flagged as duplicates")]
fn duplicates_flagged(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let flagged = arrange(world.client.tasks(), PriorityFilter::All, SortKey::Created)
        .iter()
        .filter(|entry| entry.is_duplicate())
        .count();
    if u64::try_from(flagged)? != count {
        return Err(eyre::eyre!("expected {count} duplicates, found {flagged}"));
    }
    Ok(())
}
