//! When steps for task tracking BDD scenarios.

use super::world::TaskWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasktrack::task::domain::TaskIdGenerator;

#[when("both tasks are added")]
fn add_pending_tasks(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    for task in &world.pending_tasks {
        world
            .service
            .add_task(task)
            .wrap_err("add scenario task")?;
    }
    Ok(())
}

#[when("the first task is marked done")]
fn mark_first_done(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let first = world
        .pending_tasks
        .first()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    world
        .service
        .mark_done(first.id())
        .wrap_err("mark first task done")?;
    Ok(())
}

#[when("an unknown task is marked done")]
fn mark_unknown_done(world: &mut TaskWorld) {
    let id = world.ids.next_id();
    world.last_result = Some(world.service.mark_done(id).map(|_| ()));
}

#[when("an unknown task is removed")]
fn remove_unknown(world: &mut TaskWorld) {
    let id = world.ids.next_id();
    world.last_result = Some(world.service.remove(id));
}
