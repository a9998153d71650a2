//! Repository contract tests for [`InMemoryTaskRepository`].

use std::sync::Arc;
use std::thread;

use super::helpers::{ids, pending_task, repo};
use rstest::rstest;
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{SequentialTaskIdGenerator, TaskIdGenerator},
    ports::TaskRepository,
};

#[rstest]
fn save_then_find_by_id_returns_task(
    repo: Arc<InMemoryTaskRepository>,
    ids: SequentialTaskIdGenerator,
) {
    let task = pending_task("Write report", &ids);

    repo.save(&task).expect("save should succeed");
    let found = repo.find_by_id(task.id()).expect("lookup should succeed");

    assert_eq!(found, Some(task));
}

#[rstest]
fn find_by_id_returns_none_for_unknown_task(
    repo: Arc<InMemoryTaskRepository>,
    ids: SequentialTaskIdGenerator,
) {
    let found = repo.find_by_id(ids.next_id()).expect("lookup should succeed");

    assert!(found.is_none());
}

#[rstest]
fn save_replaces_task_with_same_id(
    repo: Arc<InMemoryTaskRepository>,
    ids: SequentialTaskIdGenerator,
) {
    let mut task = pending_task("Draft", &ids);
    repo.save(&task).expect("save should succeed");

    task.mark_done();
    repo.save(&task).expect("replace should succeed");

    let all = repo.find_all().expect("listing should succeed");
    assert_eq!(all, vec![task]);
    assert_eq!(repo.len().expect("len should succeed"), 1);
}

#[rstest]
fn find_all_keeps_first_insertion_order(
    repo: Arc<InMemoryTaskRepository>,
    ids: SequentialTaskIdGenerator,
) {
    let mut first = pending_task("T1", &ids);
    let second = pending_task("T2", &ids);
    let third = pending_task("T3", &ids);
    for task in [&first, &second, &third] {
        repo.save(task).expect("save should succeed");
    }

    first.mark_done();
    repo.save(&first).expect("replace should succeed");

    let titles: Vec<String> = repo
        .find_all()
        .expect("listing should succeed")
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    assert_eq!(titles, ["T1", "T2", "T3"]);
}

#[rstest]
fn delete_removes_task_and_is_idempotent(
    repo: Arc<InMemoryTaskRepository>,
    ids: SequentialTaskIdGenerator,
) {
    let task = pending_task("Disposable", &ids);
    repo.save(&task).expect("save should succeed");

    repo.delete(task.id()).expect("delete should succeed");
    repo.delete(task.id()).expect("repeated delete should succeed");

    assert!(repo.find_by_id(task.id()).expect("lookup").is_none());
    assert!(repo.is_empty().expect("is_empty should succeed"));
}

#[rstest]
fn deleted_task_can_be_saved_again_at_the_end(
    repo: Arc<InMemoryTaskRepository>,
    ids: SequentialTaskIdGenerator,
) {
    let first = pending_task("First", &ids);
    let second = pending_task("Second", &ids);
    repo.save(&first).expect("save should succeed");
    repo.save(&second).expect("save should succeed");

    repo.delete(first.id()).expect("delete should succeed");
    repo.save(&first).expect("save should succeed");

    let all = repo.find_all().expect("listing should succeed");
    assert_eq!(all, vec![second, first]);
}

#[rstest]
fn clones_share_state_across_threads(repo: Arc<InMemoryTaskRepository>) {
    let ids = Arc::new(SequentialTaskIdGenerator::new());
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let shared_repo = Arc::clone(&repo);
            let shared_ids = Arc::clone(&ids);
            thread::spawn(move || {
                let task = pending_task(&format!("Worker {worker}"), &*shared_ids);
                shared_repo.save(&task).expect("save should succeed");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread should not panic");
    }

    assert_eq!(repo.len().expect("len should succeed"), 4);
}
