//! Fan-out execution of independent precondition checks.
//!
//! Every check is spawned as its own task and joined before any result is
//! read; a failing check never aborts the others, so the caller always gets
//! the complete list of failure reasons in one round trip.

use futures::future::BoxFuture;
use tokio::task::JoinSet;

/// One independent unit of validation work producing a typed outcome.
pub struct Check<T> {
    pub name: &'static str,
    pub task: BoxFuture<'static, Result<T, String>>,
}

impl<T> Check<T> {
    pub fn new(name: &'static str, task: BoxFuture<'static, Result<T, String>>) -> Self {
        Self { name, task }
    }
}

/// Runs all checks concurrently and joins them all.
///
/// Returns `(all_valid, failure_messages, outcomes)`. Outcomes carry one
/// entry per successful check; each check owns a disjoint slot in the caller,
/// so the collection order does not matter.
pub async fn run_checks<T: Send + 'static>(
    checks: Vec<Check<T>>,
) -> (bool, Vec<String>, Vec<T>) {
    let mut set = JoinSet::new();
    for check in checks {
        let Check { name, task } = check;
        set.spawn(async move { (name, task.await) });
    }

    let mut failures = Vec::new();
    let mut outcomes = Vec::new();

    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((_, Ok(outcome))) => outcomes.push(outcome),
            Ok((name, Err(message))) => {
                tracing::debug!(check = name, %message, "validation check failed");
                failures.push(message);
            }
            Err(e) => failures.push(format!("validation task failed: {e}")),
        }
    }

    (failures.is_empty(), failures, outcomes)
}
