//! Fan-out helpers: run every task to completion, then decide what to keep.

use futures::future::join_all;
use std::fmt::Display;
use std::future::Future;

/// Drives every future to completion and returns each task's outcome, in
/// input order. No task is abandoned when another one fails.
pub async fn settle_all<I, F, T, E>(tasks: I) -> Vec<Result<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(tasks).await
}

/// Keeps the successful outcomes. Failures are logged and dropped.
pub fn keep_successes<T, E: Display>(outcomes: Vec<Result<T, E>>) -> Vec<T> {
    let total = outcomes.len();
    let successes: Vec<T> = outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("dropping failed task: {}", e);
                None
            }
        })
        .collect();

    if successes.len() < total {
        tracing::debug!("{} of {} tasks succeeded", successes.len(), total);
    }
    successes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_keep_successes_preserves_order() {
        let outcomes: Vec<Result<i32, String>> =
            vec![Ok(1), Err("boom".to_string()), Ok(3), Err("bang".to_string())];
        assert_eq!(keep_successes(outcomes), vec![1, 3]);
    }

    #[test]
    fn test_keep_successes_all_failed_is_empty() {
        let outcomes: Vec<Result<i32, String>> = vec![Err("a".into()), Err("b".into())];
        assert!(keep_successes(outcomes).is_empty());
    }

    #[test]
    fn test_settle_all_waits_for_every_task() {
        let outcomes = tokio_test::block_on(settle_all((0..4).map(|i| async move {
            if i % 2 == 0 {
                Ok(i)
            } else {
                Err(format!("task {} failed", i))
            }
        })));

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0], Ok(0));
        assert_eq!(outcomes[1], Err("task 1 failed".to_string()));
        assert_eq!(outcomes[2], Ok(2));
    }

    #[tokio::test]
    async fn test_settle_all_runs_tasks_concurrently() {
        let started = std::time::Instant::now();
        let outcomes = settle_all((0..5).map(|i| async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, String>(i)
        }))
        .await;

        assert_eq!(keep_successes(outcomes), vec![0, 1, 2, 3, 4]);
        // sequential execution would take a full second
        assert!(started.elapsed() < Duration::from_millis(900));
    }
}
