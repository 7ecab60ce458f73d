//! Task id allocation
//!
//! Ids are Unix-millisecond timestamps, bumped past the snapshot's current
//! maximum so that two adds within the same millisecond never collide.

use chrono::Utc;

use super::task::{Task, TaskId};

/// Allocate an id not present in `snapshot`
pub fn next_id(snapshot: &[Task]) -> TaskId {
    let now = Utc::now().timestamp_millis();
    let max = snapshot.iter().map(|t| t.id).max().unwrap_or(0);
    if now > max { now } else { max + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_unique() {
        let mut tasks = Vec::new();
        for _ in 0..10 {
            let id = next_id(&tasks);
            assert!(tasks.iter().all(|t: &Task| t.id != id));
            tasks.push(Task::new(id, "x"));
        }
    }

    #[test]
    fn test_next_id_bumps_past_existing_max() {
        // An id far in the future forces the bump path
        let far_future = Utc::now().timestamp_millis() + 1_000_000_000;
        let tasks = vec![Task::new(far_future, "x")];
        assert_eq!(next_id(&tasks), far_future + 1);
    }

    #[test]
    fn test_next_id_on_empty_snapshot_is_positive() {
        assert!(next_id(&[]) > 0);
    }
}
