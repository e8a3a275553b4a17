use std::{
    path::PathBuf,
    sync::mpsc,
    thread,
};

use super::TaskResult;
use crate::core::{
    models::LoadOrigin,
    source::{
        fetch_default_deck,
        read_deck_file,
        DefaultDeckSource,
    },
};

/// Runs deck I/O off the UI thread. Results are collected with `poll_results`.
///
/// File reads finish in any order. A read result older than one already
/// delivered, or older than the last `supersede_reads`, is dropped so a slow
/// read can never replace a deck the user opened after it.
pub struct TaskManager {
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    next_read: u64,
    newest_read: u64,
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();

        Self { receiver, sender, next_read: 1, newest_read: 0 }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            if self.is_current(&result) {
                results.push(result);
            }
        }

        results
    }

    /// Marks every read issued so far as stale. Used when a deck arrives by
    /// another route, such as a paste.
    pub fn supersede_reads(&mut self) {
        self.newest_read = self.next_read;
    }

    fn is_current(&mut self, result: &TaskResult) -> bool {
        let TaskResult::DeckFile { seq, path, .. } = result else {
            return true;
        };

        if *seq < self.newest_read {
            tracing::debug!("Dropping stale read of {} (#{})", path.display(), seq);
            return false;
        }

        self.newest_read = *seq;
        true
    }

    pub fn load_default_deck(&self, source: DefaultDeckSource) {
        let sender = self.sender.clone();

        thread::spawn(move || {
            tracing::debug!("Fetching default deck from {}", source.describe());
            let result = fetch_default_deck(&source);
            let _ = sender.send(TaskResult::DefaultDeck(result));
        });
    }

    pub fn read_deck_file(&mut self, path: PathBuf, origin: LoadOrigin) {
        let sender = self.sender.clone();
        let seq = self.next_read;
        self.next_read += 1;

        thread::spawn(move || {
            let result = read_deck_file(&path);
            let _ = sender.send(TaskResult::DeckFile { seq, path, origin, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        time::{
            Duration,
            Instant,
        },
    };

    use super::*;

    fn wait_for_result(manager: &mut TaskManager) -> TaskResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = manager.poll_results().into_iter().next() {
                return result;
            }
            assert!(Instant::now() < deadline, "task did not finish");
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_read_deck_file_reports_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        fs::write(&path, "[]").unwrap();

        let mut manager = TaskManager::new();
        manager.read_deck_file(path.clone(), LoadOrigin::Upload);

        match wait_for_result(&mut manager) {
            TaskResult::DeckFile { path: got, origin, result, .. } => {
                assert_eq!(got, path);
                assert_eq!(origin, LoadOrigin::Upload);
                assert_eq!(result.unwrap(), "[]");
            }
            other => panic!("unexpected task result: {}", other.task_type()),
        }
    }

    fn deck_file(seq: u64, name: &str) -> TaskResult {
        TaskResult::DeckFile {
            seq,
            path: PathBuf::from(name),
            origin: LoadOrigin::Upload,
            result: Ok("[]".to_string()),
        }
    }

    fn delivered_paths(manager: &mut TaskManager) -> Vec<PathBuf> {
        manager
            .poll_results()
            .into_iter()
            .filter_map(|result| match result {
                TaskResult::DeckFile { path, .. } => Some(path),
                TaskResult::DefaultDeck(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_slower_older_read_is_dropped() {
        let mut manager = TaskManager::new();

        // "big.json" was requested first but finishes after "small.json".
        manager.sender.send(deck_file(2, "small.json")).unwrap();
        manager.sender.send(deck_file(1, "big.json")).unwrap();

        assert_eq!(delivered_paths(&mut manager), vec![PathBuf::from("small.json")]);
    }

    #[test]
    fn test_reads_in_request_order_are_all_delivered() {
        let mut manager = TaskManager::new();
        manager.sender.send(deck_file(1, "a.json")).unwrap();
        manager.sender.send(deck_file(2, "b.json")).unwrap();

        assert_eq!(
            delivered_paths(&mut manager),
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
    }

    #[test]
    fn test_supersede_drops_pending_reads() {
        let mut manager = TaskManager::new();
        // Two reads already issued and still in flight.
        manager.next_read = 3;
        manager.supersede_reads();

        manager.sender.send(deck_file(2, "pending.json")).unwrap();
        manager.sender.send(deck_file(3, "after_paste.json")).unwrap();

        assert_eq!(delivered_paths(&mut manager), vec![PathBuf::from("after_paste.json")]);
    }

    #[test]
    fn test_default_deck_is_never_sequenced_out() {
        let mut manager = TaskManager::new();
        manager.sender.send(deck_file(5, "newer.json")).unwrap();
        manager.sender.send(TaskResult::DefaultDeck(Ok("[]".to_string()))).unwrap();

        let results = manager.poll_results();
        assert_eq!(results.len(), 2);
        assert!(matches!(results[1], TaskResult::DefaultDeck(Ok(_))));
    }

    #[test]
    fn test_missing_default_deck_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = TaskManager::new();
        manager.load_default_deck(DefaultDeckSource::File(dir.path().join("flashcards.json")));

        match wait_for_result(&mut manager) {
            TaskResult::DefaultDeck(result) => assert!(result.is_err()),
            other => panic!("unexpected task result: {}", other.task_type()),
        }
    }
}
