//! In-memory forum store.
//!
//! Layout:
//!
//! ```text
//! RwLock<BTreeMap<QuestionId, Arc<QuestionEntry>>>   registry, held only for lookup/insert
//!                                    │
//!                                    └─ QuestionEntry { author, message, RwLock<Vec<Reply>> }
//!                                                                         per-question append lock
//! AtomicU64 last_question_id   AtomicU64 last_reply_id                    independent sequences
//! ```
//!
//! Question ids are allocated while the registry write lock is held, so a
//! reader never sees an id that has no entry yet. Reply ids are allocated
//! while the owning question's reply lock is held, so each reply list is in
//! ascending id order and a lookup miss never consumes a reply id. Appends
//! to different questions only share the registry read lock.

use super::error::StoreError;
use forum_domain::{ForumRepository, Question, QuestionId, Reply, ReplyId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

const REGISTRY_LOCK: &str = "question registry";
const REPLIES_LOCK: &str = "reply list";

/// Live state of one question. Author and message never change after
/// creation; only the reply list grows.
#[derive(Debug)]
struct QuestionEntry {
    id: QuestionId,
    author: String,
    message: String,
    replies: RwLock<Vec<Reply>>,
}

impl QuestionEntry {
    fn new(id: QuestionId, author: String, message: String) -> Self {
        Self {
            id,
            author,
            message,
            replies: RwLock::new(Vec::new()),
        }
    }

    /// Copy the question with every reply appended so far.
    fn snapshot(&self) -> Result<Question, StoreError> {
        let replies = self
            .replies
            .read()
            .map_err(|_| StoreError::LockPoisoned(REPLIES_LOCK))?;
        Ok(Question {
            id: self.id,
            author: self.author.clone(),
            message: self.message.clone(),
            replies: replies.clone(),
        })
    }

    fn reply_count(&self) -> Result<usize, StoreError> {
        self.replies
            .read()
            .map(|replies| replies.len())
            .map_err(|_| StoreError::LockPoisoned(REPLIES_LOCK))
    }
}

/// Counters describing the store contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub questions: usize,
    pub replies: usize,
    /// Highest question id handed out so far (0 before the first question)
    pub last_question_id: u64,
    /// Highest reply id handed out so far (0 before the first reply)
    pub last_reply_id: u64,
}

/// Concurrency-safe, process-lifetime forum store.
///
/// Share it between callers with `Arc<InMemoryForumStore>`.
#[derive(Debug, Default)]
pub struct InMemoryForumStore {
    questions: RwLock<BTreeMap<QuestionId, Arc<QuestionEntry>>>,
    last_question_id: AtomicU64,
    last_reply_id: AtomicU64,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the live entry; the registry lock is released on return.
    fn entry(&self, id: QuestionId) -> Result<Option<Arc<QuestionEntry>>, StoreError> {
        let questions = self
            .questions
            .read()
            .map_err(|_| StoreError::LockPoisoned(REGISTRY_LOCK))?;
        Ok(questions.get(&id).cloned())
    }

    /// All live entries in id order; the registry lock is released on return.
    fn entries(&self) -> Result<Vec<Arc<QuestionEntry>>, StoreError> {
        let questions = self
            .questions
            .read()
            .map_err(|_| StoreError::LockPoisoned(REGISTRY_LOCK))?;
        Ok(questions.values().cloned().collect())
    }

    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        let entries = self.entries()?;
        let mut replies = 0;
        for entry in &entries {
            replies += entry.reply_count()?;
        }
        Ok(StoreStats {
            questions: entries.len(),
            replies,
            last_question_id: self.last_question_id.load(Ordering::Relaxed),
            last_reply_id: self.last_reply_id.load(Ordering::Relaxed),
        })
    }
}

impl ForumRepository for InMemoryForumStore {
    type Error = StoreError;

    fn create_question(&self, author: String, message: String) -> Result<Question, Self::Error> {
        let mut questions = self
            .questions
            .write()
            .map_err(|_| StoreError::LockPoisoned(REGISTRY_LOCK))?;

        let id = QuestionId::new(self.last_question_id.fetch_add(1, Ordering::Relaxed) + 1);
        let question = Question::new(id, author.as_str(), message.as_str());
        questions.insert(id, Arc::new(QuestionEntry::new(id, author, message)));

        debug!("Stored question {}", id);
        Ok(question)
    }

    fn list_questions(&self) -> Result<Vec<Question>, Self::Error> {
        self.entries()?
            .iter()
            .map(|entry| entry.snapshot())
            .collect()
    }

    fn get_question(&self, id: QuestionId) -> Result<Option<Question>, Self::Error> {
        match self.entry(id)? {
            Some(entry) => entry.snapshot().map(Some),
            None => {
                trace!("Question {} not found", id);
                Ok(None)
            }
        }
    }

    fn add_reply(
        &self,
        question_id: QuestionId,
        author: String,
        message: String,
    ) -> Result<Option<Reply>, Self::Error> {
        let Some(entry) = self.entry(question_id)? else {
            trace!("Reply target {} not found", question_id);
            return Ok(None);
        };

        let mut replies = entry
            .replies
            .write()
            .map_err(|_| StoreError::LockPoisoned(REPLIES_LOCK))?;

        let id = ReplyId::new(self.last_reply_id.fetch_add(1, Ordering::Relaxed) + 1);
        let reply = Reply::new(id, question_id, author, message);
        replies.push(reply.clone());

        debug!("Stored reply {} under question {}", id, question_id);
        Ok(Some(reply))
    }

    fn question_count(&self) -> Result<usize, Self::Error> {
        self.questions
            .read()
            .map(|questions| questions.len())
            .map_err(|_| StoreError::LockPoisoned(REGISTRY_LOCK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    fn ask(store: &InMemoryForumStore, author: &str, message: &str) -> Question {
        store
            .create_question(author.to_string(), message.to_string())
            .unwrap()
    }

    fn reply(store: &InMemoryForumStore, id: u64, author: &str, message: &str) -> Option<Reply> {
        store
            .add_reply(QuestionId::new(id), author.to_string(), message.to_string())
            .unwrap()
    }

    // ==================== Single-threaded behavior ====================

    #[test]
    fn test_fresh_store_is_empty() {
        let store = InMemoryForumStore::new();
        assert!(store.list_questions().unwrap().is_empty());
        assert_eq!(store.question_count().unwrap(), 0);
        assert_eq!(store.stats().unwrap(), StoreStats::default());
    }

    #[test]
    fn test_get_unknown_question_is_none() {
        let store = InMemoryForumStore::new();
        assert!(store.get_question(QuestionId::new(1)).unwrap().is_none());
        ask(&store, "John", "Hello");
        assert!(store.get_question(QuestionId::new(2)).unwrap().is_none());
    }

    #[test]
    fn test_list_and_get_two_questions() {
        let store = InMemoryForumStore::new();
        let first = ask(&store, "John", "Hello");
        let second = ask(&store, "Jane", "Anyone here?");

        let listed = store.list_questions().unwrap();
        assert_eq!(listed, vec![first.clone(), second.clone()]);
        assert_eq!(store.get_question(QuestionId::new(1)).unwrap(), Some(first));
        assert_eq!(store.get_question(QuestionId::new(2)).unwrap(), Some(second));
    }

    #[test]
    fn test_end_to_end_thread() {
        let store = InMemoryForumStore::new();

        let question = ask(&store, "John", "Hello");
        assert_eq!(question, Question::new(QuestionId::new(1), "John", "Hello"));

        let hi = reply(&store, 1, "Jane", "Hi").unwrap();
        assert_eq!(hi, Reply::new(ReplyId::new(1), QuestionId::new(1), "Jane", "Hi"));
        let thread = store.get_question(QuestionId::new(1)).unwrap().unwrap();
        assert_eq!(thread.replies, vec![hi.clone()]);

        let howdy = reply(&store, 1, "Alice", "Howdy!").unwrap();
        assert_eq!(howdy.id, ReplyId::new(2));
        let thread = store.get_question(QuestionId::new(1)).unwrap().unwrap();
        assert_eq!(thread.replies, vec![hi, howdy]);

        assert!(reply(&store, 999, "X", "Y").is_none());

        let yo = reply(&store, 1, "Bob", "Yo").unwrap();
        assert_eq!(yo.id, ReplyId::new(3));
    }

    #[test]
    fn test_failed_reply_does_not_consume_id() {
        let store = InMemoryForumStore::new();
        ask(&store, "John", "Hello");
        ask(&store, "Jane", "Second");

        for missing in [0, 3, 42, u64::MAX] {
            assert!(reply(&store, missing, "X", "Y").is_none());
        }
        assert_eq!(store.stats().unwrap().last_reply_id, 0);

        let first = reply(&store, 2, "Bob", "Yo").unwrap();
        assert_eq!(first.id, ReplyId::new(1));
    }

    #[test]
    fn test_reply_ids_are_global_across_questions() {
        let store = InMemoryForumStore::new();
        ask(&store, "a", "one");
        ask(&store, "b", "two");

        let r1 = reply(&store, 1, "x", "1").unwrap();
        let r2 = reply(&store, 2, "y", "2").unwrap();
        let r3 = reply(&store, 1, "z", "3").unwrap();

        assert_eq!(
            (r1.id.value(), r2.id.value(), r3.id.value()),
            (1, 2, 3)
        );
        assert_eq!(r2.question_id, QuestionId::new(2));
    }

    #[test]
    fn test_snapshot_does_not_alias_store() {
        let store = InMemoryForumStore::new();
        ask(&store, "John", "Hello");

        let mut listed = store.list_questions().unwrap();
        listed[0].replies.push(Reply::new(
            ReplyId::new(77),
            QuestionId::new(1),
            "intruder",
            "not stored",
        ));
        listed.clear();

        let thread = store.get_question(QuestionId::new(1)).unwrap().unwrap();
        assert!(thread.replies.is_empty());
        assert_eq!(store.question_count().unwrap(), 1);
    }

    #[test]
    fn test_stats_track_counts_and_sequences() {
        let store = InMemoryForumStore::new();
        ask(&store, "a", "one");
        ask(&store, "b", "two");
        reply(&store, 1, "c", "x");
        reply(&store, 1, "d", "y");
        reply(&store, 5, "e", "z");

        assert_eq!(
            store.stats().unwrap(),
            StoreStats {
                questions: 2,
                replies: 2,
                last_question_id: 2,
                last_reply_id: 2,
            }
        );
    }

    #[test]
    fn test_poisoned_reply_list_is_reported_without_consuming_id() {
        let store = InMemoryForumStore::new();
        ask(&store, "John", "Hello");
        ask(&store, "Jane", "Other");

        let entry = store.entry(QuestionId::new(1)).unwrap().unwrap();
        let _ = thread::spawn(move || {
            let _guard = entry.replies.write().unwrap();
            panic!("writer dies while holding the reply lock");
        })
        .join();

        let err = store
            .add_reply(QuestionId::new(1), "x".into(), "y".into())
            .unwrap_err();
        assert_eq!(err, StoreError::LockPoisoned(REPLIES_LOCK));
        assert!(store.get_question(QuestionId::new(1)).is_err());

        let ok = reply(&store, 2, "Bob", "still works").unwrap();
        assert_eq!(ok.id, ReplyId::new(1));
    }

    // ==================== Concurrency properties ====================

    #[test]
    fn test_reply_does_not_wait_on_another_questions_lock() {
        let store = Arc::new(InMemoryForumStore::new());
        ask(&store, "John", "Hello");
        ask(&store, "Jane", "Other");

        let busy = store.entry(QuestionId::new(1)).unwrap().unwrap();
        let _held = busy.replies.write().unwrap();

        let (tx, rx) = mpsc::channel();
        let writer = Arc::clone(&store);
        thread::spawn(move || {
            let result = writer.add_reply(QuestionId::new(2), "Bob".into(), "Yo".into());
            let _ = tx.send(result);
        });

        let reply = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("reply to question 2 blocked behind question 1")
            .unwrap()
            .unwrap();
        assert_eq!(reply.id, ReplyId::new(1));
        assert_eq!(reply.question_id, QuestionId::new(2));
    }

    #[test]
    fn test_concurrent_creates_yield_contiguous_ids() {
        const THREADS: usize = 16;
        const PER_THREAD: usize = 50;
        let store = InMemoryForumStore::new();

        let ids: Vec<u64> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|t| {
                    let store = &store;
                    s.spawn(move || {
                        (0..PER_THREAD)
                            .map(|i| ask(store, &format!("t{t}"), &format!("m{i}")).id.value())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let total = (THREADS * PER_THREAD) as u64;
        let unique: BTreeSet<u64> = ids.iter().copied().collect();
        assert_eq!(ids.len() as u64, total);
        assert_eq!(unique, (1..=total).collect::<BTreeSet<_>>());

        let listed: Vec<u64> = store
            .list_questions()
            .unwrap()
            .iter()
            .map(|q| q.id.value())
            .collect();
        assert_eq!(listed, (1..=total).collect::<Vec<_>>());
    }

    #[test]
    fn test_concurrent_replies_to_one_question_are_not_lost() {
        const THREADS: usize = 12;
        const PER_THREAD: usize = 100;
        let store = InMemoryForumStore::new();
        ask(&store, "John", "Hello");

        thread::scope(|s| {
            for t in 0..THREADS {
                let store = &store;
                s.spawn(move || {
                    for i in 0..PER_THREAD {
                        reply(store, 1, &format!("t{t}"), &format!("r{i}")).unwrap();
                    }
                });
            }
        });

        let total = (THREADS * PER_THREAD) as u64;
        let thread = store.get_question(QuestionId::new(1)).unwrap().unwrap();
        let ids: Vec<u64> = thread.replies.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, (1..=total).collect::<Vec<_>>());
        assert!(thread.replies.iter().all(|r| r.question_id == thread.id));
    }

    #[test]
    fn test_concurrent_replies_across_questions() {
        const QUESTIONS: u64 = 8;
        const PER_QUESTION: usize = 60;
        let store = InMemoryForumStore::new();
        for q in 0..QUESTIONS {
            ask(&store, "author", &format!("question {q}"));
        }

        thread::scope(|s| {
            for q in 1..=QUESTIONS {
                for half in 0..2 {
                    let store = &store;
                    s.spawn(move || {
                        for i in 0..PER_QUESTION / 2 {
                            reply(store, q, &format!("h{half}"), &format!("{i}")).unwrap();
                        }
                    });
                }
            }
        });

        let questions = store.list_questions().unwrap();
        let mut all_ids = Vec::new();
        for question in &questions {
            assert_eq!(question.replies.len(), PER_QUESTION);
            assert!(question.replies.windows(2).all(|w| w[0].id < w[1].id));
            assert!(question.replies.iter().all(|r| r.question_id == question.id));
            all_ids.extend(question.replies.iter().map(|r| r.id.value()));
        }
        all_ids.sort_unstable();
        let total = QUESTIONS * PER_QUESTION as u64;
        assert_eq!(all_ids, (1..=total).collect::<Vec<_>>());
    }

    #[test]
    fn test_readers_never_see_torn_state() {
        const WRITES: usize = 400;
        let store = InMemoryForumStore::new();
        ask(&store, "John", "Hello");

        thread::scope(|s| {
            let writer_store = &store;
            s.spawn(move || {
                for i in 0..WRITES {
                    if i % 10 == 0 {
                        ask(writer_store, "w", "new");
                    }
                    reply(writer_store, 1, "w", &format!("{i}")).unwrap();
                }
            });

            for _ in 0..4 {
                let reader_store = &store;
                s.spawn(move || {
                    let mut last_seen = 0;
                    for _ in 0..WRITES {
                        let listed = reader_store.list_questions().unwrap();
                        for (index, question) in listed.iter().enumerate() {
                            assert_eq!(question.id.value(), index as u64 + 1);
                        }
                        let thread = reader_store
                            .get_question(QuestionId::new(1))
                            .unwrap()
                            .unwrap();
                        let ids: Vec<u64> = thread.replies.iter().map(|r| r.id.value()).collect();
                        assert_eq!(ids, (1..=ids.len() as u64).collect::<Vec<_>>());
                        assert!(ids.len() >= last_seen, "reply list shrank");
                        last_seen = ids.len();
                    }
                });
            }
        });

        let thread = store.get_question(QuestionId::new(1)).unwrap().unwrap();
        assert_eq!(thread.replies.len(), WRITES);
    }
}
