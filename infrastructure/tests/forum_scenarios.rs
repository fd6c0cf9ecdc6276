//! Use cases driven against the real in-memory store and JSONL activity log.

use forum_application::{
    GetQuestionError, GetQuestionUseCase, ListQuestionsUseCase, PostQuestionError,
    PostQuestionInput, PostQuestionUseCase, ReplyToQuestionError, ReplyToQuestionInput,
    ReplyToQuestionUseCase, SimulateTrafficInput, SimulateTrafficUseCase,
};
use forum_domain::{ForumRepository, QuestionId, ReplyId};
use forum_infrastructure::{InMemoryForumStore, JsonlActivityLogger};
use std::sync::Arc;

struct Forum {
    store: Arc<InMemoryForumStore>,
    post: PostQuestionUseCase<InMemoryForumStore>,
    list: ListQuestionsUseCase<InMemoryForumStore>,
    get: GetQuestionUseCase<InMemoryForumStore>,
    reply: ReplyToQuestionUseCase<InMemoryForumStore>,
}

impl Forum {
    fn new(activity: Option<Arc<JsonlActivityLogger>>) -> Self {
        let store = Arc::new(InMemoryForumStore::new());
        let mut post = PostQuestionUseCase::new(Arc::clone(&store));
        let mut reply = ReplyToQuestionUseCase::new(Arc::clone(&store));
        if let Some(activity) = activity {
            post = post.with_activity_logger(activity.clone());
            reply = reply.with_activity_logger(activity);
        }
        Self {
            list: ListQuestionsUseCase::new(Arc::clone(&store)),
            get: GetQuestionUseCase::new(Arc::clone(&store)),
            store,
            post,
            reply,
        }
    }
}

#[test]
fn question_thread_lifecycle() {
    let forum = Forum::new(None);

    assert!(forum.list.execute().unwrap().is_empty());

    let question = forum
        .post
        .execute(PostQuestionInput::new("John", "Hello"))
        .unwrap();
    assert_eq!(question.id, QuestionId::new(1));
    assert!(question.replies.is_empty());

    let hi = forum
        .reply
        .execute(ReplyToQuestionInput::new(question.id, "Jane", "Hi"))
        .unwrap();
    assert_eq!((hi.id, hi.question_id), (ReplyId::new(1), question.id));

    let howdy = forum
        .reply
        .execute(ReplyToQuestionInput::new(question.id, "Alice", "Howdy!"))
        .unwrap();
    assert_eq!(howdy.id, ReplyId::new(2));

    let thread = forum.get.execute(question.id).unwrap();
    assert_eq!(thread.replies, vec![hi, howdy]);

    let missing = forum
        .reply
        .execute(ReplyToQuestionInput::new(QuestionId::new(999), "X", "Y"));
    assert!(matches!(
        missing,
        Err(ReplyToQuestionError::QuestionNotFound(id)) if id == QuestionId::new(999)
    ));

    let yo = forum
        .reply
        .execute(ReplyToQuestionInput::new(question.id, "Bob", "Yo"))
        .unwrap();
    assert_eq!(yo.id, ReplyId::new(3));

    let listing = forum.list.execute().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing.reply_total(), 3);
}

#[test]
fn rejected_posts_leave_the_store_untouched() {
    let forum = Forum::new(None);

    let err = forum
        .post
        .execute(PostQuestionInput::new("  ", ""))
        .unwrap_err();
    let errors = match err {
        PostQuestionError::Validation(errors) => errors,
        other => panic!("expected validation errors, got {other:?}"),
    };
    assert_eq!(errors.errors().len(), 2);
    assert_eq!(forum.store.question_count().unwrap(), 0);

    let question = forum
        .post
        .execute(PostQuestionInput::new("John", "Hello"))
        .unwrap();
    assert_eq!(question.id, QuestionId::new(1));

    let err = forum
        .reply
        .execute(ReplyToQuestionInput::new(question.id, "Jane", " "))
        .unwrap_err();
    assert!(matches!(err, ReplyToQuestionError::Validation(_)));

    let first = forum
        .reply
        .execute(ReplyToQuestionInput::new(question.id, "Jane", "Hi"))
        .unwrap();
    assert_eq!(first.id, ReplyId::new(1));
}

#[test]
fn unknown_question_is_not_found() {
    let forum = Forum::new(None);
    let err = forum.get.execute(QuestionId::new(7)).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, GetQuestionError::NotFound(id) if id == QuestionId::new(7)));
}

#[test]
fn activity_log_records_every_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("activity.jsonl");
    let activity = Arc::new(JsonlActivityLogger::new(&path).unwrap());
    let forum = Forum::new(Some(Arc::clone(&activity)));

    forum
        .post
        .execute(PostQuestionInput::new("John", "Hello"))
        .unwrap();
    forum
        .reply
        .execute(ReplyToQuestionInput::new(QuestionId::new(1), "Jane", "Hi"))
        .unwrap();
    let _ = forum.post.execute(PostQuestionInput::new("", "no author"));
    drop(forum);
    drop(activity);

    let types: Vec<String> = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(
        types,
        vec!["question_posted", "reply_posted", "question_rejected"]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn simulated_traffic_keeps_store_consistent() {
    let store = Arc::new(InMemoryForumStore::new());
    let report = SimulateTrafficUseCase::new(Arc::clone(&store))
        .execute(SimulateTrafficInput::new(10, 25))
        .await
        .unwrap();

    assert!(report.is_consistent(), "{:?}", report.violations);
    assert_eq!(report.questions_stored, 10);
    assert_eq!(report.replies_stored, 250);

    let stats = store.stats().unwrap();
    assert_eq!(stats.last_question_id, 10);
    assert_eq!(stats.last_reply_id, 250);
}
