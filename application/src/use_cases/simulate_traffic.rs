//! Simulate Traffic use case
//!
//! Hammers the store with concurrent writers, then checks that the id and
//! ordering invariants survived.

use crate::ports::progress::{NoProgress, ProgressNotifier, SimulationPhase};
use crate::use_cases::shared::{StoreFailure, store_failure};
use forum_domain::{ForumRepository, Question, QuestionId};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can occur during a simulation
#[derive(Error, Debug)]
pub enum SimulateTrafficError {
    #[error("Simulation needs at least one question")]
    NoQuestions,

    #[error("Store failure: {0}")]
    Store(StoreFailure),
}

/// Input for the SimulateTraffic use case
#[derive(Debug, Clone)]
pub struct SimulateTrafficInput {
    /// Questions created concurrently in the first phase
    pub questions: usize,
    /// Replies posted concurrently to every created question
    pub replies_per_question: usize,
}

impl SimulateTrafficInput {
    pub fn new(questions: usize, replies_per_question: usize) -> Self {
        Self {
            questions,
            replies_per_question,
        }
    }
}

impl Default for SimulateTrafficInput {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

/// Outcome of a simulation run
#[derive(Debug, Clone)]
pub struct TrafficReport {
    pub questions_created: usize,
    pub replies_created: usize,
    /// Questions in the store after the run
    pub questions_stored: usize,
    /// Replies in the store after the run
    pub replies_stored: usize,
    pub elapsed: Duration,
    /// Human-readable invariant violations; empty when the store is consistent
    pub violations: Vec<String>,
}

impl TrafficReport {
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Use case for running a concurrent traffic simulation
pub struct SimulateTrafficUseCase<R: ForumRepository + 'static> {
    repository: Arc<R>,
}

impl<R: ForumRepository + 'static> SimulateTrafficUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: SimulateTrafficInput,
    ) -> Result<TrafficReport, SimulateTrafficError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: SimulateTrafficInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<TrafficReport, SimulateTrafficError> {
        if input.questions == 0 {
            return Err(SimulateTrafficError::NoQuestions);
        }

        info!(
            "Simulating {} questions x {} replies",
            input.questions, input.replies_per_question
        );
        let started = Instant::now();

        let question_ids = self.phase_questions(&input, progress).await?;
        let replies_created = self
            .phase_replies(&question_ids, input.replies_per_question, progress)
            .await?;

        progress.on_phase_start(SimulationPhase::Verify, 1);
        let questions = self
            .repository
            .list_questions()
            .map_err(|e| SimulateTrafficError::Store(store_failure("list_questions", e)))?;
        let mut violations = check_invariants(&questions);
        violations.extend(shortfalls(&input, question_ids.len(), replies_created));
        progress.on_task_complete(SimulationPhase::Verify, violations.is_empty());
        progress.on_phase_complete(SimulationPhase::Verify);

        for violation in &violations {
            warn!("Invariant violated: {}", violation);
        }

        Ok(TrafficReport {
            questions_created: question_ids.len(),
            replies_created,
            questions_stored: questions.len(),
            replies_stored: questions.iter().map(Question::reply_count).sum(),
            elapsed: started.elapsed(),
            violations,
        })
    }

    /// Phase 1: create every question in parallel
    async fn phase_questions(
        &self,
        input: &SimulateTrafficInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<QuestionId>, SimulateTrafficError> {
        progress.on_phase_start(SimulationPhase::Questions, input.questions);

        let mut join_set = JoinSet::new();
        for i in 0..input.questions {
            let repository = Arc::clone(&self.repository);
            join_set.spawn_blocking(move || {
                repository.create_question(
                    format!("author-{i}"),
                    format!("Simulated question #{i}"),
                )
            });
        }

        let mut ids = Vec::with_capacity(input.questions);
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(Ok(question)) => {
                    progress.on_task_complete(SimulationPhase::Questions, true);
                    ids.push(question.id);
                }
                Ok(Err(e)) => {
                    progress.on_task_complete(SimulationPhase::Questions, false);
                    return Err(SimulateTrafficError::Store(store_failure(
                        "create_question",
                        e,
                    )));
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    progress.on_task_complete(SimulationPhase::Questions, false);
                }
            }
        }

        progress.on_phase_complete(SimulationPhase::Questions);
        ids.sort();
        debug!("Created question ids {:?}", ids);
        Ok(ids)
    }

    /// Phase 2: reply to every question in parallel, all questions at once
    async fn phase_replies(
        &self,
        question_ids: &[QuestionId],
        replies_per_question: usize,
        progress: &dyn ProgressNotifier,
    ) -> Result<usize, SimulateTrafficError> {
        progress.on_phase_start(
            SimulationPhase::Replies,
            question_ids.len() * replies_per_question,
        );

        let mut join_set = JoinSet::new();
        for &question_id in question_ids {
            for n in 0..replies_per_question {
                let repository = Arc::clone(&self.repository);
                join_set.spawn_blocking(move || {
                    repository.add_reply(
                        question_id,
                        format!("replier-{n}"),
                        format!("Reply #{n} to question {question_id}"),
                    )
                });
            }
        }

        let mut created = 0;
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(Ok(Some(_))) => {
                    created += 1;
                    progress.on_task_complete(SimulationPhase::Replies, true);
                }
                Ok(Ok(None)) => {
                    warn!("Question vanished while replying");
                    progress.on_task_complete(SimulationPhase::Replies, false);
                }
                Ok(Err(e)) => {
                    progress.on_task_complete(SimulationPhase::Replies, false);
                    return Err(SimulateTrafficError::Store(store_failure("add_reply", e)));
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    progress.on_task_complete(SimulationPhase::Replies, false);
                }
            }
        }

        progress.on_phase_complete(SimulationPhase::Replies);
        Ok(created)
    }
}

/// Requested writes that never completed (a task panicked or its question vanished).
fn shortfalls(input: &SimulateTrafficInput, questions: usize, replies: usize) -> Vec<String> {
    let mut violations = Vec::new();
    if questions < input.questions {
        violations.push(format!(
            "only {} of {} requested questions were created",
            questions, input.questions
        ));
    }
    let requested_replies = input.questions * input.replies_per_question;
    if replies < requested_replies {
        violations.push(format!(
            "only {} of {} requested replies were created",
            replies, requested_replies
        ));
    }
    violations
}

/// Check the store-wide id and ordering invariants over a listing.
///
/// - question ids are exactly `1..=n` in listing order
/// - every reply points back at the question that holds it
/// - each reply list is in ascending id order
/// - reply ids across all questions are exactly `1..=m`
pub fn check_invariants(questions: &[Question]) -> Vec<String> {
    let mut violations = Vec::new();

    for (index, question) in questions.iter().enumerate() {
        let expected = index as u64 + 1;
        if question.id.value() != expected {
            violations.push(format!(
                "question at position {} has id {} (expected {})",
                index, question.id, expected
            ));
        }

        for reply in &question.replies {
            if reply.question_id != question.id {
                violations.push(format!(
                    "reply {} is stored under question {} but points at {}",
                    reply.id, question.id, reply.question_id
                ));
            }
        }

        if question.replies.windows(2).any(|w| w[0].id >= w[1].id) {
            violations.push(format!(
                "replies of question {} are not in ascending id order",
                question.id
            ));
        }
    }

    let mut reply_ids: Vec<u64> = questions
        .iter()
        .flat_map(|q| q.replies.iter().map(|r| r.id.value()))
        .collect();
    reply_ids.sort_unstable();
    for (index, id) in reply_ids.iter().enumerate() {
        let expected = index as u64 + 1;
        if *id != expected {
            violations.push(format!(
                "reply ids are not contiguous: found {} where {} was expected",
                id, expected
            ));
            break;
        }
    }

    violations
}
