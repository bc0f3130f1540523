//! Integration tests for the sequential crew orchestrator, the report
//! pipeline, and the follow-up Q&A sub-run, using the mock capabilities
//! from `common::mocks`.

mod common;

use common::mocks::{EchoGenerator, ScriptedGenerator, UnconfiguredGenerator};
use newsroom::{report, Crew, CrewError, RunError, RunStatus, Session, Speaker, DEFAULT_MODEL};

const TOPIC: &str = "solid-state batteries";

fn report_crew() -> Crew {
    Crew::sequential(
        report::research_team(TOPIC, DEFAULT_MODEL),
        report::research_tasks(TOPIC),
    )
    .unwrap()
}

#[tokio::test]
async fn sequential_run_threads_each_output_into_the_next_prompt() {
    let generator = ScriptedGenerator::new(vec!["findings", "analysis", "draft", "final"]);
    let mut crew = report_crew();

    let artifact = crew.kickoff(&generator).await.unwrap();

    assert_eq!(artifact, "final");
    assert_eq!(crew.status(), RunStatus::Completed);
    assert_eq!(crew.final_artifact(), Some("final"));

    // Every task resolved, in order.
    let outputs: Vec<_> = crew.tasks().iter().map(|t| t.output().unwrap()).collect();
    assert_eq!(outputs, vec!["findings", "analysis", "draft", "final"]);

    // Each prompt after the first embeds exactly the previous output.
    let tasks = crew.tasks();
    for i in 1..tasks.len() {
        let prompt = tasks[i].prompt_with(tasks[i - 1].output().unwrap());
        assert!(prompt.contains(tasks[i - 1].output().unwrap()));
    }
}

#[tokio::test]
async fn echo_generator_expands_the_editor_prompt_end_to_end() {
    // With an echo stub, output equals input at every step, so the final
    // artifact must equal the Editor task's fully expanded prompt.
    let generator = EchoGenerator::new();
    let mut crew = report_crew();

    let artifact = crew.kickoff(&generator).await.unwrap();
    assert_eq!(generator.calls(), 4);

    // Recompute the expected expansion independently.
    let tasks = report::research_tasks(TOPIC);
    let mut context = String::new();
    for task in &tasks {
        context = task.prompt_with(&context);
    }
    assert_eq!(artifact, context);

    // The chain nests every upstream description.
    assert!(artifact.contains("Conduct comprehensive research"));
    assert!(artifact.contains("Analyze the research findings"));
    assert!(artifact.contains("Write a compelling report"));
    assert!(artifact.contains("Review and refine the final report"));
}

#[tokio::test]
async fn failure_halts_the_run_before_later_tasks() {
    let generator = ScriptedGenerator::failing_at(1, vec!["findings"]);
    let mut crew = report_crew();

    let err = crew.kickoff(&generator).await.unwrap_err();
    match err {
        RunError::Task {
            index,
            ref role,
            ref source,
        } => {
            assert_eq!(index, 1);
            assert_eq!(role, "Data Analyst");
            assert!(matches!(source, CrewError::Generation(_)));
        }
        other => panic!("expected task failure, got {other}"),
    }

    assert_eq!(crew.status(), RunStatus::Failed);
    assert!(crew.final_artifact().is_none());
    // Only the first task and the failing one reached the capability.
    assert_eq!(generator.calls(), 2);
    assert!(crew.tasks()[0].output().is_some());
    assert!(crew.tasks()[1].output().is_none());
    assert!(crew.tasks()[2].output().is_none());
    assert!(crew.tasks()[3].output().is_none());
}

#[tokio::test]
async fn missing_credential_keeps_the_run_pending() {
    let generator = UnconfiguredGenerator::new();
    let mut crew = report_crew();

    let err = crew.kickoff(&generator).await.unwrap_err();
    assert!(matches!(
        err,
        RunError::Preflight(CrewError::Precondition(_))
    ));
    assert_eq!(crew.status(), RunStatus::Pending);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn a_crew_is_single_use() {
    let generator = EchoGenerator::new();
    let mut crew = report_crew();
    crew.kickoff(&generator).await.unwrap();
    assert_eq!(crew.status(), RunStatus::Completed);

    let err = crew.kickoff(&generator).await.unwrap_err();
    assert!(matches!(err, RunError::Preflight(CrewError::InvalidCrew(_))));
    // Terminal state is immutable.
    assert_eq!(crew.status(), RunStatus::Completed);
    assert_eq!(generator.calls(), 4);
}

#[tokio::test]
async fn run_report_stores_the_artifact_on_the_session() {
    let generator = ScriptedGenerator::new(vec!["findings", "analysis", "draft", "final"]);
    let mut session = Session::new();

    let artifact = report::run_report(&mut session, TOPIC, DEFAULT_MODEL, &generator)
        .await
        .unwrap();

    assert_eq!(artifact, "final");
    assert_eq!(session.topic(), Some(TOPIC));
    assert_eq!(session.last_artifact(), Some("final"));
    assert!(session.log().is_empty());
}

#[tokio::test]
async fn failed_run_leaves_the_previous_artifact_untouched() {
    let mut session = Session::new();
    session.begin_topic("old topic");
    session.store_artifact("old report".to_string());

    let generator = ScriptedGenerator::failing_at(0, vec![]);
    let err = report::run_report(&mut session, TOPIC, DEFAULT_MODEL, &generator)
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::Task { index: 0, .. }));
    assert_eq!(session.last_artifact(), Some("old report"));
}

#[tokio::test]
async fn followup_prompt_contains_report_and_question() {
    let mut session = Session::new();
    session.store_artifact("R".to_string());

    let generator = EchoGenerator::new();
    let answer = report::answer_followup(&mut session, "Q", DEFAULT_MODEL, &generator)
        .await
        .unwrap();

    // The echo stub returns the sub-task's prompt, which must embed both
    // the question and the full report.
    assert!(answer.contains('Q'));
    assert!(answer.contains('R'));
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn followup_appends_user_then_assistant_turns() {
    let mut session = Session::new();
    session.store_artifact("the report".to_string());

    let generator = ScriptedGenerator::new(vec!["the answer"]);
    report::answer_followup(&mut session, "what changed?", DEFAULT_MODEL, &generator)
        .await
        .unwrap();

    let log = session.log();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].speaker, Speaker::User);
    assert_eq!(log[0].content, "what changed?");
    assert_eq!(log[1].speaker, Speaker::Assistant);
    assert_eq!(log[1].content, "the answer");
}

#[tokio::test]
async fn followup_without_a_report_is_refused() {
    let mut session = Session::new();
    let generator = EchoGenerator::new();

    let err = report::answer_followup(&mut session, "Q", DEFAULT_MODEL, &generator)
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::Preflight(CrewError::InvalidCrew(_))));
    assert!(session.log().is_empty());
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn followup_failure_does_not_touch_the_log() {
    let mut session = Session::new();
    session.store_artifact("the report".to_string());

    let generator = ScriptedGenerator::failing_at(0, vec![]);
    let err = report::answer_followup(&mut session, "Q", DEFAULT_MODEL, &generator)
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::Task { index: 0, .. }));
    assert!(session.log().is_empty());
}
