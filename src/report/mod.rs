//! The research-report pipeline: the fixed four-role roster, its task
//! templates, and the follow-up Q&A sub-run.
//!
//! The roster is topologically ordered by dependency: each role consumes
//! the previous role's output, so Researcher must come before Analyst,
//! Analyst before Writer, Writer before Editor. Swapping or adding roles
//! must preserve that producer/consumer order.

use crate::crew::{Agent, Capability, Crew, Task};
use crate::ports::TextGenerator;
use crate::session::Session;
use crate::types::{CrewError, RunError};

/// Build the four report agents, in roster order.
///
/// The Editor carries no capabilities: it works purely from the upstream
/// text injected by the orchestrator.
pub fn research_team(topic: &str, model: &str) -> Vec<Agent> {
    vec![
        Agent::new(
            "Senior Researcher",
            format!("Discover groundbreaking developments in {topic}"),
            "You are at the forefront of innovation, eager to explore and share \
             knowledge that could change the world.",
        )
        .with_capability(Capability::WebSearch)
        .with_temperature(0.7)
        .with_model(model),
        Agent::new(
            "Data Analyst",
            format!("Analyze research findings and identify key trends in {topic}"),
            "You excel at interpreting complex data and presenting actionable insights.",
        )
        .with_capability(Capability::WebSearch)
        .with_temperature(0.5)
        .with_model(model),
        Agent::new(
            "Technical Writer",
            format!("Craft an engaging narrative about {topic}"),
            "You are skilled at simplifying complex subjects and creating \
             captivating narratives.",
        )
        .with_capability(Capability::WebSearch)
        .with_temperature(0.8)
        .with_model(model),
        Agent::new(
            "Chief Editor",
            "Ensure the final report is polished, coherent, and of high quality",
            "You have a sharp eye for detail and are committed to producing \
             professional content.",
        )
        .with_temperature(0.3)
        .with_model(model),
    ]
}

/// Build the four report tasks, index-aligned with [`research_team`].
///
/// The Editor's task deliberately does not restate the topic: it is a
/// refinement of the upstream text, which reaches it through the
/// orchestrator's context threading.
pub fn research_tasks(topic: &str) -> Vec<Task> {
    vec![
        Task::new(
            format!("Conduct comprehensive research on {topic}. Provide detailed findings and cite sources."),
            0,
            "A detailed research report with cited sources",
        ),
        Task::new(
            format!("Analyze the research findings on {topic}. Identify key trends, patterns, and insights."),
            1,
            "An analysis report highlighting key trends and insights",
        ),
        Task::new(
            format!("Write a compelling report on {topic} based on the research and analysis. Ensure it is engaging and informative."),
            2,
            "An engaging and informative report on the topic",
        ),
        Task::new(
            "Review and refine the final report. Ensure clarity, coherence, and overall quality.",
            3,
            "A polished, high-quality final report",
        ),
    ]
}

/// The ephemeral agent answering follow-up questions. No capabilities: it
/// works only from the report embedded in its task.
pub fn qa_specialist(model: &str) -> Agent {
    Agent::new(
        "QA Specialist",
        "Answer questions about the report accurately and concisely",
        "You are an expert on the report and can answer detailed questions about it.",
    )
    .with_temperature(0.3)
    .with_model(model)
}

/// Build a one-task crew answering `question` about `artifact`. Both are
/// embedded verbatim in the task description.
pub fn followup_crew(
    artifact: &str,
    question: &str,
    model: &str,
) -> Result<Crew, CrewError> {
    let task = Task::new(
        format!(
            "Answer the following question about the report: {question}\n\n\
             Use the following report as context:\n{artifact}"
        ),
        0,
        "A concise and accurate answer to the question",
    );
    Crew::sequential(vec![qa_specialist(model)], vec![task])
}

/// Run the full report pipeline for `topic` against `session`.
///
/// On success the artifact is stored on the session; on failure the
/// session's previous artifact is left untouched.
pub async fn run_report(
    session: &mut Session,
    topic: &str,
    model: &str,
    generator: &dyn TextGenerator,
) -> Result<String, RunError> {
    session.begin_topic(topic);
    let mut crew = Crew::sequential(research_team(topic, model), research_tasks(topic))
        .map_err(RunError::Preflight)?;
    let artifact = crew.kickoff(generator).await?;
    session.store_artifact(artifact.clone());
    Ok(artifact)
}

/// Answer a follow-up question about the session's last report via a
/// one-task sub-run, appending the exchange to the conversation log.
///
/// Each question is answered independently: the log is display history
/// only and is not fed back into generation.
pub async fn answer_followup(
    session: &mut Session,
    question: &str,
    model: &str,
    generator: &dyn TextGenerator,
) -> Result<String, RunError> {
    let artifact = session
        .last_artifact()
        .ok_or_else(|| {
            RunError::Preflight(CrewError::InvalidCrew(
                "no report available to answer questions about".to_string(),
            ))
        })?
        .to_string();

    let mut crew = followup_crew(&artifact, question, model).map_err(RunError::Preflight)?;
    let answer = crew.kickoff(generator).await?;
    session.record_exchange(question, &answer);
    Ok(answer)
}
