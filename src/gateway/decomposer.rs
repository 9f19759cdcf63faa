//! Free-text goal to typed collaboration tasks.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::error::LlmError;
use crate::llm::provider::{ChatMessage, CompletionRequest, LlmProvider};
use crate::model::{TaskType, WorkTask};

use super::json::extract_json_array;
use super::outcome::Outcome;
use super::prompts;

/// Id prefix for tasks parsed from model output.
pub const GENERATED_ID_PREFIX: &str = "gen";

/// Id prefix for the fallback pair.
pub const FALLBACK_ID_PREFIX: &str = "err";

/// Timestamp label on fallback tasks.
pub const FALLBACK_TIMESTAMP: &str = "Now";

/// Configuration for task decomposition.
#[derive(Debug, Clone)]
pub struct DecomposerConfig {
    /// Number of steps requested from the model.
    pub steps: usize,
    /// LLM temperature; provider default when `None`.
    pub temperature: Option<f32>,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            steps: 4,
            temperature: None,
        }
    }
}

/// Turns a goal into an ordered task list via the model.
pub struct TaskDecomposer {
    llm: Arc<dyn LlmProvider>,
    config: DecomposerConfig,
}

impl TaskDecomposer {
    pub fn new(llm: Arc<dyn LlmProvider>, config: DecomposerConfig) -> Self {
        Self { llm, config }
    }

    /// Single best-effort call. Never fails and never returns an empty list:
    /// transport errors, unparseable output and empty lists all yield
    /// [`fallback_tasks`].
    pub async fn decompose(&self, goal: &str) -> Outcome<Vec<WorkTask>> {
        info!(goal = goal, model = self.llm.model_name(), "Decomposing goal");

        let mut request = CompletionRequest::new(vec![ChatMessage::user(
            prompts::task_decomposition(goal, self.config.steps),
        )])
        .json();
        if let Some(temperature) = self.config.temperature {
            request = request.with_temperature(temperature);
        }

        let response = match self.llm.complete(request).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Task decomposition request failed");
                return Outcome::fallback(fallback_tasks(), e.to_string());
            }
        };

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        match parse_tasks(&response.content, &timestamp) {
            Ok(tasks) if tasks.is_empty() => {
                warn!("Model returned no tasks");
                Outcome::fallback(fallback_tasks(), "model returned no tasks")
            }
            Ok(tasks) => {
                info!(count = tasks.len(), "Goal decomposed");
                Outcome::Ok(tasks)
            }
            Err(e) => {
                error!(
                    error = %e,
                    response = %response.content,
                    "Failed to parse task decomposition"
                );
                Outcome::fallback(fallback_tasks(), e.to_string())
            }
        }
    }
}

/// One element of the model's JSON array.
#[derive(Debug, Deserialize)]
struct RawTask {
    content: String,
    #[serde(rename = "type", default)]
    task_type: Option<serde_json::Value>,
}

/// Parse model output into pending tasks. All-or-nothing: one bad element
/// fails the whole list.
fn parse_tasks(output: &str, timestamp: &str) -> Result<Vec<WorkTask>, LlmError> {
    let raw: Vec<RawTask> = serde_json::from_str(&extract_json_array(output))?;

    Ok(raw
        .into_iter()
        .map(|t| {
            let task_type = TaskType::from_tag(t.task_type.as_ref().and_then(|v| v.as_str()));
            WorkTask::pending(GENERATED_ID_PREFIX, t.content, task_type, timestamp)
        })
        .collect())
}

/// The fixed pair returned when decomposition cannot use the model's answer.
pub fn fallback_tasks() -> Vec<WorkTask> {
    vec![
        WorkTask::pending(
            FALLBACK_ID_PREFIX,
            "人工审核关键信息",
            TaskType::Human,
            FALLBACK_TIMESTAMP,
        ),
        WorkTask::pending(
            FALLBACK_ID_PREFIX,
            "AI 自动检索相关数据",
            TaskType::Agent,
            FALLBACK_TIMESTAMP,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::llm::ResponseFormat;
    use crate::llm::mock::ScriptedLlm;
    use crate::model::TaskStatus;

    fn decomposer(llm: ScriptedLlm) -> TaskDecomposer {
        TaskDecomposer::new(Arc::new(llm), DecomposerConfig::default())
    }

    fn assert_is_fallback_pair(tasks: &[WorkTask]) {
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].content, "人工审核关键信息");
        assert_eq!(tasks[0].task_type, TaskType::Human);
        assert_eq!(tasks[1].content, "AI 自动检索相关数据");
        assert_eq!(tasks[1].task_type, TaskType::Agent);
        for t in tasks {
            assert_eq!(t.status, TaskStatus::Pending);
            assert_eq!(t.timestamp, "Now");
        }
    }

    #[tokio::test]
    async fn parses_model_tasks_in_order() {
        let llm = ScriptedLlm::text(
            r#"[
                {"content": "汇总咨询邮件", "type": "AGENT"},
                {"content": "判断老人真实需求", "type": "HUMAN"},
                {"content": "起草回复", "type": "AGENT"},
                {"content": "审核并发送", "type": "HUMAN"}
            ]"#,
        );
        let outcome = decomposer(llm).decompose("处理咨询邮件").await;
        assert!(!outcome.is_fallback());

        let tasks = outcome.into_value();
        let contents: Vec<_> = tasks.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, ["汇总咨询邮件", "判断老人真实需求", "起草回复", "审核并发送"]);
        let types: Vec<_> = tasks.iter().map(|t| t.task_type).collect();
        assert_eq!(
            types,
            [TaskType::Agent, TaskType::Human, TaskType::Agent, TaskType::Human]
        );
        assert!(tasks.iter().all(|t| t.status == TaskStatus::Pending));
        assert!(tasks.iter().all(|t| t.id.starts_with("gen-")));
        assert!(tasks.iter().all(|t| t.timestamp != FALLBACK_TIMESTAMP));
    }

    #[tokio::test]
    async fn ids_unique_within_and_across_calls() {
        let llm = ScriptedLlm::text(r#"[{"content": "a"}, {"content": "a"}, {"content": "a"}]"#);
        let d = decomposer(llm);
        let mut ids = HashSet::new();
        for _ in 0..3 {
            for task in d.decompose("goal").await.into_value() {
                assert!(ids.insert(task.id));
            }
        }
        assert_eq!(ids.len(), 9);
    }

    #[tokio::test]
    async fn unknown_or_missing_type_normalizes_to_agent() {
        let llm = ScriptedLlm::text(
            r#"[
                {"content": "a", "type": "human"},
                {"content": "b"},
                {"content": "c", "type": 7},
                {"content": "d", "type": null},
                {"content": "e", "type": "HUMAN"}
            ]"#,
        );
        let tasks = decomposer(llm).decompose("goal").await.into_value();
        let humans: Vec<_> = tasks.iter().filter(|t| t.is_human()).map(|t| t.content.as_str()).collect();
        assert_eq!(humans, ["e"]);
        assert_eq!(tasks.len(), 5);
    }

    #[tokio::test]
    async fn requests_json_mode_with_goal_in_prompt() {
        let llm = Arc::new(ScriptedLlm::text("[]"));
        let d = TaskDecomposer::new(llm.clone(), DecomposerConfig::default());
        d.decompose("整理养老社区资料").await;

        let requests = llm.requests();
        assert_eq!(requests[0].response_format, ResponseFormat::Json);
        assert!(requests[0].messages[0].content.contains("整理养老社区资料"));
    }

    #[tokio::test]
    async fn accepts_fenced_json() {
        let llm = ScriptedLlm::text("```json\n[{\"content\": \"x\", \"type\": \"HUMAN\"}]\n```");
        let outcome = decomposer(llm).decompose("goal").await;
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.value()[0].task_type, TaskType::Human);
    }

    #[tokio::test]
    async fn remote_failure_returns_fallback_pair() {
        let outcome = decomposer(ScriptedLlm::failing()).decompose("goal").await;
        assert!(outcome.is_fallback());
        assert_is_fallback_pair(outcome.value());
    }

    #[tokio::test]
    async fn malformed_output_returns_fallback_pair() {
        for bad in [
            "not json at all",
            r#"{"content": "x", "type": "HUMAN"}"#,
            r#"[{"type": "HUMAN"}]"#,
            r#"[{"content": "ok"}, {"content": 5}]"#,
        ] {
            let outcome = decomposer(ScriptedLlm::text(bad)).decompose("goal").await;
            assert!(outcome.is_fallback(), "expected fallback for {bad}");
            assert_is_fallback_pair(outcome.value());
        }
    }

    #[tokio::test]
    async fn array_wrapped_in_object_returns_fallback_pair() {
        for wrapped in [
            r#"{"tasks": [{"content": "a", "type": "HUMAN"}]}"#,
            "```json\n{\"tasks\": [{\"content\": \"a\"}]}\n```",
        ] {
            let outcome = decomposer(ScriptedLlm::text(wrapped)).decompose("goal").await;
            assert!(outcome.is_fallback(), "expected fallback for {wrapped}");
            assert_is_fallback_pair(outcome.value());
        }
    }

    #[tokio::test]
    async fn empty_list_returns_fallback_pair() {
        for empty in ["[]", ""] {
            let outcome = decomposer(ScriptedLlm::text(empty)).decompose("goal").await;
            assert_eq!(outcome.reason(), Some("model returned no tasks"));
            assert_is_fallback_pair(outcome.value());
        }
    }

    #[test]
    fn fallback_ids_are_fresh() {
        let a = fallback_tasks();
        let b = fallback_tasks();
        assert_ne!(a[0].id, a[1].id);
        assert_ne!(a[0].id, b[0].id);
        assert!(a[0].id.starts_with("err-"));
    }
}
