//! Scripted oracle for tests and offline dry runs

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::Oracle;
use crate::error::{BenchError, BenchResult};

type Answerer = Arc<dyn Fn(usize, &str) -> Option<String> + Send + Sync>;

enum Script {
    Fixed(String),
    Echo(Answerer),
    Fail(String),
}

/// An [`Oracle`] with canned behavior.
///
/// - `fixed` returns the same reply for every prompt
/// - `echo` answers every `Test N: <text>` line of the prompt with
///   `Test N - <label>` using a caller-supplied function
/// - `failing` always returns an oracle error
pub struct ScriptedOracle {
    script: Script,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedOracle {
    pub fn fixed(reply: impl Into<String>) -> Self {
        Self::from_script(Script::Fixed(reply.into()))
    }

    /// Answer each case with `answer(index, input_text)`; `None` skips the case
    pub fn echo<F>(answer: F) -> Self
    where
        F: Fn(usize, &str) -> Option<String> + Send + Sync + 'static,
    {
        Self::from_script(Script::Echo(Arc::new(answer)))
    }

    /// Answer case `i` with `labels[i - 1]`
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        Self::echo(move |index, _| index.checked_sub(1).and_then(|i| labels.get(i).cloned()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_script(Script::Fail(message.into()))
    }

    fn from_script(script: Script) -> Self {
        Self {
            script,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep before replying
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of times `invoke` was called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Split a `Test N: text` prompt line into its index and text
fn case_line(line: &str) -> Option<(usize, &str)> {
    let rest = line.strip_prefix("Test ")?;
    let (index, text) = rest.split_once(": ")?;
    Some((index.parse().ok()?, text))
}

#[async_trait]
impl Oracle for ScriptedOracle {
    fn name(&self) -> String {
        "scripted".to_string()
    }

    fn model(&self) -> String {
        match self.script {
            Script::Fixed(_) => "fixed",
            Script::Echo(_) => "echo",
            Script::Fail(_) => "failing",
        }
        .to_string()
    }

    async fn invoke(&self, prompt: &str) -> BenchResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.script {
            Script::Fixed(reply) => Ok(reply.clone()),
            Script::Fail(message) => Err(BenchError::oracle_with_provider(message.clone(), "scripted")),
            Script::Echo(answer) => Ok(prompt
                .lines()
                .filter_map(case_line)
                .filter_map(|(index, text)| {
                    answer(index, text).map(|label| format!("Test {} - {}", index, label))
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_answers_each_case() {
        let oracle = ScriptedOracle::with_labels(["Positive", "Negative"]);
        let reply = oracle
            .invoke("Header\n\nTest 1: good\n\nTest 2: bad\n\nTest 3: extra")
            .await
            .unwrap();
        assert_eq!(reply, "Test 1 - Positive\nTest 2 - Negative");
        assert_eq!(oracle.calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_and_fixed() {
        assert!(ScriptedOracle::failing("boom").invoke("x").await.is_err());
        assert_eq!(ScriptedOracle::fixed("hi").invoke("x").await.unwrap(), "hi");
    }

    #[test]
    fn test_case_line() {
        assert_eq!(case_line("Test 12: a: b"), Some((12, "a: b")));
        assert_eq!(case_line("Please analyze"), None);
    }
}
