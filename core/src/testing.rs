use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use gwfailover_common::error::CommandError;
use gwfailover_common::system::{CommandOutput, CommandRunner};

enum Reply {
    Output(CommandOutput),
    TimeOut,
}

/// Records every command and answers from a script of `prefix => reply` rules.
///
/// The first rule whose prefix matches the command line wins. Unmatched commands succeed
/// silently.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    rules: Vec<(String, Reply)>,
    missing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, prefix: &str, success: bool, text: &str) -> Self {
        self.rules.push((
            prefix.to_string(),
            Reply::Output(CommandOutput::new(success, text)),
        ));
        self
    }

    pub(crate) fn time_out(mut self, prefix: &str) -> Self {
        self.rules.push((prefix.to_string(), Reply::TimeOut));
        self
    }

    pub(crate) fn without(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, CommandError> {
        let line = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<String>>()
            .join(" ");
        self.calls.lock().unwrap().push(line.clone());

        match self.rules.iter().find(|(prefix, _)| line.starts_with(prefix.as_str())) {
            Some((_, Reply::Output(output))) => Ok(output.clone()),
            Some((_, Reply::TimeOut)) => Err(CommandError::TimedOut {
                program: program.to_string(),
                after: timeout.unwrap_or_default(),
            }),
            None => Ok(CommandOutput::new(true, "")),
        }
    }

    async fn is_available(&self, program: &str) -> bool {
        !self.missing.iter().any(|missing| missing == program)
    }
}
