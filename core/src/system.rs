use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, trace};

use gwfailover_common::error::CommandError;
use gwfailover_common::system::{CommandOutput, CommandRunner};

const AVAILABILITY_TIMEOUT: Duration = Duration::from_secs(2);

/// Runs commands as child processes of this one.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        limit: Option<Duration>,
    ) -> Result<CommandOutput, CommandError> {
        debug!("$ {} {}", program, args.join(" "));

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let pending = command.output();
        let output = match limit {
            Some(after) => match timeout(after, pending).await {
                Ok(result) => result,
                Err(_elapsed) => {
                    return Err(CommandError::TimedOut {
                        program: program.to_string(),
                        after,
                    });
                }
            },
            None => pending.await,
        }
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

        // Tools like `ip` and `nc` report on stderr, so both streams are kept.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        trace!("{program} exited with {}: {}", output.status, text.trim_end());

        Ok(CommandOutput::new(output.status.success(), text))
    }

    async fn is_available(&self, program: &str) -> bool {
        let status = Command::new(program)
            .arg("-h")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status();

        match timeout(AVAILABILITY_TIMEOUT, status).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => false,
            Ok(Err(e)) => {
                debug!("Could not start {program}: {e}");
                false
            }
            // It started, it just did not stop.
            Err(_elapsed) => true,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
