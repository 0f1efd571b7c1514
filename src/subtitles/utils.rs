// Helper for running external tools

use std::process::Stdio;

use tokio::process::Command as TokioCommand;
use tokio::time::{timeout, Duration};

/// Run a command to completion with a hard deadline.
///
/// `kill_on_drop` ensures the child does not outlive a timed-out wait.
pub async fn run_output_with_timeout(
    program: &str,
    args: Vec<String>,
    timeout_secs: u64,
) -> Result<std::process::Output, String> {
    let child = TokioCommand::new(program)
        .args(&args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| format!("failed to start {}: {}", program, e))?;

    match timeout(Duration::from_secs(timeout_secs), child.wait_with_output()).await {
        Ok(result) => result.map_err(|e| format!("failed to wait for {}: {}", program, e)),
        Err(_) => Err(format!("{} timed out after {}s", program, timeout_secs)),
    }
}
