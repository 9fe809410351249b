use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    cmd::Cmd,
    msg::{system::SystemMsg, Msg},
};

/// Carries out commands returned by `update`
///
/// Results that need to reach the state again are fed back as messages
/// through the optional sender.
#[derive(Clone, Debug, Default)]
pub struct CmdExecutor {
    msg_sender: Option<mpsc::UnboundedSender<Msg>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feedback(msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            msg_sender: Some(msg_sender),
        }
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::OpenLink { href } => {
                // The terminal cannot open tabs; surface the link instead
                log::info!("Open link: {}", href);
                self.feed_back(Msg::System(SystemMsg::UpdateStatusMessage(format!(
                    "Link: {href}"
                ))))?;
            }

            Cmd::SubmitContact {
                name,
                email,
                message,
            } => {
                log::info!(
                    "Contact form submitted - name: '{}', email: '{}', message: {} chars",
                    name,
                    email,
                    message.chars().count()
                );
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {}", message);
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {}", message);
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    fn feed_back(&self, msg: Msg) -> Result<()> {
        if let Some(sender) = &self.msg_sender {
            sender.send(msg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_execute_log_commands() -> Result<()> {
        let executor = CmdExecutor::new();
        let log = executor.execute_commands(&[
            Cmd::log_info("hello"),
            Cmd::log_error("oops"),
        ])?;

        assert_eq!(
            log,
            vec![
                "✓ Executed: LogInfo".to_string(),
                "✓ Executed: LogError".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_open_link_feeds_back_status() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::with_feedback(tx);

        executor.execute_command(&Cmd::OpenLink {
            href: "https://saweria.co/Prozycal".to_string(),
        })?;

        assert_eq!(
            rx.try_recv().ok(),
            Some(Msg::System(SystemMsg::UpdateStatusMessage(
                "Link: https://saweria.co/Prozycal".to_string()
            )))
        );
        Ok(())
    }

    #[test]
    fn test_closed_feedback_channel_is_reported() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let executor = CmdExecutor::with_feedback(tx);

        let log = executor
            .execute_commands(&[Cmd::OpenLink {
                href: "https://example.com".to_string(),
            }])
            .unwrap_or_default();
        assert_eq!(log.len(), 1);
        assert!(log[0].starts_with("✗ Failed to execute OpenLink"));
    }
}
