use anyhow::{Context, Result};
use tracing::info;

use super::{parse_choice, parse_setting};
use crate::command::{build_command, Command};
use crate::formatting::{label, option_label};
use crate::session::Session;
use crate::strings::StringResources;

/// Build the command for `setting_id` / `option_id` and hand it to `session`
pub fn apply(
    session: &mut impl Session,
    setting_id: &str,
    option_id: &str,
) -> Result<Command> {
    let setting = parse_setting(setting_id)?;
    let choice = parse_choice(setting, option_id)?;
    let command = build_command(setting, choice)?;

    session
        .submit(command)
        .with_context(|| format!("Failed to submit `{}`", command))?;
    info!("SET: Submitted {}", command);
    Ok(command)
}

pub fn run(
    session: &mut impl Session,
    setting_id: &str,
    option_id: &str,
    strings: &impl StringResources,
) -> Result<()> {
    let command = apply(session, setting_id, option_id)?;
    println!(
        "{}: {} ({})",
        label(command.setting(), strings),
        option_label(command.choice(), strings),
        command
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoStandard;
    use crate::session::{RecordingSession, SessionError};

    #[test]
    fn test_apply_submits_command() {
        let mut session = RecordingSession::new();
        let command = apply(&mut session, "video_standard", "ntsc").unwrap();

        assert_eq!(command, Command::SetVideoStandard(VideoStandard::Ntsc));
        assert_eq!(session.submitted(), &[command]);
    }

    #[test]
    fn test_apply_unknown_option() {
        let mut session = RecordingSession::new();
        let err = apply(&mut session, "video_standard", "secam").unwrap_err();

        assert!(err.to_string().contains("Unknown option 'secam'"));
        assert!(session.submitted().is_empty());
    }

    #[test]
    fn test_apply_session_failure() {
        let mut session = RecordingSession::failing_with(SessionError::Disconnected);
        let err = apply(&mut session, "photo_mode", "hdr").unwrap_err();

        assert_eq!(err.to_string(), "Failed to submit `set photo_mode = hdr`");
        assert_eq!(err.root_cause().to_string(), "camera is not connected");
    }
}
