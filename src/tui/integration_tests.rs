//! Integration tests for the entire menu flow
//!
//! These tests drive the app with key events and verify the whole path:
//! Key → Input → Adapter → Action → Reducer → Effect → Session → Render

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use ratatui::{buffer::Buffer, layout::Rect};

    use crate::catalog::{Setting, Tab, VideoResolution, WhiteBalance, PhotoMode};
    use crate::command::Command;
    use crate::config;
    use crate::session::{RecordingSession, SessionError};
    use crate::strings::StringTable;
    use crate::tui::testing::{buffer_lines, create_app, key, RENDER_WIDTH};
    use crate::tui::widgets::testing::test_config;
    use crate::tui::{render_frame, App, Flow, NavigationState, Runtime};

    fn press(app: &mut App<RecordingSession>, codes: &[KeyCode]) {
        for code in codes {
            assert_eq!(app.handle_key(key(*code)), Flow::Continue);
        }
    }

    #[test]
    fn test_choose_hdr_photo_mode() {
        let mut app = create_app();

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.runtime().state().options_view, Some(Setting::PhotoMode));

        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);

        assert_eq!(app.runtime().state(), &NavigationState::new(Tab::Photo));
        assert_eq!(
            app.runtime().session().submitted(),
            &[Command::SetPhotoMode(PhotoMode::Hdr)]
        );
        assert_eq!(app.runtime().status().message, "Photo Mode: HDR");
    }

    #[test]
    fn test_choose_video_size() {
        let mut app = create_app();

        press(&mut app, &[KeyCode::Char('2'), KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);

        assert_eq!(app.runtime().state(), &NavigationState::new(Tab::Video));
        assert_eq!(
            app.runtime().session().submitted(),
            &[Command::SetVideoResolution(VideoResolution::R1920x1080)]
        );
    }

    #[test]
    fn test_unknown_option_is_submitted_verbatim() {
        let mut app = create_app();

        // White Balance is the fourth photo setting, Unknown its last option
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.runtime().state().options_view, Some(Setting::WhiteBalance));
        for _ in 0..10 {
            press(&mut app, &[KeyCode::Down]);
        }
        press(&mut app, &[KeyCode::Enter]);

        assert_eq!(
            app.runtime().session().submitted(),
            &[Command::SetWhiteBalance(WhiteBalance::Unknown)]
        );
    }

    #[test]
    fn test_back_closes_options_without_submitting() {
        let mut app = create_app();

        press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Esc]);

        assert_eq!(app.runtime().state(), &NavigationState::default());
        assert!(app.runtime().session().submitted().is_empty());
        assert_eq!(app.cursor().index, 0);

        // A second back on the settings list is a no-op
        press(&mut app, &[KeyCode::Esc]);
        assert!(!app.runtime().status().is_error);
    }

    #[test]
    fn test_tab_switch_closes_options() {
        let mut app = create_app();

        press(&mut app, &[KeyCode::Enter, KeyCode::Right]);

        assert_eq!(app.runtime().state(), &NavigationState::new(Tab::Video));
        assert!(app.runtime().session().submitted().is_empty());
    }

    #[test]
    fn test_session_failure_is_shown_on_status_line() {
        let session = RecordingSession::failing_with(SessionError::Disconnected);
        let mut app = App::new(Runtime::new(session));

        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);

        assert_eq!(app.runtime().state(), &NavigationState::default());
        assert!(app.runtime().session().submitted().is_empty());
        assert!(app.runtime().status().is_error);

        let mut buf = Buffer::empty(Rect::new(0, 0, RENDER_WIDTH, 10));
        render_frame(&app, buf.area, &mut buf, &test_config());
        let lines = buffer_lines(&buf);
        assert!(lines[9].starts_with(" ERROR:"), "got '{}'", lines[9]);
    }

    #[test]
    fn test_config_string_overrides_reach_the_screen() {
        let cfg = config::parse(
            r#"
[strings]
"tab.photo" = "Foto"
"setting.photo_mode" = "Modo"
"#,
        )
        .unwrap();
        let runtime = Runtime::new(RecordingSession::new())
            .with_strings(StringTable::with_overrides(cfg.strings.clone()));
        let app = App::new(runtime);

        let mut buf = Buffer::empty(Rect::new(0, 0, RENDER_WIDTH, 8));
        render_frame(&app, buf.area, &mut buf, &cfg.display);
        let lines = buffer_lines(&buf);

        assert!(lines[0].starts_with("Foto │ Video │ General"));
        assert_eq!(lines[2].trim_end(), " ► Modo");
    }

    #[test]
    fn test_quit_key() {
        let mut app = create_app();
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Quit);
    }
}
