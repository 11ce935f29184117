//! Status line rendering

use crossterm::style::Stylize;

use crate::error::InstallerError;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme;
use crate::ui::UiContext;

/// `<icon> <message>`
pub fn status_line(icon: Icon, message: &str, ui: &UiContext) -> String {
    format!("{} {}", icon.colored(ui.color, ui.unicode), message)
}

/// Fatal error line plus an optional recovery hint on the next line.
pub fn render_fatal(err: &InstallerError, ui: &UiContext) -> String {
    let mut out = status_line(Icon::Error, &err.to_string(), ui);
    if let Some(hint) = err.hint() {
        let hint = if ui.color {
            format!("{}", hint.with(theme::colors::DIM))
        } else {
            hint.to_string()
        };
        out.push('\n');
        out.push_str(&format!("  {} {}", Icon::Hint.colored(ui.color, ui.unicode), hint));
    }
    out
}

/// Print a fatal error to stderr.
pub fn print_fatal(err: &InstallerError, ui: &UiContext) {
    eprintln!("{}", render_fatal(err, ui));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;

    fn plain_ui() -> UiContext {
        UiContext {
            verbose: 0,
            caps: TerminalCapabilities {
                stdin_is_tty: false,
                stdout_is_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
            color: false,
            unicode: false,
        }
    }

    #[test]
    fn status_line_uses_ascii_icon() {
        let line = status_line(Icon::Success, "Images built", &plain_ui());
        assert_eq!(line, "[OK] Images built");
    }

    #[test]
    fn fatal_includes_hint() {
        let err = InstallerError::InvalidEmail {
            email: "nope".to_string(),
        };
        insta::assert_snapshot!(render_fatal(&err, &plain_ui()), @r"
        [FAIL] invalid email address: nope
          -> Re-run this script with the correct email address.
        ");
    }

    #[test]
    fn fatal_without_hint_is_single_line() {
        let rendered = render_fatal(&InstallerError::InsecureDeclined, &plain_ui());
        assert!(!rendered.contains('\n'));
    }
}
