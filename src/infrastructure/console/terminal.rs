//! Terminal Console
//!
//! Prompts through dialoguer on stderr; status lines go to stdout.

use dialoguer::{Confirm, Input, Password};

use crate::domain::ports::Console;
use crate::error::{InstallerError, InstallerResult};
use crate::infrastructure::InterruptFlag;
use crate::ui::output::status_line;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::prompt_theme;
use crate::ui::UiContext;

pub struct TerminalConsole {
    ui: UiContext,
    theme: Box<dyn dialoguer::theme::Theme>,
    interrupt: InterruptFlag,
}

impl TerminalConsole {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            theme: prompt_theme(ui.color),
            interrupt: InterruptFlag::default(),
        }
    }

    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = interrupt;
        self
    }

    fn ensure_interactive(&self) -> InstallerResult<()> {
        self.interrupt.check()?;
        if self.ui.caps.is_interactive() {
            Ok(())
        } else {
            Err(InstallerError::NotInteractive)
        }
    }
}

impl Console for TerminalConsole {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn success(&self, message: &str) {
        println!("{}", status_line(Icon::Success, message, &self.ui));
    }

    fn warn(&self, message: &str) {
        println!("{}", status_line(Icon::Warning, message, &self.ui));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", status_line(Icon::Error, message, &self.ui));
    }

    fn confirm(&self, prompt: &str, default: bool) -> InstallerResult<bool> {
        self.ensure_interactive()?;
        let answer = Confirm::with_theme(&*self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        self.interrupt.check()?;
        Ok(answer)
    }

    fn input(&self, prompt: &str, default: &str) -> InstallerResult<String> {
        self.ensure_interactive()?;
        let mut input = Input::<String>::with_theme(&*self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        let answer = input.interact_text()?;
        self.interrupt.check()?;
        Ok(answer.trim().to_string())
    }

    fn password(&self, prompt: &str) -> InstallerResult<String> {
        self.ensure_interactive()?;
        // Echo is restored before interact returns.
        let answer = Password::with_theme(&*self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        self.interrupt.check()?;
        Ok(answer)
    }
}
