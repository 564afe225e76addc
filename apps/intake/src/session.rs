//! # Prompt Session
//!
//! Drives one [`SubmissionController`] from a line-oriented reader. Each
//! round prompts for every field that is empty or failed validation, then
//! submits. Notifications raised by the controller are drawn right after
//! the submit settles.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::debug;

use admission_client::{SubmissionController, SubmitOutcome};

use crate::error::AppResult;
use crate::render::{self, ToastQueue};

pub struct Session<R, W> {
    controller: Arc<SubmissionController>,
    toasts: Arc<ToastQueue>,
    input: Lines<R>,
    out: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(
        controller: Arc<SubmissionController>,
        toasts: Arc<ToastQueue>,
        input: R,
        out: W,
    ) -> Self {
        Session {
            controller,
            toasts,
            input: input.lines(),
            out,
        }
    }

    /// Runs until the applicant declines to continue or input ends.
    pub async fn run(&mut self) -> AppResult<()> {
        writeln!(self.out, "{}", render::header())?;

        loop {
            if !self.prompt_fields().await? {
                debug!("Input closed while filling the form");
                break;
            }

            let idle = self.controller.with_form(|f| f.submit_button());
            writeln!(self.out, "\n{}", render::submit_button(&idle))?;

            let outcome = self.submit().await?;
            self.draw_notifications()?;

            let keep_going = match outcome {
                SubmitOutcome::Submitted(_) => {
                    self.ask("Submit another application? [y/N] ", false).await?
                }
                SubmitOutcome::Failed(_) => self.ask("Try again? [Y/n] ", true).await?,
                SubmitOutcome::Invalid(errors) => {
                    writeln!(
                        self.out,
                        "\nPlease correct {} field(s) below.",
                        errors.len()
                    )?;
                    true
                }
                SubmitOutcome::Ignored => true,
            };

            if !keep_going {
                break;
            }
        }

        writeln!(self.out, "\n{}", render::HELP)?;
        self.out.flush()?;
        Ok(())
    }

    /// Prompts for each empty or failing field in form order.
    ///
    /// Returns `false` if input ended before every prompt was answered.
    pub async fn prompt_fields(&mut self) -> AppResult<bool> {
        let views = self.controller.with_form(|f| f.fields());

        for view in views {
            if !view.value.is_empty() && view.error.is_none() {
                continue;
            }

            write!(self.out, "{}", render::field_prompt(&view))?;
            self.out.flush()?;

            match self.input.next_line().await? {
                Some(line) => self.controller.set_value(view.field, line),
                None => return Ok(false),
            }
        }

        Ok(true)
    }

    /// Submits, showing the busy button once the request is on the wire.
    async fn submit(&mut self) -> AppResult<SubmitOutcome> {
        let controller = Arc::clone(&self.controller);
        let submit = controller.submit();
        tokio::pin!(submit);

        let mut shown = false;
        loop {
            tokio::select! {
                biased;
                outcome = &mut submit => return Ok(outcome),
                _ = std::future::ready(()), if !shown => {
                    shown = true;
                    let button = controller.with_form(|f| f.submit_button());
                    if button.busy {
                        writeln!(self.out, "{}", render::submit_button(&button))?;
                        self.out.flush()?;
                    }
                }
            }
        }
    }

    fn draw_notifications(&mut self) -> AppResult<()> {
        for toast in self.toasts.drain() {
            writeln!(self.out, "\n{}", render::notification(&toast))?;
        }
        Ok(())
    }

    /// Asks a yes/no question; end of input counts as "no".
    async fn ask(&mut self, question: &str, default: bool) -> AppResult<bool> {
        write!(self.out, "\n{question}")?;
        self.out.flush()?;

        Ok(match self.input.next_line().await? {
            Some(line) => render::parse_yes_no(&line, default),
            None => false,
        })
    }
}
