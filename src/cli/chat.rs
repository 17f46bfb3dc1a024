use super::input::{EntryBuffer, ReplCommand, parse_line};
use super::render::{print_banner, print_outcome, print_subjects, submit};
use super::texts::{self, UiText};
use anyhow::{Context, Result};
use pharmqa_core::{
    Intent, InteractionController, Outcome, QaError, Session, Subject,
    ui::render_markdown,
    utils::{
        ansi::{AnsiRenderer, MessageStyle},
        transcript::format_history,
    },
};
use std::io::{self, Write};
use tracing::debug;

/// Interactive loop. Owns the session for its whole lifetime.
pub async fn handle_chat_command(controller: &InteractionController) -> Result<()> {
    let locale = controller.locale();
    let text = texts::for_locale(locale);
    let mut renderer = AnsiRenderer::stdout();
    print_banner(&mut renderer, text, controller.provider().model())?;

    let mut session = Session::new();
    let mut subject = Subject::Unclassified;

    loop {
        renderer.inline(
            MessageStyle::Subject,
            &format!("[{}] ", subject.label(locale)),
        )?;
        renderer.inline(MessageStyle::User, "> ")?;

        let Some(entry) = read_entry(&mut renderer)? else {
            break;
        };

        let command = parse_line(&entry);
        debug!(?command, "repl input");
        match command {
            ReplCommand::Ask(question) => {
                let outcome = submit(controller, &mut session, text, question, subject, true).await;
                print_outcome(&mut renderer, text, &outcome)?;
                subject = selector_after(subject, &outcome, &session);
            }
            ReplCommand::Resubmit => {
                let question = session.pending_question().to_string();
                if question.trim().is_empty() {
                    renderer.line(MessageStyle::Info, text.nothing_pending)?;
                    continue;
                }
                let outcome = submit(controller, &mut session, text, question, subject, true).await;
                print_outcome(&mut renderer, text, &outcome)?;
                subject = selector_after(subject, &outcome, &session);
            }
            ReplCommand::Subject(None) => {
                renderer.line(MessageStyle::Info, text.subject_prompt)?;
                print_subjects(locale);
            }
            ReplCommand::Subject(Some(selected)) => {
                subject = selected;
                renderer.line(
                    MessageStyle::Info,
                    &format!("{} {}", text.subject_selected, subject.label(locale)),
                )?;
            }
            ReplCommand::Reset => {
                controller.handle(&mut session, Intent::Reset).await;
                renderer.line(MessageStyle::Info, text.question_cleared)?;
            }
            ReplCommand::Again => {
                follow_up(controller, &mut session, &mut renderer, text, Intent::ReExplain).await?;
            }
            ReplCommand::Examples => {
                follow_up(controller, &mut session, &mut renderer, text, Intent::MoreExamples)
                    .await?;
            }
            ReplCommand::History => {
                if session.history().is_empty() {
                    renderer.line(MessageStyle::Info, text.no_history)?;
                } else {
                    render_markdown(&format_history(session.history(), locale), renderer.color());
                }
            }
            ReplCommand::Question => {
                if session.pending_question().is_empty() {
                    renderer.line(MessageStyle::Info, text.nothing_pending)?;
                } else {
                    renderer.line(MessageStyle::Info, text.pending_header)?;
                    renderer.line(MessageStyle::User, session.pending_question())?;
                }
            }
            ReplCommand::Help => {
                for line in text.guide {
                    renderer.line(MessageStyle::Info, &format!("- {line}"))?;
                }
            }
            ReplCommand::Quit => break,
            ReplCommand::Invalid(message) => {
                renderer.line(MessageStyle::Warning, &message)?;
            }
        }
    }

    renderer.line(MessageStyle::Info, text.goodbye)?;
    io::stdout().flush().ok();
    Ok(())
}

/// Read one entry from stdin, following `\` continuations. `None` at end of input.
fn read_entry(renderer: &mut AnsiRenderer) -> Result<Option<String>> {
    let mut buffer = EntryBuffer::default();
    loop {
        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(buffer.is_continuing().then(|| buffer.take()));
        }
        if buffer.push(&line) {
            return Ok(Some(buffer.take()));
        }
        renderer.inline(MessageStyle::User, "... ")?;
    }
}

/// Subject the selector shows after a submission.
///
/// A question rejected by validation never reaches the session, so the
/// user's pick stays. Otherwise the selector follows the session, which
/// holds the classified subject.
fn selector_after(current: Subject, outcome: &Outcome, session: &Session) -> Subject {
    let rejected = outcome
        .warnings()
        .any(|e| matches!(e, QaError::Validation { .. }));
    if rejected {
        current
    } else {
        session.selected_subject()
    }
}

async fn follow_up(
    controller: &InteractionController,
    session: &mut Session,
    renderer: &mut AnsiRenderer,
    text: &UiText,
    intent: Intent,
) -> Result<()> {
    let outcome = controller.handle(session, intent).await;
    if outcome.unavailable {
        renderer.line(MessageStyle::Warning, text.needs_answer)?;
    } else {
        renderer.line(MessageStyle::Info, text.follow_up_added)?;
        renderer.line(MessageStyle::User, session.pending_question())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmqa_core::Notice;

    #[test]
    fn rejected_question_keeps_the_chosen_subject() {
        let outcome = Outcome {
            notices: vec![Notice::Warning(QaError::Validation {
                min_chars: 5,
                actual: 3,
            })],
            ..Outcome::default()
        };

        let subject = selector_after(Subject::Biochemistry, &outcome, &Session::new());

        assert_eq!(subject, Subject::Biochemistry);
    }

    #[test]
    fn accepted_question_follows_the_session() {
        let outcome = Outcome {
            answer: Some("answer".into()),
            ..Outcome::default()
        };

        let subject = selector_after(Subject::Biochemistry, &outcome, &Session::new());

        assert_eq!(subject, Subject::Unclassified);
    }
}
