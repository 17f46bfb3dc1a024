use super::texts::UiText;
use anyhow::Result;
use console::style;
use pharmqa_core::{
    InteractionController, Intent, Locale, Outcome, Session, Subject,
    ui::{Spinner, render_markdown},
    utils::ansi::{AnsiRenderer, MessageStyle},
};

pub fn print_banner(renderer: &mut AnsiRenderer, text: &UiText, model: &str) -> Result<()> {
    println!("{}", style(text.title).cyan().bold());
    println!("{} {}", style(text.caption).dim(), style(model).dim().italic());
    renderer.raw_line("")?;
    for line in text.guide {
        renderer.line(MessageStyle::Info, &format!("- {line}"))?;
    }
    renderer.raw_line("")?;
    Ok(())
}

pub fn print_subjects(locale: Locale) {
    for subject in Subject::ALL {
        let slug = if subject.is_unclassified() {
            "auto"
        } else {
            subject.slug()
        };
        println!(
            "  {:<20} {}",
            style(slug).green(),
            style(subject.label(locale)).bold()
        );
    }
}

/// Submit through the controller with a spinner per stage.
pub async fn submit(
    controller: &InteractionController,
    session: &mut Session,
    text: &UiText,
    question: String,
    subject: Subject,
    show_progress: bool,
) -> Outcome {
    let mut spinner: Option<Spinner> = None;
    let outcome = controller
        .handle_with(session, Intent::Submit { question, subject }, |stage| {
            let message = text.stage(stage);
            let spinner = spinner.get_or_insert_with(|| {
                if show_progress {
                    Spinner::new(message)
                } else {
                    Spinner::hidden(message)
                }
            });
            spinner.set_message(message);
        })
        .await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    outcome
}

/// Print notices and the answer of a finished submission.
pub fn print_outcome(renderer: &mut AnsiRenderer, text: &UiText, outcome: &Outcome) -> Result<()> {
    for warning in outcome.warnings() {
        renderer.line(MessageStyle::Warning, &warning.to_string())?;
    }
    for error in outcome.errors() {
        renderer.line(MessageStyle::Error, &error.to_string())?;
    }
    if let Some(answer) = &outcome.answer {
        renderer.line(MessageStyle::Header, text.answer_header)?;
        render_markdown(answer, renderer.color());
        renderer.raw_line("")?;
    }
    Ok(())
}
