use super::render::{print_outcome, submit};
use super::texts;
use anyhow::{Result, bail};
use pharmqa_core::{
    InteractionController, Outcome, Session, Subject, utils::ansi::AnsiRenderer,
};
use serde_json::json;

/// Handle the ask command: one submission through the controller.
pub async fn handle_ask_command(
    controller: &InteractionController,
    question: &str,
    subject: Subject,
    json_output: bool,
) -> Result<()> {
    let text = texts::for_locale(controller.locale());
    let mut session = Session::new();
    let outcome = submit(
        controller,
        &mut session,
        text,
        question.to_string(),
        subject,
        !json_output,
    )
    .await;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&json_report(&session, &outcome))?);
    } else {
        print_outcome(&mut AnsiRenderer::stdout(), text, &outcome)?;
    }

    if outcome.answer.is_none() {
        let reasons = outcome
            .notices
            .iter()
            .map(|notice| notice.error().to_string())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Question was not answered: {reasons}");
    }
    Ok(())
}

fn json_report(session: &Session, outcome: &Outcome) -> serde_json::Value {
    json!({
        "subject": session.selected_subject(),
        "answer": outcome.answer,
        "warnings": outcome.warnings().map(ToString::to_string).collect::<Vec<_>>(),
        "errors": outcome.errors().map(ToString::to_string).collect::<Vec<_>>(),
        "turns": session.history(),
    })
}
