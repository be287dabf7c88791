//! Voting form pages and answer submission.
//!
//! The form is plain server-rendered HTML: one radio button per choice, all
//! in the same group, and a submit button. Selection state lives in the
//! browser until the form is posted; the posted choice goes unchanged to the
//! [`AnswerRecorder`](crate::recorder::AnswerRecorder).

use api_types::voting::{ChoiceForm, Question as QuestionView};
use axum::{
    Form, Json,
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::TypedHeader;
use engine::Question;

use crate::{
    ServerError,
    recorder::AnswerSubmission,
    server::{ServerState, ShareholderHeader},
};

/// Name shared by the radio buttons of a form.
pub const CHOICE_GROUP: &str = "radio-0";

/// Single-select form for one question.
pub struct VotingForm<'a> {
    question: &'a Question,
}

impl<'a> VotingForm<'a> {
    pub fn new(question: &'a Question) -> Self {
        Self { question }
    }

    /// Where the form posts its payload.
    pub fn action(&self) -> String {
        format!("{}/answer", form_path(&self.question.id))
    }

    pub fn render(&self) -> String {
        let choices: String = self
            .question
            .choices_array
            .iter()
            .map(|choice| {
                let choice = html_escape(choice);
                format!(
                    "<div class=\"flex items-center mb-4\">\
                     <label class=\"label cursor-pointer ms-2\">\
                     <input type=\"radio\" name=\"{CHOICE_GROUP}\" value=\"{choice}\" class=\"radio checked:bg-red-500\" />\
                     <span class=\"ms-2\">{choice}</span>\
                     </label>\
                     </div>"
                )
            })
            .collect();

        format!(
            "<form action=\"{action}\" method=\"post\">\
             <div class=\"items-left m-8\">\
             <div>{question}</div>\
             {choices}\
             <button class=\"bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 m-4 rounded\">Submit</button>\
             </div>\
             </form>",
            action = html_escape(&self.action()),
            question = html_escape(&self.question.question),
        )
    }
}

/// Path of the form page, with the id as a single encoded segment.
fn form_path(question_id: &str) -> String {
    format!("/voting/{}", urlencoding::encode(question_id))
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\" /><title>{}</title></head>\
         <body>{}</body>\
         </html>",
        html_escape(title),
        body
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Page with a form for every open question.
pub async fn index(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let questions = state.engine.active_questions().await?;

    let body = if questions.is_empty() {
        "<p>No open questions.</p>".to_string()
    } else {
        questions
            .iter()
            .map(|question| VotingForm::new(question).render())
            .collect()
    };

    Ok(Html(page("Voting", &body)))
}

/// Page with the form of one question.
pub async fn form(
    State(state): State<ServerState>,
    Path(question_id): Path<String>,
) -> Result<Html<String>, ServerError> {
    let question = state.engine.question(&question_id).await?;

    Ok(Html(page(
        &question.question,
        &VotingForm::new(&question).render(),
    )))
}

/// Hand the submitted choice to the recorder, then send the browser back to
/// the form.
pub async fn submit(
    State(state): State<ServerState>,
    Path(question_id): Path<String>,
    shareholder: Option<TypedHeader<ShareholderHeader>>,
    Form(payload): Form<ChoiceForm>,
) -> Result<Redirect, ServerError> {
    let submission = AnswerSubmission {
        question_id: question_id.clone(),
        shareholder_id: shareholder.map(|TypedHeader(header)| header.0),
        choice: payload.choice,
    };
    state.recorder.record(submission).await?;

    Ok(Redirect::to(&form_path(&question_id)))
}

/// Open questions as JSON.
pub async fn list_questions(
    State(state): State<ServerState>,
) -> Result<Json<Vec<QuestionView>>, ServerError> {
    let questions = state.engine.active_questions().await?;

    Ok(Json(
        questions
            .into_iter()
            .map(|question| QuestionView {
                id: question.id,
                question: question.question,
                choices_array: question.choices_array,
            })
            .collect(),
    ))
}
