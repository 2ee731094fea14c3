//! Application state and core logic

use crate::config::SurveyTuiConfig;
use crate::questions::{QuestionClient, QuestionSource};
use crate::state::{
    Field, FieldKind, Question, SubmitOutcome, SurveyForm, SurveySubmission, Topic,
};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Completion message from a spawned question fetch
#[derive(Debug)]
struct FetchComplete {
    generation: u64,
    topic: Topic,
    result: Result<Vec<Question>>,
}

/// Main application struct
pub struct App {
    /// The form engine
    pub form: SurveyForm,
    /// Question endpoint handle, shared with fetch tasks
    questions: Arc<dyn QuestionSource>,
    /// True while the latest topic fetch is outstanding
    pub questions_loading: bool,
    /// Tag of the most recently issued fetch; older completions are stale
    fetch_generation: u64,
    fetch_tx: mpsc::UnboundedSender<FetchComplete>,
    fetch_rx: mpsc::UnboundedReceiver<FetchComplete>,
    /// Transient status line content
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance over the configured HTTP question endpoint
    pub fn new(config: &SurveyTuiConfig) -> Self {
        Self::with_question_source(Arc::new(QuestionClient::new(config)))
    }

    /// Create an App over an arbitrary question source (mocked in tests)
    pub fn with_question_source(questions: Arc<dyn QuestionSource>) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        Self {
            form: SurveyForm::new(),
            questions,
            questions_loading: false,
            fetch_generation: 0,
            fetch_tx,
            fetch_rx,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Modifier shortcuts first so plain chars still reach the fields
        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER))
        {
            self.submit();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter if self.form.is_submit_row_active() => self.submit(),
            KeyCode::Enter => {
                // Enter in the feedback field adds a newline
                if let Some(field) = self.form.active_field() {
                    if field.kind() == FieldKind::Multiline {
                        let mut value = self.form.values.get(field).to_string();
                        value.push('\n');
                        self.apply_change(field, value);
                    }
                }
            }
            KeyCode::Left => self.cycle_select(-1),
            KeyCode::Right => self.cycle_select(1),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.input_char(c),
            _ => {}
        }
    }

    fn input_char(&mut self, c: char) {
        let Some(field) = self.form.active_field() else {
            return;
        };
        match field.kind() {
            FieldKind::Select(_) => {
                // Space steps through the options; anything else is ignored
                if c == ' ' {
                    self.cycle_select(1);
                }
            }
            FieldKind::Number => {
                if c.is_ascii_digit() || c == '.' || c == '-' {
                    let mut value = self.form.values.get(field).to_string();
                    value.push(c);
                    self.apply_change(field, value);
                }
            }
            FieldKind::Text | FieldKind::Multiline => {
                let mut value = self.form.values.get(field).to_string();
                value.push(c);
                self.apply_change(field, value);
            }
        }
    }

    fn backspace(&mut self) {
        let Some(field) = self.form.active_field() else {
            return;
        };
        if matches!(field.kind(), FieldKind::Select(_)) {
            return;
        }
        let mut value = self.form.values.get(field).to_string();
        if value.pop().is_some() {
            self.apply_change(field, value);
        }
    }

    fn cycle_select(&mut self, step: i32) {
        let Some(field) = self.form.active_field() else {
            return;
        };
        let FieldKind::Select(options) = field.kind() else {
            return;
        };
        let current = self.form.values.get(field);
        let next = match options.iter().position(|option| *option == current) {
            Some(index) => {
                let len = options.len() as i32;
                options[(index as i32 + step).rem_euclid(len) as usize]
            }
            // Unset: step right lands on the first option, left on the last
            None if step < 0 => options[options.len() - 1],
            None => options[0],
        };
        self.apply_change(field, next.to_string());
    }

    /// Route a raw value through the engine and react to topic changes
    fn apply_change(&mut self, field: Field, raw_value: String) {
        let topic_before = self.form.values.topic();
        self.form.handle_change(field, raw_value);

        if field == Field::SurveyTopic {
            let topic_after = self.form.values.topic();
            if topic_after != topic_before {
                if let Some(topic) = topic_after {
                    self.spawn_question_fetch(topic);
                }
            }
        }
    }

    /// Spawn the fetch for a newly selected topic. Fetches are never
    /// cancelled; completions are matched against the latest generation
    /// and stale ones discarded on arrival.
    fn spawn_question_fetch(&mut self, topic: Topic) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.questions_loading = true;

        let questions = Arc::clone(&self.questions);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = questions.fetch_questions(topic).await;
            let _ = tx.send(FetchComplete {
                generation,
                topic,
                result,
            });
        });
    }

    /// Drain and apply fetch completions. Called once per event-loop pass.
    pub fn poll_fetches(&mut self) {
        while let Ok(complete) = self.fetch_rx.try_recv() {
            self.apply_fetch(complete);
        }
    }

    fn apply_fetch(&mut self, complete: FetchComplete) {
        if complete.generation != self.fetch_generation {
            tracing::debug!(
                topic = complete.topic.label(),
                "discarding stale question fetch"
            );
            return;
        }

        self.questions_loading = false;
        match complete.result {
            Ok(questions) => {
                self.form
                    .set_values(|values| values.additional_questions = questions);
            }
            Err(error) => {
                // Best-effort enrichment: log and leave the list unchanged
                tracing::error!("error fetching additional questions: {error:#}");
            }
        }
    }

    /// Run a submit attempt and perform the success handoff
    fn submit(&mut self) {
        match self.form.handle_submit() {
            SubmitOutcome::Accepted => {
                let submission = SurveySubmission {
                    submitted_at: Utc::now(),
                    values: self.form.values.clone(),
                };
                match serde_json::to_string(&submission) {
                    Ok(payload) => tracing::info!(%payload, "survey submitted"),
                    Err(error) => tracing::error!("failed to serialize submission: {error}"),
                }
                self.status_message = Some("Survey submitted. Thank you!".to_string());
            }
            SubmitOutcome::Rejected => {
                tracing::debug!(
                    fields = ?self.form.errors.keys().map(|f| f.name()).collect::<Vec<_>>(),
                    "submission blocked by validation"
                );
                self.status_message = Some("Please fix the highlighted fields".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::MockQuestionSource;
    use anyhow::anyhow;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_questions(topic: Topic) -> Vec<Question> {
        vec![Question {
            id: 1,
            title: format!("{} follow-up", topic.label()),
        }]
    }

    /// App backed by a mock that answers every topic with sample questions
    fn app_with_questions() -> App {
        let mut mock = MockQuestionSource::new();
        mock.expect_fetch_questions()
            .returning(|topic| Ok(sample_questions(topic)));
        App::with_question_source(Arc::new(mock))
    }

    /// Receive and apply exactly one fetch completion
    async fn drain_one_fetch(app: &mut App) {
        let complete = app.fetch_rx.recv().await.expect("a fetch should complete");
        app.apply_fetch(complete);
    }

    fn fill_education_survey(app: &mut App) {
        app.apply_change(Field::FullName, "A".to_string());
        app.apply_change(Field::Email, "a@b.com".to_string());
        app.apply_change(Field::SurveyTopic, "Education".to_string());
        app.apply_change(Field::HighestQualification, "PhD".to_string());
        app.apply_change(Field::FieldOfStudy, "CS".to_string());
        app.apply_change(Field::Feedback, "z".repeat(50));
    }

    mod key_handling {
        use super::*;

        #[tokio::test]
        async fn test_typed_chars_land_in_the_active_field() {
            let mut app = app_with_questions();
            app.handle_key(key(KeyCode::Char('A')));
            app.handle_key(key(KeyCode::Char('d')));
            app.handle_key(key(KeyCode::Char('a')));
            assert_eq!(app.form.values.full_name, "Ada");
            assert!(!app.form.errors.contains_key(&Field::FullName));
        }

        #[tokio::test]
        async fn test_backspace_removes_the_last_char() {
            let mut app = app_with_questions();
            app.handle_key(key(KeyCode::Char('A')));
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.form.values.full_name, "");
            // Backspace on an already-empty field is a no-op
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.form.values.full_name, "");
        }

        #[tokio::test]
        async fn test_tab_and_backtab_move_the_cursor() {
            let mut app = app_with_questions();
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.form.active_field(), Some(Field::Email));
            app.handle_key(key(KeyCode::BackTab));
            assert_eq!(app.form.active_field(), Some(Field::FullName));
        }

        #[tokio::test]
        async fn test_select_cycles_with_arrows() {
            let mut app = app_with_questions();
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.form.active_field(), Some(Field::SurveyTopic));

            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.form.values.survey_topic, "Technology");
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.form.values.survey_topic, "Health");
            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.form.values.survey_topic, "Technology");
        }

        #[tokio::test]
        async fn test_typing_into_a_select_is_ignored() {
            let mut app = app_with_questions();
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Char('x')));
            assert_eq!(app.form.values.survey_topic, "");
        }

        #[tokio::test]
        async fn test_number_field_rejects_letters() {
            let mut app = app_with_questions();
            app.form
                .handle_change(Field::SurveyTopic, "Technology".to_string());
            while app.form.active_field() != Some(Field::YearsExperience) {
                app.handle_key(key(KeyCode::Tab));
            }
            app.handle_key(key(KeyCode::Char('x')));
            app.handle_key(key(KeyCode::Char('3')));
            assert_eq!(app.form.values.years_experience, "3");
        }

        #[tokio::test]
        async fn test_enter_adds_newline_only_in_feedback() {
            let mut app = app_with_questions();
            while app.form.active_field() != Some(Field::Feedback) {
                app.handle_key(key(KeyCode::Tab));
            }
            app.handle_key(key(KeyCode::Char('a')));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.form.values.feedback, "a\n");
        }

        #[tokio::test]
        async fn test_esc_requests_quit() {
            let mut app = app_with_questions();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }
    }

    mod question_fetch {
        use super::*;

        #[tokio::test]
        async fn test_topic_selection_fetches_and_merges_questions() {
            let mut app = app_with_questions();
            fill_education_survey(&mut app);
            let values_before = app.form.values.clone();

            assert!(app.questions_loading);
            drain_one_fetch(&mut app).await;

            assert!(!app.questions_loading);
            assert_eq!(
                app.form.values.additional_questions,
                sample_questions(Topic::Education)
            );
            // Nothing but the question list moved
            assert_eq!(app.form.values.full_name, values_before.full_name);
            assert_eq!(app.form.values.feedback, values_before.feedback);
            assert_eq!(app.form.values.survey_topic, values_before.survey_topic);
        }

        #[tokio::test]
        async fn test_non_topic_changes_do_not_fetch() {
            let mut app = app_with_questions();
            app.apply_change(Field::FullName, "Ada".to_string());
            app.apply_change(Field::Feedback, "typing away".to_string());
            assert!(!app.questions_loading);
            assert!(app.fetch_rx.try_recv().is_err());
        }

        #[tokio::test]
        async fn test_failed_fetch_clears_loading_and_keeps_list() {
            let mut mock = MockQuestionSource::new();
            mock.expect_fetch_questions()
                .returning(|_| Err(anyhow!("endpoint unreachable")));
            let mut app = App::with_question_source(Arc::new(mock));

            app.form.set_values(|values| {
                values.additional_questions = sample_questions(Topic::Health);
            });
            app.apply_change(Field::SurveyTopic, "Technology".to_string());
            assert!(app.questions_loading);

            drain_one_fetch(&mut app).await;
            assert!(!app.questions_loading);
            // The previous list survives a failed refresh
            assert_eq!(
                app.form.values.additional_questions,
                sample_questions(Topic::Health)
            );
        }

        #[tokio::test]
        async fn test_stale_completion_is_discarded() {
            let mut app = app_with_questions();
            app.apply_change(Field::SurveyTopic, "Technology".to_string());
            app.apply_change(Field::SurveyTopic, "Health".to_string());

            let first = app.fetch_rx.recv().await.unwrap();
            let second = app.fetch_rx.recv().await.unwrap();
            // Apply out of order: the slow old fetch lands after the new one
            app.apply_fetch(second);
            app.apply_fetch(first);

            assert!(!app.questions_loading);
            assert_eq!(
                app.form.values.additional_questions,
                sample_questions(Topic::Health)
            );
        }

        #[tokio::test]
        async fn test_loading_survives_a_stale_completion() {
            let mut app = app_with_questions();
            app.apply_change(Field::SurveyTopic, "Technology".to_string());
            let first = app.fetch_rx.recv().await.unwrap();
            app.apply_change(Field::SurveyTopic, "Education".to_string());

            // The stale result arrives while the newer fetch is outstanding
            app.apply_fetch(first);
            assert!(app.questions_loading);
            assert!(app.form.values.additional_questions.is_empty());

            drain_one_fetch(&mut app).await;
            assert!(!app.questions_loading);
        }

        #[tokio::test]
        async fn test_reselecting_the_same_topic_does_not_refetch() {
            let mut app = app_with_questions();
            app.apply_change(Field::SurveyTopic, "Health".to_string());
            drain_one_fetch(&mut app).await;

            app.apply_change(Field::SurveyTopic, "Health".to_string());
            assert!(!app.questions_loading);
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_complete_education_survey_is_accepted() {
            let mut app = app_with_questions();
            fill_education_survey(&mut app);

            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            assert_eq!(
                app.status_message.as_deref(),
                Some("Survey submitted. Thank you!")
            );
            assert!(app.form.errors.is_empty());
        }

        #[tokio::test]
        async fn test_incomplete_survey_is_rejected() {
            let mut app = app_with_questions();
            fill_education_survey(&mut app);
            app.form.handle_change(Field::FieldOfStudy, String::new());

            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            assert_eq!(
                app.status_message.as_deref(),
                Some("Please fix the highlighted fields")
            );
            assert_eq!(app.form.errors.len(), 1);
        }

        #[tokio::test]
        async fn test_enter_on_submit_row_submits() {
            let mut app = app_with_questions();
            fill_education_survey(&mut app);
            while !app.form.is_submit_row_active() {
                app.handle_key(key(KeyCode::Tab));
            }
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(
                app.status_message.as_deref(),
                Some("Survey submitted. Thank you!")
            );
        }
    }
}
