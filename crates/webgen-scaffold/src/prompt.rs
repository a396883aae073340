//! Prompt collection
//!
//! The rendering of prompts is delegated to a [`Prompter`]. This module owns
//! the question list, default substitution, and conversion of raw answers
//! into [`Answers`].

use camino::Utf8Path;
use std::collections::HashMap;
use tracing::debug;
use webgen_core::config::PromptConfig;
use webgen_core::utils::dir_base_name;
use webgen_core::{Answers, Error, Result};

pub const KEY_NAME: &str = "name";
pub const KEY_DESCRIPTION: &str = "description";
pub const KEY_ENABLE_VCS: &str = "enable_vcs";

/// Renders a single question and reads the user's reply.
///
/// Returning `Ok(None)` means the user cancelled input.
pub trait Prompter: Send {
    /// Ask for free text; an empty reply means "use the default"
    fn input(&mut self, message: &str, default: &str) -> Result<Option<String>>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>>;
}

/// How the default for a text question is computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultRule {
    Literal(String),
    /// Base name of the directory webgen was started from
    CurrentDirName,
}

impl DefaultRule {
    fn resolve(&self, cwd: &Utf8Path) -> String {
        match self {
            Self::Literal(value) => value.clone(),
            Self::CurrentDirName => dir_base_name(cwd).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Input { default: DefaultRule },
    Confirm { default: bool },
}

/// One entry in the ordered question list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub key: &'static str,
    pub message: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn input(key: &'static str, message: impl Into<String>, default: DefaultRule) -> Self {
        Self {
            key,
            message: message.into(),
            kind: QuestionKind::Input { default },
        }
    }

    pub fn confirm(key: &'static str, message: impl Into<String>, default: bool) -> Self {
        Self {
            key,
            message: message.into(),
            kind: QuestionKind::Confirm { default },
        }
    }
}

/// A single collected answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    Flag(bool),
}

/// Answers keyed by question key; covers every question asked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet(HashMap<String, AnswerValue>);

impl AnswerSet {
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn text(&self, key: &str) -> Result<&str> {
        match self.0.get(key) {
            Some(AnswerValue::Text(value)) => Ok(value.as_str()),
            _ => Err(Error::missing_answer(key)),
        }
    }

    fn flag(&self, key: &str) -> Result<bool> {
        match self.0.get(key) {
            Some(AnswerValue::Flag(value)) => Ok(*value),
            _ => Err(Error::missing_answer(key)),
        }
    }
}

/// The three questions asked for every project
pub fn project_questions(config: &PromptConfig) -> Vec<Question> {
    vec![
        Question::input(KEY_NAME, "Your Project Name", DefaultRule::CurrentDirName),
        Question::input(
            KEY_DESCRIPTION,
            "Project Description",
            DefaultRule::Literal(config.default_description.clone()),
        ),
        Question::confirm(
            KEY_ENABLE_VCS,
            "Do you want to enable git as well?",
            config.default_enable_vcs,
        ),
    ]
}

/// Ask every question in order, substituting defaults for empty replies.
///
/// Cancelling any question aborts the whole collection with
/// [`Error::UserAbort`]; no partial answer set is returned.
pub fn collect(
    prompter: &mut dyn Prompter,
    questions: &[Question],
    cwd: &Utf8Path,
) -> Result<AnswerSet> {
    let mut answers = HashMap::with_capacity(questions.len());

    for question in questions {
        let value = match &question.kind {
            QuestionKind::Input { default } => {
                let default = default.resolve(cwd);
                let reply = prompter
                    .input(&question.message, &default)?
                    .ok_or(Error::UserAbort)?;
                let reply = reply.trim();
                if reply.is_empty() {
                    AnswerValue::Text(default)
                } else {
                    AnswerValue::Text(reply.to_string())
                }
            }
            QuestionKind::Confirm { default } => {
                let reply = prompter
                    .confirm(&question.message, *default)?
                    .ok_or(Error::UserAbort)?;
                AnswerValue::Flag(reply)
            }
        };
        debug!("Answer {} = {:?}", question.key, value);
        answers.insert(question.key.to_string(), value);
    }

    Ok(AnswerSet(answers))
}

/// Convert a collected answer set into [`Answers`], deriving `create_dir`
pub fn into_answers(set: &AnswerSet, cwd: &Utf8Path) -> Result<Answers> {
    let name = set.text(KEY_NAME)?;
    if name.is_empty() {
        return Err(Error::missing_answer(KEY_NAME));
    }
    let description = set.text(KEY_DESCRIPTION)?;
    let enable_vcs = set.flag(KEY_ENABLE_VCS)?;

    Ok(Answers::derive(name, description, enable_vcs, cwd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned replies; `None` simulates cancellation
    struct Scripted {
        texts: VecDeque<Option<String>>,
        flags: VecDeque<Option<bool>>,
        asked: Vec<(String, String)>,
    }

    impl Scripted {
        fn new(texts: Vec<Option<&str>>, flags: Vec<Option<bool>>) -> Self {
            Self {
                texts: texts.into_iter().map(|t| t.map(String::from)).collect(),
                flags: flags.into_iter().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for Scripted {
        fn input(&mut self, message: &str, default: &str) -> Result<Option<String>> {
            self.asked.push((message.to_string(), default.to_string()));
            Ok(self.texts.pop_front().flatten())
        }

        fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>> {
            self.asked.push((message.to_string(), default.to_string()));
            Ok(self.flags.pop_front().flatten())
        }
    }

    #[test]
    fn test_empty_replies_take_defaults() {
        let cwd = Utf8Path::new("/work/site");
        let questions = project_questions(&PromptConfig::default());
        let mut prompter = Scripted::new(vec![Some(""), Some("  ")], vec![Some(false)]);

        let set = collect(&mut prompter, &questions, cwd).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.get(KEY_NAME),
            Some(&AnswerValue::Text("site".to_string()))
        );
        assert_eq!(
            set.get(KEY_DESCRIPTION),
            Some(&AnswerValue::Text("A simple app description".to_string()))
        );

        let answers = into_answers(&set, cwd).unwrap();
        assert!(!answers.create_dir());
    }

    #[test]
    fn test_questions_asked_in_order_with_defaults() {
        let cwd = Utf8Path::new("/work/site");
        let questions = project_questions(&PromptConfig::default());
        let mut prompter = Scripted::new(vec![Some("demo"), Some("x")], vec![Some(true)]);

        let answers = into_answers(&collect(&mut prompter, &questions, cwd).unwrap(), cwd).unwrap();

        assert_eq!(prompter.asked.len(), 3);
        assert_eq!(prompter.asked[0].1, "site");
        assert_eq!(prompter.asked[1].1, "A simple app description");
        assert_eq!(prompter.asked[2].1, "false");
        assert_eq!(answers.name(), "demo");
        assert_eq!(answers.description(), "x");
        assert!(answers.enable_vcs());
        assert!(answers.create_dir());
    }

    #[test]
    fn test_cancel_aborts_without_partial_answers() {
        let cwd = Utf8Path::new("/work/site");
        let questions = project_questions(&PromptConfig::default());
        let mut prompter = Scripted::new(vec![Some("demo"), None], vec![Some(true)]);

        let result = collect(&mut prompter, &questions, cwd);
        assert!(matches!(result, Err(Error::UserAbort)));
        assert_eq!(prompter.asked.len(), 2);
    }

    #[test]
    fn test_cancel_on_confirm_aborts() {
        let cwd = Utf8Path::new("/work/site");
        let questions = project_questions(&PromptConfig::default());
        let mut prompter = Scripted::new(vec![Some("demo"), Some("x")], vec![None]);

        assert!(matches!(
            collect(&mut prompter, &questions, cwd),
            Err(Error::UserAbort)
        ));
    }

    #[test]
    fn test_empty_name_at_filesystem_root_is_rejected() {
        let cwd = Utf8Path::new("/");
        let questions = project_questions(&PromptConfig::default());
        let mut prompter = Scripted::new(vec![Some(""), Some("")], vec![Some(false)]);

        let set = collect(&mut prompter, &questions, cwd).unwrap();
        assert!(matches!(
            into_answers(&set, cwd),
            Err(Error::MissingAnswer { .. })
        ));
    }

    #[test]
    fn test_missing_key_is_reported() {
        let set = AnswerSet::default();
        assert!(matches!(
            into_answers(&set, Utf8Path::new("/work")),
            Err(Error::MissingAnswer { .. })
        ));
    }
}
