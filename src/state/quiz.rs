//! Quiz state machine
//!
//! `Idle -> AwaitingQuizAnswer -> Idle`. One random question per round; the
//! stored question index is the source of truth when the answer arrives.

use thiserror::Error;
use crate::content::QuizQuestion;
use crate::routing::RandomSource;
use super::session::Session;

/// Outcome of an answered question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizVerdict {
    Correct,
    Incorrect { correct_answer: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("no quiz question is awaiting an answer")]
    NotAwaitingAnswer,

    #[error("question {0} no longer exists")]
    QuestionOutOfRange(usize),

    #[error("option {option} is out of range for question {question}")]
    OptionOutOfRange { question: usize, option: usize },

    #[error("question bank is empty")]
    NoQuestions,
}

/// Pick a question uniformly at random and enter `AwaitingQuizAnswer`
pub fn start(
    questions: &[QuizQuestion],
    random: &dyn RandomSource,
) -> Result<(usize, Session), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::NoQuestions);
    }

    let question_index = random.pick(questions.len());
    let question = questions
        .get(question_index)
        .ok_or(QuizError::QuestionOutOfRange(question_index))?;
    let session = Session::AwaitingQuizAnswer {
        question_index,
        correct_answer: question.correct_answer.clone(),
    };
    Ok((question_index, session))
}

/// Evaluate the selected option and return to `Idle` regardless of the
/// verdict
pub fn answer(
    session: &Session,
    questions: &[QuizQuestion],
    option_index: usize,
) -> Result<(QuizVerdict, Session), QuizError> {
    let Session::AwaitingQuizAnswer { question_index, correct_answer } = session else {
        return Err(QuizError::NotAwaitingAnswer);
    };

    let question = questions
        .get(*question_index)
        .ok_or(QuizError::QuestionOutOfRange(*question_index))?;
    let selected = question.options.get(option_index).ok_or(QuizError::OptionOutOfRange {
        question: *question_index,
        option: option_index,
    })?;

    let verdict = if selected == correct_answer {
        QuizVerdict::Correct
    } else {
        QuizVerdict::Incorrect {
            correct_answer: correct_answer.clone(),
        }
    };

    Ok((verdict, Session::Idle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::SeededRandom;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn pick(&self, len: usize) -> usize {
            self.0 % len
        }
    }

    fn questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion {
                question: "Q0".into(),
                options: vec!["A".into(), "B".into(), "C".into()],
                correct_answer: "B".into(),
            },
            QuizQuestion {
                question: "Q1".into(),
                options: vec!["X".into(), "Y".into()],
                correct_answer: "Y".into(),
            },
        ]
    }

    #[test]
    fn test_start_stores_index_and_answer() {
        let (index, session) = start(&questions(), &Fixed(1)).unwrap();
        assert_eq!(index, 1);
        assert_eq!(
            session,
            Session::AwaitingQuizAnswer { question_index: 1, correct_answer: "Y".into() }
        );
    }

    #[test]
    fn test_start_with_seeded_source_stays_in_range() {
        let random = SeededRandom::new(11);
        for _ in 0..50 {
            let (index, _) = start(&questions(), &random).unwrap();
            assert!(index < 2);
        }
    }

    #[test]
    fn test_start_rejects_out_of_range_pick() {
        struct PastTheEnd;
        impl RandomSource for PastTheEnd {
            fn pick(&self, len: usize) -> usize {
                len
            }
        }

        assert_eq!(start(&questions(), &PastTheEnd).unwrap_err(), QuizError::QuestionOutOfRange(2));
    }

    #[test]
    fn test_start_on_empty_bank() {
        assert_eq!(start(&[], &Fixed(0)).unwrap_err(), QuizError::NoQuestions);
    }

    #[test]
    fn test_correct_answer() {
        let (_, session) = start(&questions(), &Fixed(0)).unwrap();
        let (verdict, next) = answer(&session, &questions(), 1).unwrap();
        assert_eq!(verdict, QuizVerdict::Correct);
        assert_eq!(next, Session::Idle);
    }

    #[test]
    fn test_incorrect_answers_name_the_correct_one() {
        let (_, session) = start(&questions(), &Fixed(0)).unwrap();
        for option in [0, 2] {
            let (verdict, next) = answer(&session, &questions(), option).unwrap();
            assert_eq!(verdict, QuizVerdict::Incorrect { correct_answer: "B".into() });
            assert_eq!(next, Session::Idle);
        }
    }

    #[test]
    fn test_out_of_range_option() {
        let (_, session) = start(&questions(), &Fixed(1)).unwrap();
        assert_eq!(
            answer(&session, &questions(), 2).unwrap_err(),
            QuizError::OptionOutOfRange { question: 1, option: 2 }
        );
    }

    #[test]
    fn test_answer_outside_quiz() {
        assert_eq!(answer(&Session::Idle, &questions(), 0).unwrap_err(), QuizError::NotAwaitingAnswer);
    }

    #[test]
    fn test_stale_question_index() {
        let session = Session::AwaitingQuizAnswer { question_index: 7, correct_answer: "B".into() };
        assert_eq!(answer(&session, &questions(), 0).unwrap_err(), QuizError::QuestionOutOfRange(7));
    }
}
