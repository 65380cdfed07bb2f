//! Fixed instruction templates sent to the generation client
//!
//! User text is interpolated verbatim, without escaping.

use indoc::indoc;

const FLASHCARD_PREAMBLE: &str = indoc! {"
    You are a study assistant that writes flashcards from a learner's notes.
    Create concise flashcards covering the key facts and concepts in the notes below.

    Output format, repeated once per flashcard:
    Question: <question on a single line>
    Answer: <answer on a single line>

    Do not number the flashcards. Do not add headings, explanations, or any other text.

    Notes:
"};

const EVALUATION_PREAMBLE: &str = indoc! {"
    You are grading a learner's answer to a flashcard.
    Decide whether the learner's answer means the same thing as the correct answer.
    Ignore differences in wording, spelling, and capitalization.
    Reply with only \"Yes\" or \"No\".
"};

/// Build the flashcard-generation prompt for trimmed, non-empty study text
pub fn flashcard_prompt(text: &str) -> String {
    format!("{FLASHCARD_PREAMBLE}{text}")
}

/// Build the prompt asking whether `candidate` matches `reference`
pub fn evaluation_prompt(candidate: &str, reference: &str) -> String {
    format!("{EVALUATION_PREAMBLE}\nCorrect answer: {reference}\nLearner's answer: {candidate}")
}
