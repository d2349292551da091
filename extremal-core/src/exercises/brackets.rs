//! Bracket balance checking with an explicit stack.

use crate::error::ExerciseError;

fn closer_for(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Validates `(`, `[` and `{` nesting, ignoring every other character.
///
/// Returns the first offending closer, or the innermost opener still
/// unclosed at the end of the input.
pub fn check_brackets(input: &str) -> Result<(), ExerciseError> {
    let mut stack: Vec<(usize, char)> = Vec::new();

    for (offset, c) in input.char_indices() {
        if closer_for(c).is_some() {
            stack.push((offset, c));
        } else if is_closer(c) {
            match stack.pop() {
                Some((_, opener)) if closer_for(opener) == Some(c) => {}
                popped => {
                    return Err(ExerciseError::UnexpectedCloser {
                        offset,
                        found: c,
                        expected: popped.and_then(|(_, opener)| closer_for(opener)),
                    });
                }
            }
        }
    }

    match stack.pop() {
        Some((offset, opener)) => Err(ExerciseError::Unclosed { offset, opener }),
        None => Ok(()),
    }
}

/// Shorthand for `check_brackets(input).is_ok()`.
pub fn is_balanced(input: &str) -> bool {
    check_brackets(input).is_ok()
}
