use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Structural problem found in the content catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateItem { name: String },
    CorrectAnswerOutOfRange { location: LocationId, riddle: usize, correct: usize, options: usize },
    EmptyText { location: LocationId, context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateItem { name } => {
                write!(f, "duplicate item name '{name}'")
            },
            ValidationError::CorrectAnswerOutOfRange {
                location,
                riddle,
                correct,
                options,
            } => {
                write!(
                    f,
                    "{location} riddle {riddle}: correct answer {correct} is outside its {options} options"
                )
            },
            ValidationError::EmptyText { location, context } => {
                write!(f, "{location}: empty text ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate basic invariants across a set of locations.
///
/// ```
/// use chronicles_data::{locations, validate_catalog};
///
/// let all: Vec<_> = locations().collect();
/// assert!(validate_catalog(&all).is_empty());
/// ```
pub fn validate_catalog(locations: &[&LocationDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for loc in locations {
        for item in &loc.items {
            if !seen.insert(item.name) {
                errors.push(ValidationError::DuplicateItem {
                    name: item.name.to_string(),
                });
            }
            if item.name.trim().is_empty() {
                errors.push(empty(loc.id, "item name"));
            }
        }

        for (idx, riddle) in loc.riddles.iter().enumerate() {
            if riddle.correct >= riddle.options.len() {
                errors.push(ValidationError::CorrectAnswerOutOfRange {
                    location: loc.id,
                    riddle: idx + 1,
                    correct: riddle.correct,
                    options: riddle.options.len(),
                });
            }
            if riddle.question.trim().is_empty() {
                errors.push(empty(loc.id, &format!("riddle {} question", idx + 1)));
            }
        }

        for (idx, label) in loc.options.iter().enumerate() {
            if label.trim().is_empty() {
                errors.push(empty(loc.id, &format!("option {}", idx + 1)));
            }
        }

        if loc.name.trim().is_empty() {
            errors.push(empty(loc.id, "name"));
        }
        if loc.description.trim().is_empty() {
            errors.push(empty(loc.id, "description"));
        }
    }

    errors
}

fn empty(location: LocationId, context: &str) -> ValidationError {
    ValidationError::EmptyText {
        location,
        context: context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_is_valid() {
        let all: Vec<_> = locations().collect();
        assert_eq!(validate_catalog(&all), Vec::new());
    }

    #[test]
    fn detects_out_of_range_answer() {
        let mut broken = CASTLE;
        broken.riddles[1].correct = 3;
        let errors = validate_catalog(&[&broken]);
        assert_eq!(
            errors,
            vec![ValidationError::CorrectAnswerOutOfRange {
                location: LocationId::Castle,
                riddle: 2,
                correct: 3,
                options: 3,
            }]
        );
    }

    #[test]
    fn detects_duplicate_item_across_locations() {
        let mut copy = ISLAND;
        copy.items[0].name = "Ancient Key";
        let errors = validate_catalog(&[&CASTLE, &copy]);
        assert!(errors.contains(&ValidationError::DuplicateItem {
            name: "Ancient Key".into()
        }));
    }

    #[test]
    fn detects_blank_option_label() {
        let mut copy = VILLAGE;
        copy.options[3] = "  ";
        let errors = validate_catalog(&[&copy]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("option 4"));
    }
}
