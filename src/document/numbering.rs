//! Marker reconstruction for Word's automatic list numbering
//!
//! Word stores "1." or "a)" list prefixes as numbering properties rather than
//! text. Quiz authors often number questions and letter options that way, so
//! the markers are rebuilt here and prepended to the extracted paragraph text.

/// Counters for each (numId, level) combination
pub(crate) type NumberingCounters = std::collections::HashMap<(usize, usize), u32>;

/// Different numbering formats supported by Word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberingFormat {
    Decimal,     // 1. 2. 3.
    LowerLetter, // a) b) c)
    UpperLetter, // A) B) C)
    LowerRoman,  // i. ii. iii.
}

impl NumberingFormat {
    /// Default Word multilevel scheme, keyed by level
    pub(crate) fn for_level(level: usize) -> Self {
        match level {
            0 => NumberingFormat::Decimal,
            1 => NumberingFormat::LowerLetter,
            2 => NumberingFormat::LowerRoman,
            _ => NumberingFormat::UpperLetter,
        }
    }
}

/// Tracks list counters across a document to produce sequential markers
#[derive(Debug, Default)]
pub(crate) struct ListMarkerTracker {
    counters: NumberingCounters,
}

impl ListMarkerTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Next marker for a paragraph with the given numbering properties
    pub(crate) fn next_marker(&mut self, num_id: usize, level: usize) -> String {
        let counter_value = {
            let counter = self.counters.entry((num_id, level)).or_insert(0);
            *counter += 1;
            *counter
        };

        // 1. a) b) 2. a) -- deeper levels restart under a new parent item
        self.reset_deeper_levels(num_id, level);

        format_marker(counter_value, NumberingFormat::for_level(level))
    }

    fn reset_deeper_levels(&mut self, num_id: usize, current_level: usize) {
        self.counters
            .retain(|(id, level), _| *id != num_id || *level <= current_level);
    }
}

pub(crate) fn format_marker(counter: u32, format: NumberingFormat) -> String {
    match format {
        NumberingFormat::Decimal => format!("{counter}. "),
        NumberingFormat::LowerLetter => match letter(counter, b'a') {
            Some(letter) => format!("{letter}) "),
            None => format!("{counter}) "),
        },
        NumberingFormat::UpperLetter => match letter(counter, b'A') {
            Some(letter) => format!("{letter}) "),
            None => format!("{counter}) "),
        },
        NumberingFormat::LowerRoman => format!("{}. ", to_roman(counter).to_lowercase()),
    }
}

fn letter(counter: u32, base: u8) -> Option<char> {
    (1..=26)
        .contains(&counter)
        .then(|| (base + (counter - 1) as u8) as char)
}

fn to_roman(num: u32) -> String {
    let values = [1000, 900, 500, 400, 100, 90, 50, 40, 10, 9, 5, 4, 1];
    let symbols = [
        "M", "CM", "D", "CD", "C", "XC", "L", "XL", "X", "IX", "V", "IV", "I",
    ];

    let mut result = String::new();
    let mut n = num;

    for (i, &value) in values.iter().enumerate() {
        while n >= value {
            result.push_str(symbols[i]);
            n -= value;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_and_option_levels() {
        let mut tracker = ListMarkerTracker::new();

        assert_eq!(tracker.next_marker(1, 0), "1. ");
        assert_eq!(tracker.next_marker(1, 1), "a) ");
        assert_eq!(tracker.next_marker(1, 1), "b) ");
        assert_eq!(tracker.next_marker(1, 0), "2. ");
        // Options restart under the next question
        assert_eq!(tracker.next_marker(1, 1), "a) ");
    }

    #[test]
    fn test_separate_lists_count_independently() {
        let mut tracker = ListMarkerTracker::new();

        assert_eq!(tracker.next_marker(1, 0), "1. ");
        assert_eq!(tracker.next_marker(2, 0), "1. ");
        assert_eq!(tracker.next_marker(1, 0), "2. ");
    }

    #[test]
    fn test_formats() {
        assert_eq!(format_marker(3, NumberingFormat::UpperLetter), "C) ");
        assert_eq!(format_marker(27, NumberingFormat::LowerLetter), "27) ");
        assert_eq!(format_marker(4, NumberingFormat::LowerRoman), "iv. ");
    }
}
