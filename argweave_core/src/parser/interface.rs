use crate::error::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const TARGET_TOTAL_FACTOR: f64 = 0.95;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Renders a left column followed by a word-wrapped middle column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnRenderer {
    padding: usize,
    left: usize,
    middle: usize,
}

impl ColumnRenderer {
    /// Produce a renderer that fits within the `total` width where possible.
    /// The middle column shrinks (down to a minimum) before anything else.
    pub(crate) fn guided(padding: usize, left: usize, middle: usize, total: usize) -> Self {
        let non_middle = left + padding;
        let target_total = (total as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle, MINIMUM_MIDDLE_WIDTH);

        if guided_middle + non_middle <= target_total {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} and middle fit within the target total {target_total}.  Selecting middle: {guided_middle}.");
            }

            Self::new(padding, left, guided_middle)
        } else if non_middle < total {
            let calculated_middle = std::cmp::max(total - non_middle, MINIMUM_MIDDLE_WIDTH);

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} fit within the total {total}.  Selecting middle: {calculated_middle}.");
            }

            Self::new(padding, left, calculated_middle)
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} do not fit within the total {total}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.");
            }

            Self::new(padding, left, MINIMUM_MIDDLE_WIDTH)
        }
    }

    pub(crate) fn new(padding: usize, left: usize, middle: usize) -> Self {
        Self {
            padding,
            left,
            // middle must be at least 2 (so we can hyphenate)
            middle: std::cmp::max(middle, 2),
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str) -> Vec<String> {
        let padding = " ".repeat(self.padding);
        let left_width = self.left;
        let middle_parts = chunk(middle, self.middle.saturating_sub(indent).max(2));

        if middle_parts.is_empty() {
            return vec![format!("{:indent$}{left}", "")];
        }

        middle_parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| {
                let left = if i == 0 { left } else { "" };
                format!("{:indent$}{:left_width$}{padding}{part}", "", left)
            })
            .collect()
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = String::default();
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: &ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &ParseError) {
        eprintln!("{error}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::error::ParseError;
    use crate::parser::UserInterface;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        messages: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn print_error(&self, error: &ParseError) {
            self.errors.borrow_mut().push(error.to_string());
        }
    }

    impl InMemoryInterface {
        /// The printed messages joined by newlines (or `None` if nothing was printed), and the printed errors.
        pub(crate) fn consume(self) -> (Option<String>, Vec<String>) {
            let InMemoryInterface { messages, errors } = self;
            let messages = messages.into_inner();
            let message = if messages.is_empty() {
                None
            } else {
                Some(messages.join("\n"))
            };

            (message, errors.into_inner())
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, errors) = self.consume();
            assert_eq!(errors, Vec::<String>::new());
            message.unwrap()
        }
    }
}
