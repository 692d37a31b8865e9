use crate::domain::entities::Message;

/// Extracts the symmetry argument from the command message.
pub struct ArgumentParser;

impl ArgumentParser {
    /// Returns the lowercased argument from the first non-blank text segment.
    ///
    /// A leading `command` token (with or without `/`) is skipped; a segment
    /// holding only the command token is ignored and scanning continues.
    #[must_use]
    pub fn extract(message: &Message, command: &str) -> Option<String> {
        for text in message.plain_texts() {
            let mut tokens = text.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };

            if Self::is_command(first, command) {
                if let Some(argument) = tokens.next() {
                    return Some(argument.to_lowercase());
                }
                continue;
            }

            return Some(first.to_lowercase());
        }
        None
    }

    fn is_command(token: &str, command: &str) -> bool {
        token
            .strip_prefix('/')
            .unwrap_or(token)
            .eq_ignore_ascii_case(command)
    }
}
