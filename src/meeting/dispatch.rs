//! Sub-command lookup tables.
//!
//! Handlers that accept sub-commands (`help <topic>`, `hum <action>`)
//! declare a static table of names and functions. Unknown names go to the
//! handler's fallback.

use super::command::split_first_word;

/// A sub-command function: `(handler, rest, sender) -> replies`.
pub type SubCommandFn<H> = fn(&mut H, &str, &str) -> Vec<String>;

/// A handler that dispatches on the first word of its input.
pub trait SubCommandHandler: Sized + 'static {
    /// The table of sub-command names. Lookup is exact and case-sensitive.
    fn sub_commands() -> &'static [(&'static str, SubCommandFn<Self>)];

    /// Handle a sub-command that is not in the table.
    fn fallback(&mut self, command: &str, rest: &str, sender: &str) -> Vec<String>;

    /// Look up a sub-command by name.
    fn lookup(name: &str) -> Option<SubCommandFn<Self>> {
        Self::sub_commands()
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, func)| *func)
    }

    /// Dispatch the text following the handler's keyword.
    fn handle(&mut self, rest: &str, sender: &str) -> Vec<String> {
        if rest.is_empty() {
            return self.fallback("", "", sender);
        }

        let (command, rest) = split_first_word(rest);
        match Self::lookup(command) {
            Some(func) => func(self, rest, sender),
            None => self.fallback(command, rest, sender),
        }
    }
}
