use std::borrow::Cow;

/// A trait representing a command that can be applied to a target and then exactly reversed.
///
/// # Associated Types
///
/// * `Target`: The type the command mutates.
///
/// # Required Methods
///
/// * `apply(&mut self, target: &mut Self::Target)`: Applies the command to the target.
/// * `reverse(&mut self, target: &mut Self::Target)`: Restores the target to its state before `apply`.
///
/// # Provided Methods
///
/// * `description(&self) -> Cow<str>`: Returns a description of the command. The default implementation returns "Unknown command".
///
/// A command is applied at most once, and reversed at most once after that. Calling `reverse`
/// is only guaranteed to restore the previous state when no other un-reversed command has been
/// applied to the target in between.
///
/// # Example
///
/// ```
/// use command_list::prelude::ReversibleCommand;
///
/// struct Push(Option<char>);
///
/// impl ReversibleCommand for Push {
///     type Target = String;
///
///     fn apply(&mut self, target: &mut String) {
///         if let Some(c) = self.0.take() {
///             target.push(c);
///         }
///     }
///
///     fn reverse(&mut self, target: &mut String) {
///         self.0 = target.pop();
///     }
/// }
///
/// let mut text = String::from("ab");
/// let mut push = Push(Some('c'));
/// push.apply(&mut text);
/// assert_eq!(text, "abc");
/// push.reverse(&mut text);
/// assert_eq!(text, "ab");
/// assert_eq!(push.description(), "Unknown command");
/// ```
pub trait ReversibleCommand {
    type Target: ?Sized;

    /// Applies the command to the target.
    ///
    /// # Arguments
    ///
    /// * `target` - A mutable reference to the value the command operates on.
    fn apply(&mut self, target: &mut Self::Target);

    /// Reverses a previous `apply` on the same target.
    ///
    /// # Arguments
    ///
    /// * `target` - A mutable reference to the value the command operates on.
    fn reverse(&mut self, target: &mut Self::Target);

    /// Returns a description of the command. The default implementation returns "Unknown command".
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Unknown command")
    }
}
