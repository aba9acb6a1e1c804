//! Command enum for testable input handling
//!
//! Commands represent the intent of user input without side effects.
//! Key handlers return Commands which the viewer then executes.

use winit::keyboard::{Key, NamedKey};

/// Commands that can be produced by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // === Sliders ===
    /// Move the selection to the next slider
    SelectNext,
    /// Move the selection to the previous slider
    SelectPrevious,
    /// Raise the selected slider by one step
    Increase,
    /// Lower the selected slider by one step
    Decrease,
    /// Restore the selected slider to its default
    ResetSelected,
    /// Restore every slider to its default
    ResetAll,

    // === Sampler ===
    /// Switch between the rigid and warped variants
    ToggleVariant,

    // === Gallery ===
    NextImage,
    PreviousImage,

    /// Close the viewer
    Quit,
}

/// Map a key press to a command
///
/// `shift` only matters for Tab, where it reverses the slider selection.
pub fn command_for_key(key: &Key, shift: bool) -> Option<Command> {
    match key {
        Key::Named(named) => match named {
            NamedKey::Tab if shift => Some(Command::SelectPrevious),
            NamedKey::Tab | NamedKey::ArrowDown => Some(Command::SelectNext),
            NamedKey::ArrowUp => Some(Command::SelectPrevious),
            NamedKey::ArrowRight => Some(Command::Increase),
            NamedKey::ArrowLeft => Some(Command::Decrease),
            NamedKey::PageDown => Some(Command::NextImage),
            NamedKey::PageUp => Some(Command::PreviousImage),
            NamedKey::Escape => Some(Command::Quit),
            _ => None,
        },
        Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(Command::Increase),
            "-" | "_" => Some(Command::Decrease),
            "r" => Some(Command::ResetSelected),
            "R" => Some(Command::ResetAll),
            "v" | "V" => Some(Command::ToggleVariant),
            "n" | "N" | "]" => Some(Command::NextImage),
            "p" | "P" | "[" => Some(Command::PreviousImage),
            "q" | "Q" => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}
