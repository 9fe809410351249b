use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{de::Deserializer, Deserialize, Serialize};

/// User-facing actions that keys can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    CloseOverlay,
    OpenAbout,
    OpenSkills,
    OpenProjects,
    OpenCertificates,
    OpenContacts,
    FlipProfile,
    NextCategory,
    ToggleProjectsView,
    NextPage,
    PrevPage,
    ScrollUp,
    ScrollDown,
    NextField,
    PrevField,
    Submit,
}

#[derive(Clone, Debug, Default)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl Deref for KeyBindings {
    type Target = HashMap<KeyEvent, Action>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for KeyBindings {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;
        let bindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(KeyBindings(bindings))
    }
}

impl KeyBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        // Terminals disagree about reporting SHIFT with uppercase characters
        let normalized = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
        self.get(&KeyEvent::new(key.code, key.modifiers))
            .or_else(|| self.get(&normalized))
            .copied()
    }
}

/// Parse a binding such as `<q>`, `<ctrl-c>` or `<esc>`
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(raw);
    if inner.is_empty() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let (modifiers, rest) = extract_modifiers(inner);
    let code = parse_key_code(rest).ok_or_else(|| format!("Unable to parse `{raw}`"))?;
    Ok(KeyEvent::new(code, modifiers))
}

fn extract_modifiers(raw: &str) -> (KeyModifiers, &str) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        let lower = current.to_ascii_lowercase();
        if lower.starts_with("ctrl-") && current.len() > 5 {
            modifiers.insert(KeyModifiers::CONTROL);
            current = &current[5..];
        } else if lower.starts_with("alt-") && current.len() > 4 {
            modifiers.insert(KeyModifiers::ALT);
            current = &current[4..];
        } else if lower.starts_with("shift-") && current.len() > 6 {
            modifiers.insert(KeyModifiers::SHIFT);
            current = &current[6..];
        } else {
            break;
        }
    }

    (modifiers, current)
}

fn parse_key_code(raw: &str) -> Option<KeyCode> {
    let code = match raw.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        _ => {
            let mut chars = raw.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(code)
}
