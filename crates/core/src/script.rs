use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_clicks() -> u32 {
    1
}

fn default_click_interval() -> f64 {
    0.25
}

fn default_type_interval() -> f64 {
    0.05
}

/// One primitive action together with the literal data it needs. Steps are
/// data, not code: a script never inspects the outcome of a prior step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionStep {
    /// Glide the pointer to (x, y) and click.
    MoveClick {
        x: i32,
        y: i32,
        #[serde(default = "default_clicks")]
        clicks: u32,
        /// Seconds between clicks when clicks > 1.
        #[serde(default = "default_click_interval")]
        interval: f64,
    },
    /// Type a literal string, one keystroke per character.
    TypeText {
        text: String,
        /// Seconds between keystrokes.
        #[serde(default = "default_type_interval")]
        interval: f64,
    },
    /// Press the named keys together, release in reverse order.
    PressCombo { keys: Vec<String> },
    /// Open-loop delay for the target application to settle.
    Wait { seconds: f64 },
}

impl fmt::Display for ActionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionStep::MoveClick { x, y, clicks, .. } => {
                write!(f, "click x{} at ({}, {})", clicks, x, y)
            }
            ActionStep::TypeText { text, .. } => write!(f, "type {:?}", text),
            ActionStep::PressCombo { keys } => write!(f, "press {}", keys.join("+")),
            ActionStep::Wait { seconds } => write!(f, "wait {}s", seconds),
        }
    }
}

/// A named, ordered action sequence for one human-observable goal. Built
/// once, never mutated at run time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskScript {
    pub name: String,
    pub steps: Vec<ActionStep>,
}

/// Load a routine override from a JSON file: an array of task scripts.
pub fn load_routine(path: &Path) -> Result<Vec<TaskScript>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let scripts: Vec<TaskScript> =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(scripts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_routine_with_defaults_applied() {
        let json = r#"[
            {
                "name": "smoke",
                "steps": [
                    { "action": "move_click", "x": 100, "y": 200 },
                    { "action": "type_text", "text": "hello", "interval": 0.01 },
                    { "action": "press_combo", "keys": ["ctrl", "s"] },
                    { "action": "wait", "seconds": 1.5 }
                ]
            }
        ]"#;
        let scripts: Vec<TaskScript> = serde_json::from_str(json).unwrap();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].name, "smoke");
        assert_eq!(scripts[0].steps.len(), 4);
        match &scripts[0].steps[0] {
            ActionStep::MoveClick { x, y, clicks, interval } => {
                assert_eq!((*x, *y), (100, 200));
                assert_eq!(*clicks, 1);
                assert_eq!(*interval, 0.25);
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn rejects_an_unknown_action_tag() {
        let json = r#"[{ "name": "bad", "steps": [{ "action": "teleport", "x": 1 }] }]"#;
        assert!(serde_json::from_str::<Vec<TaskScript>>(json).is_err());
    }
}
