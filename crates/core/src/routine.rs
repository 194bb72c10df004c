use crate::script::{ActionStep, TaskScript};
use crate::types::ScreenGeometry;

// Everything in this module is layout data for one authored screen
// arrangement: coordinates, literal strings and delay budgets. The primitive
// layer knows nothing about any of it.

fn click(x: i32, y: i32) -> ActionStep {
    ActionStep::MoveClick { x, y, clicks: 1, interval: 0.25 }
}

fn type_text(text: &str) -> ActionStep {
    ActionStep::TypeText { text: text.to_string(), interval: 0.05 }
}

fn combo(keys: &[&str]) -> ActionStep {
    ActionStep::PressCombo { keys: keys.iter().map(|k| k.to_string()).collect() }
}

fn wait(seconds: f64) -> ActionStep {
    ActionStep::Wait { seconds }
}

/// Focus the mail client from the taskbar and reply to the first unread
/// email.
pub fn process_email(geom: &ScreenGeometry) -> TaskScript {
    TaskScript {
        name: "process-email".to_string(),
        steps: vec![
            // mail client shortcut sits on the taskbar, near the bottom edge
            click(100, geom.h as i32 - 5),
            wait(2.0),
            // first unread entry in the message list
            click(300, 200),
            wait(1.0),
            combo(&["ctrl", "r"]),
            wait(1.0),
            type_text("Thanks for the update. I’ll review and get back to you shortly."),
            combo(&["ctrl", "enter"]),
            wait(1.0),
        ],
    }
}

/// Switch to the calendar tab and create the weekly sync meeting.
pub fn schedule_meeting() -> TaskScript {
    TaskScript {
        name: "schedule-meeting".to_string(),
        steps: vec![
            combo(&["ctrl", "2"]),
            wait(1.0),
            // desired time slot in the week view
            click(600, 400),
            wait(0.5),
            combo(&["ctrl", "n"]),
            wait(1.0),
            type_text("Project Sync – Weekly"),
            combo(&["tab"]),
            type_text("Discuss progress, blockers, next steps."),
            combo(&["tab"]),
            type_text("10:00 AM – 10:30 AM"),
            combo(&["tab"]),
            type_text("Conference Room A"),
            wait(0.5),
            combo(&["tab"]),
            type_text("alice@example.com; bob@example.com; carol@example.com"),
            combo(&["enter"]),
            wait(0.5),
            combo(&["ctrl", "s"]),
            wait(0.5),
        ],
    }
}

/// Open the shared status report through the file explorer and append a
/// status line at the end.
pub fn update_document() -> TaskScript {
    TaskScript {
        name: "update-document".to_string(),
        steps: vec![
            combo(&["win", "e"]),
            wait(1.0),
            type_text(r"C:\Projects\Current\StatusReport.docx"),
            combo(&["enter"]),
            // the word processor takes a while to load the document
            wait(3.0),
            combo(&["ctrl", "end"]),
            wait(0.5),
            combo(&["enter"]),
            type_text("- Completed data ingestion; pending model validation."),
            wait(0.5),
            combo(&["ctrl", "s"]),
            wait(0.5),
            combo(&["alt", "f4"]),
            wait(0.5),
        ],
    }
}

/// Lock the workstation.
pub fn lock_workstation() -> TaskScript {
    TaskScript {
        name: "lock-workstation".to_string(),
        steps: vec![combo(&["win", "l"])],
    }
}

/// The full fixed routine, in execution order.
pub fn default_routine(geom: &ScreenGeometry) -> Vec<TaskScript> {
    vec![
        process_email(geom),
        schedule_meeting(),
        update_document(),
        lock_workstation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Key;

    #[test]
    fn routine_runs_the_four_tasks_in_order() {
        let geom = ScreenGeometry::new(1920, 1080, 10);
        let names: Vec<_> = default_routine(&geom).iter().map(|s| s.name.clone()).collect();
        assert_eq!(
            names,
            ["process-email", "schedule-meeting", "update-document", "lock-workstation"]
        );
    }

    #[test]
    fn every_scripted_key_name_is_in_the_vocabulary() {
        let geom = ScreenGeometry::new(1920, 1080, 10);
        for script in default_routine(&geom) {
            for step in &script.steps {
                if let ActionStep::PressCombo { keys } = step {
                    for name in keys {
                        Key::parse(name).unwrap();
                    }
                }
            }
        }
    }

    #[test]
    fn taskbar_click_tracks_the_display_height() {
        let geom = ScreenGeometry::new(2560, 1440, 10);
        match &process_email(&geom).steps[0] {
            ActionStep::MoveClick { x, y, .. } => assert_eq!((*x, *y), (100, 1435)),
            other => panic!("unexpected step {:?}", other),
        }
    }
}
