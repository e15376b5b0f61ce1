use std::path::PathBuf;

use crate::{
    action::Action,
    model::{Model, PrintContent},
};

pub fn execute(model: &mut Model, cmd: &str) -> Vec<Action> {
    let (cmd, args) = match cmd.split_once(' ') {
        Some((cmd, args)) => (cmd, args.trim()),
        None => (cmd, ""),
    };

    match (cmd, args) {
        ("", "") => Vec::new(),
        ("q", "") => {
            if model.buffer.modified {
                tracing::warn!("refusing to quit with unsaved changes");
                print(
                    model,
                    PrintContent::Error(
                        "No write since last change (add ! to override)".to_string(),
                    ),
                );
                Vec::new()
            } else {
                vec![Action::Quit]
            }
        }
        ("q!", "") => vec![Action::Quit],
        ("w", path) => {
            save(model, path);
            Vec::new()
        }
        ("wq", path) => {
            if save(model, path) {
                vec![Action::Quit]
            } else {
                Vec::new()
            }
        }
        ("x", path) => {
            if (!model.buffer.modified && path.is_empty()) || save(model, path) {
                vec![Action::Quit]
            } else {
                Vec::new()
            }
        }
        _ => {
            let command = if args.is_empty() {
                cmd.to_string()
            } else {
                format!("{} {}", cmd, args)
            };

            tracing::warn!("unknown command: {}", command);
            print(
                model,
                PrintContent::Error(format!("Unknown command: {}", command)),
            );
            Vec::new()
        }
    }
}

/// Writes the buffer to `path`, or to the buffer's own path if `path` is
/// empty. A given path becomes the buffer's name once writing succeeded.
fn save(model: &mut Model, path: &str) -> bool {
    let target = if path.is_empty() {
        model.buffer.path.clone()
    } else {
        Some(PathBuf::from(path))
    };

    let target = match target {
        Some(it) => it,
        None => {
            print(model, PrintContent::Error("No file name".to_string()));
            return false;
        }
    };

    match model.buffer.save(&target) {
        Ok(()) => {
            let message = format!("\"{}\" {}L written", target.display(), model.buffer.lines.len());
            model.buffer.path = Some(target);
            print(model, PrintContent::Info(message));
            true
        }
        Err(error) => {
            tracing::error!("writing {:?} failed: {:?}", target, error);
            print(model, PrintContent::Error(format!("Error writing: {}", error)));
            false
        }
    }
}

fn print(model: &mut Model, content: PrintContent) {
    model.commandline.message = Some(content);
}
