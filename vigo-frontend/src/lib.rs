use action::ActionResult;
use error::AppError;
use event::Message;
use futures::StreamExt;
use model::Model;
use settings::Settings;
use terminal::TerminalWrapper;
use update::update_model;
use view::render_model;

use vigo_buffer::model::Redraw;
use vigo_keymap::MessageResolver;

pub mod action;
pub mod error;
pub mod event;
pub mod layout;
pub mod model;
pub mod open;
pub mod settings;
mod terminal;
pub mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let buffer = open::load(settings.startup_path.as_deref())?;

    let mut terminal = TerminalWrapper::start()?;
    let mut model = Model::new(settings, buffer);

    tracing::debug!("starting with model state: {:?}", model);

    let result = run_loop(&mut terminal, &mut model).await;
    if let Err(error) = &result {
        tracing::error!("session ended with error: {:?}", error);
    }

    terminal.shutdown()?;

    result
}

async fn run_loop(terminal: &mut TerminalWrapper, model: &mut Model) -> Result<(), AppError> {
    let size = terminal.size()?;
    update_model(model, Message::Resize(size.width, size.height))?;
    render_model(terminal, model)?;

    let resolver = MessageResolver::default();
    let mut reader = crossterm::event::EventStream::new();

    while let Some(event) = reader.next().await {
        let messages = event::handle_crossterm_event(&resolver, &model.cursor.mode, event?);
        if messages.is_empty() {
            continue;
        }

        tracing::debug!("received messages: {:?}", messages);

        let mut redraw = Redraw::None;
        let mut actions = Vec::new();
        for message in messages {
            let (level, message_actions) = update_model(model, message)?;
            redraw = redraw.max(level);
            actions.extend(message_actions);
        }

        if action::exec(terminal, actions)? == ActionResult::Quit {
            tracing::debug!("closing session");
            break;
        }

        if redraw != Redraw::None {
            render_model(terminal, model)?;
        }
    }

    Ok(())
}
