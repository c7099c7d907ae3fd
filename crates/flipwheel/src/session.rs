use crate::content::{Company, Payload};
use crate::events::AppEvent;
use crate::view;
use carousel::{SelectionController, SelectionState, WheelLayout};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventAction {
    pub should_redraw: bool,
    pub should_quit: bool,
}

impl EventAction {
    pub fn new(should_redraw: bool, should_quit: bool) -> Self {
        Self {
            should_redraw,
            should_quit,
        }
    }
}

/// A controller over a borrowed entity list plus the layout used to draw it.
pub struct Session<'a> {
    controller: SelectionController<'a, Payload>,
    layout: WheelLayout,
}

impl<'a> Session<'a> {
    pub fn new(entities: &'a [Company], layout: WheelLayout) -> Self {
        Self {
            controller: SelectionController::new(entities),
            layout,
        }
    }

    pub fn controller(&self) -> &SelectionController<'a, Payload> {
        &self.controller
    }

    pub fn state(&self) -> SelectionState {
        self.controller.state()
    }

    pub fn handle(&mut self, event: &AppEvent) -> EventAction {
        let before = self.controller.state();

        let after = match event {
            AppEvent::Select(index) => self.controller.select(*index),
            AppEvent::SelectId(id) => self.controller.select_id(id),
            AppEvent::Next => self.controller.select_next(),
            AppEvent::Prev => self.controller.select_previous(),
            AppEvent::Flip => self.controller.toggle_flip(),
            AppEvent::Face(face) => self.controller.show_face(*face),
            AppEvent::Show => return EventAction::new(true, false),
            AppEvent::Quit => return EventAction::new(false, true),
        };

        if after != before {
            log::debug!("session: {:?} -> {:?}", event, after);
        }
        EventAction::new(after != before, false)
    }

    pub fn frame(&self) -> String {
        view::render(&self.controller, &self.layout)
    }

    /// Reads one command per line and draws a frame whenever the state
    /// changes. Bad lines are reported and skipped.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        write!(output, "{}", self.frame())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let event = match line.parse::<AppEvent>() {
                Ok(event) => event,
                Err(e) => {
                    log::warn!("Ignoring input '{}': {}", line.trim(), e);
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };

            let action = self.handle(&event);
            if action.should_quit {
                break;
            }
            if action.should_redraw {
                write!(output, "{}", self.frame())?;
                output.flush()?;
            }
        }
        Ok(())
    }
}
