use crate::content::{Company, Payload};
use carousel::{Face, Placement, SelectionController, WheelLayout};
use serde_json::Value;
use std::fmt::{self, Write};

pub const EMPTY_MESSAGE: &str = "NO DATA AVAILABLE";
pub const SERIAL_BASE: usize = 1024; // card footer id = active index + base
const COLUMN_WIDTH: f64 = 10.0; // layout units per indent column
const CARD_RULE: &str = "----------------------------------------";

struct EntryRenderer<'a> {
    entity: &'a Company,
    placement: Placement,
}

impl<'a> EntryRenderer<'a> {
    fn new(entity: &'a Company, placement: Placement) -> Self {
        Self { entity, placement }
    }

    fn draw(&self, out: &mut impl Write) -> fmt::Result {
        let state = EntryState::resolve(&self.placement);
        let indent = (self.placement.translate_x / COLUMN_WIDTH).round().max(0.0) as usize;
        writeln!(
            out,
            "{:indent$}{}{} {}",
            "",
            state.marker(),
            state.connector(),
            self.entity.name,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    Active,
    Neighbor,
}

impl EntryState {
    fn resolve(placement: &Placement) -> Self {
        if placement.is_active() {
            Self::Active
        } else {
            Self::Neighbor
        }
    }

    fn marker(&self) -> char {
        match self {
            Self::Active => '◆',
            Self::Neighbor => '◇',
        }
    }

    fn connector(&self) -> &'static str {
        match self {
            Self::Active => "────",
            Self::Neighbor => "──",
        }
    }
}

struct CardRenderer<'a> {
    entity: &'a Company,
    face: Face,
    serial: usize,
}

impl<'a> CardRenderer<'a> {
    fn draw(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "{}", CARD_RULE)?;
        if self.face.is_back() {
            writeln!(out, "{} / TECHNICAL SPECS", self.entity.name)?;
        } else {
            writeln!(out, "{}", self.entity.name)?;
        }
        writeln!(out, "{}", CARD_RULE)?;
        draw_fields(out, self.entity.face(self.face))?;
        writeln!(out, "{}", CARD_RULE)?;
        match self.face {
            Face::Front => writeln!(out, "ID: {} // SYS_READY", self.serial),
            Face::Back => writeln!(out, "[RETURN]"),
        }
    }
}

fn draw_fields(out: &mut impl Write, payload: &Payload) -> fmt::Result {
    if payload.is_empty() {
        return writeln!(out, "(no details)");
    }
    for (key, value) in payload {
        match value {
            Value::String(s) => writeln!(out, "{}: {}", key, s)?,
            other => writeln!(out, "{}: {}", key, other)?,
        }
    }
    Ok(())
}

pub fn draw(
    out: &mut impl Write,
    controller: &SelectionController<'_, Payload>,
    layout: &WheelLayout,
) -> fmt::Result {
    let Some(current) = controller.current_entity() else {
        return writeln!(out, "{}", EMPTY_MESSAGE);
    };

    let entities = controller.entities();
    for placement in layout.visible(entities.len(), controller.active_index()) {
        EntryRenderer::new(&entities[placement.index], placement).draw(out)?;
    }
    writeln!(out)?;

    CardRenderer {
        entity: current,
        face: controller.face(),
        serial: controller.active_index() + SERIAL_BASE,
    }
    .draw(out)
}

pub fn render(controller: &SelectionController<'_, Payload>, layout: &WheelLayout) -> String {
    let mut frame = String::new();
    draw(&mut frame, controller, layout).expect("writing to a String is infallible");
    frame
}
