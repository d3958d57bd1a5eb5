//! Main TUI application
//!
//! Owns the dialog controller and the event loop. Handler implementations are
//! in the handlers/ module.

use std::{io, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use murmur_core::{
    AppConfig, ButtonState, Completion, CompletionTransport, DialogConfig, DialogController,
    DialogServices, HttpTransport, LayoutConfig, Size,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::tui::components::{render_button, render_dialog, render_notices};
use crate::tui::input::TerminalKeyboard;
use crate::tui::measure::CellMeasure;
use crate::tui::theme::Theme;

/// Frame interval; the caret blink and notice expiry count these ticks
const TICK: Duration = Duration::from_millis(16);

/// Layout preset in terminal cells, used when the config has no `[dialog.layout]`
pub fn terminal_layout() -> LayoutConfig {
    LayoutConfig {
        button_width: 10.0,
        button_height: 3.0,
        button_margin: 1.0,
        panel_side_margin: 4.0,
        panel_top: 2.0,
        panel_height: 20.0,
        panel_padding: 1.0,
        font_size: 1.0,
        line_height: 1.0,
        scroll_track_width: 1.0,
        min_thumb: 1.0,
        section_gap: 1.0,
        footer_height: 1.0,
    }
}

pub struct App {
    pub(crate) controller: DialogController,
    pub(crate) button: ButtonState,
    pub(crate) keyboard: TerminalKeyboard,
    completions: mpsc::UnboundedReceiver<Completion>,
    theme: Theme,
    pub(crate) needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, runtime: Handle) -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size().context("Failed to read terminal size")?;
        let (transport, completions) = HttpTransport::new(config.completion, runtime);
        Ok(Self::with_transport(
            config.dialog,
            Box::new(transport),
            completions,
            Size::new(f32::from(cols), f32::from(rows)),
        ))
    }

    pub(crate) fn with_transport(
        dialog: DialogConfig,
        transport: Box<dyn CompletionTransport>,
        completions: mpsc::UnboundedReceiver<Completion>,
        screen: Size,
    ) -> Self {
        let layout = dialog.layout.clone().unwrap_or_else(terminal_layout);
        let keyboard = TerminalKeyboard::new();
        let controller = DialogController::new(
            dialog,
            layout,
            screen,
            DialogServices {
                keyboard: Box::new(keyboard.clone()),
                transport,
                measure: Box::new(CellMeasure),
            },
        );
        let button = ButtonState::new(controller.geometry().button);

        Self {
            controller,
            button,
            keyboard,
            completions,
            theme: Theme::default(),
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticker = tokio::time::interval(TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            if self.poll_completions() {
                self.needs_redraw = true;
            }
            if !self.controller.notices().is_empty() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => {
                                self.handle_key(key);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                                self.needs_redraw = true;
                            }
                            Event::Paste(text) => {
                                self.keyboard.paste(&text);
                                self.needs_redraw = true;
                            }
                            Event::Resize(cols, rows) => {
                                self.resize(cols, rows);
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ = ticker.tick() => self.on_tick(),
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Drain finished completions into the controller
    pub(crate) fn poll_completions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completions.try_recv() {
            self.controller.on_completion(completion);
            changed = true;
        }
        changed
    }

    /// Timer tick; caret blink and notice expiry count these only
    pub(crate) fn on_tick(&mut self) {
        if self.controller.tick() || self.keyboard.is_open() {
            self.needs_redraw = true;
        }
    }

    pub(crate) fn resize(&mut self, cols: u16, rows: u16) {
        self.controller
            .resize(Size::new(f32::from(cols), f32::from(rows)));
        self.button.bounds = self.controller.geometry().button;
    }

    fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let vm = self.controller.view_model(&self.button);
        let buf = f.buffer_mut();

        render_button(buf, &vm, &self.theme);
        render_dialog(buf, &vm, &self.keyboard.line(), &self.theme);
        render_notices(buf, area, self.controller.notices(), &self.theme);
    }
}
