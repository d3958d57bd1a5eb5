//! Dialog controller
//!
//! Sole owner and mutator of the dialog's state. Pointer and keyboard events
//! come in through the `on_*` handlers, completions through `on_completion`,
//! and the renderer pulls a `ViewModel` once per frame.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{DialogConfig, LayoutConfig};
use crate::constants;
use crate::geometry::{Point, Size};
use crate::hit_test::{self, HitTargets, Region};
use crate::keyboard::KeyboardService;
use crate::request::{CompletionDisposition, ErrorClassifier, RequestLifecycle, RequestPhase, RequestState, SubmitOutcome};
use crate::scroll::{self, ScrollController};
use crate::text::{TextLayoutCache, TextMeasure};
use crate::transport::{Completion, CompletionTransport};

use super::layout::DialogGeometry;
use super::notice::{Notice, NoticeQueue};
use super::state::{ActiveRegion, ButtonState, DialogState, InputMode};
use super::view_model::{ButtonView, PositionedLine, StatusCaption, ViewModel};

/// External collaborators the controller drives
pub struct DialogServices {
    pub keyboard: Box<dyn KeyboardService>,
    pub transport: Box<dyn CompletionTransport>,
    pub measure: Box<dyn TextMeasure>,
}

/// Text shown in the reply area for the current phase
fn reply_area_text<'a>(state: &'a DialogState, request: &RequestState) -> &'a str {
    match request.phase {
        RequestPhase::Idle => constants::dialog::CAPTION_AWAITING_INPUT,
        RequestPhase::Pending => constants::dialog::CAPTION_THINKING,
        RequestPhase::Success => &state.reply_text,
        RequestPhase::Failed => request.error_kind.caption(),
    }
}

fn status_caption(request: &RequestState) -> StatusCaption {
    match request.phase {
        RequestPhase::Idle => StatusCaption::AwaitingInput,
        RequestPhase::Pending => StatusCaption::Thinking,
        RequestPhase::Success => StatusCaption::Reply,
        RequestPhase::Failed => StatusCaption::Error(request.error_kind),
    }
}

/// Truncate to at most `max_chars` characters on a char boundary
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub struct DialogController {
    config: DialogConfig,
    layout: LayoutConfig,
    geometry: DialogGeometry,
    state: DialogState,
    request: RequestLifecycle,
    scroll: ScrollController,
    question_layout: TextLayoutCache,
    reply_layout: TextLayoutCache,
    notices: NoticeQueue,
    services: DialogServices,
    ticks: u64,
}

impl DialogController {
    pub fn new(
        config: DialogConfig,
        layout: LayoutConfig,
        screen: Size,
        services: DialogServices,
    ) -> Self {
        let geometry = DialogGeometry::compute(screen, &layout);
        let classifier = ErrorClassifier::with_overrides(&config.error_rules);
        Self {
            config,
            layout,
            geometry,
            state: DialogState::new(),
            request: RequestLifecycle::with_classifier(classifier),
            scroll: ScrollController::new(),
            question_layout: TextLayoutCache::new(),
            reply_layout: TextLayoutCache::new(),
            notices: NoticeQueue::new(),
            services,
            ticks: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn request_state(&self) -> &RequestState {
        self.request.state()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn geometry(&self) -> &DialogGeometry {
        &self.geometry
    }

    pub fn line_height(&self) -> f32 {
        self.layout.line_height
    }

    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    // =========================================================================
    // Pointer Events
    // =========================================================================

    pub fn on_pointer_down(&mut self, point: Point, button: &mut ButtonState) -> Region {
        let (content_height, viewport_height) = self.reply_extent();
        let targets = HitTargets {
            button: button.bounds,
            dialog: self.geometry.panel,
            scroll_track: self.geometry.scroll_track,
            dialog_visible: self.state.visible,
            content_overflows: scroll::max_offset(content_height, viewport_height) > 0.0,
        };
        let region = hit_test::classify(point, &targets);
        debug!(?region, x = point.x, y = point.y, "Pointer down");

        match region {
            Region::Button => {
                button.pressed = true;
                self.open_session();
            }
            Region::DialogExterior => self.close(),
            Region::DialogInterior => self.scroll.on_drag_start(point.y),
            Region::ScrollTrack | Region::None => {}
        }
        region
    }

    /// Returns the new offset when the move scrolled the reply
    pub fn on_pointer_move(&mut self, point: Point) -> Option<f32> {
        if !self.scroll.is_dragging() || self.state.input_mode == InputMode::AwaitingKeyboard {
            return None;
        }
        let (content_height, viewport_height) = self.reply_extent();
        Some(
            self.scroll
                .on_drag_move(point.y, content_height, viewport_height),
        )
    }

    pub fn on_pointer_up(&mut self, button: &mut ButtonState) {
        button.pressed = false;
        self.scroll.on_drag_end();
        if self.state.active_region == ActiveRegion::Button {
            self.state.active_region = match self.state.input_mode {
                InputMode::AwaitingKeyboard => ActiveRegion::InputField,
                _ => ActiveRegion::None,
            };
        }
    }

    /// Wheel or trackpad scroll over the open dialog
    pub fn on_wheel(&mut self, point: Point, delta: f32) -> Option<f32> {
        if !self.state.visible
            || self.state.input_mode == InputMode::AwaitingKeyboard
            || !self.geometry.panel.contains(point)
        {
            return None;
        }
        let (content_height, viewport_height) = self.reply_extent();
        Some(self.scroll.scroll_by(delta, content_height, viewport_height))
    }

    // =========================================================================
    // Keyboard Events
    // =========================================================================

    pub fn on_keyboard_confirm(&mut self, text: &str) {
        if self.state.input_mode != InputMode::AwaitingKeyboard {
            debug!(mode = ?self.state.input_mode, "Ignoring keyboard confirm");
            return;
        }

        let text = truncate_chars(text.trim(), self.config.keyboard.max_length).trim_end();
        if text.is_empty() {
            debug!("Empty question, keeping keyboard open");
            self.notices
                .push(Notice::new(constants::dialog::NOTICE_ENTER_CONTENT));
            return;
        }

        let outcome = self.request.submit(
            text,
            &self.config.system_prompt,
            self.services.transport.as_mut(),
        );
        match outcome {
            SubmitOutcome::Started(ticket) => {
                self.state.question_text = text.to_string();
                self.state.input_mode = InputMode::Submitted;
                self.state.active_region = ActiveRegion::None;
                self.scroll.reset();
                self.services.keyboard.close();
                debug!(generation = ticket.generation, "Question submitted");
            }
            SubmitOutcome::RejectedEmpty => {
                self.notices
                    .push(Notice::new(constants::dialog::NOTICE_ENTER_CONTENT));
            }
            SubmitOutcome::RejectedBusy => {
                warn!("Question confirmed while a request is still pending");
            }
        }
    }

    pub fn on_keyboard_dismissed(&mut self) {
        if self.state.input_mode == InputMode::AwaitingKeyboard {
            self.close();
        }
    }

    /// Close the dialog as an exterior tap would
    pub fn dismiss(&mut self) {
        if self.state.visible {
            self.close();
        }
    }

    // =========================================================================
    // Completion Delivery
    // =========================================================================

    /// Apply a completion delivered by the transport. Stale ones are dropped.
    pub fn on_completion(&mut self, completion: Completion) -> CompletionDisposition {
        let disposition = self.request.complete(completion);
        if let CompletionDisposition::Applied(phase) = disposition {
            if phase == RequestPhase::Success {
                self.state.reply_text = self.request.state().result_text.clone();
            }
            let (content_height, viewport_height) = self.reply_extent();
            self.scroll.clamp_to(content_height, viewport_height);
            info!(?phase, "Request finished");
        }
        disposition
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Advance one frame: caret blink and notice expiry
    pub fn tick(&mut self) -> bool {
        self.ticks = self.ticks.wrapping_add(1);
        self.notices.tick()
    }

    pub fn resize(&mut self, screen: Size) {
        self.geometry = DialogGeometry::compute(screen, &self.layout);
        let (content_height, viewport_height) = self.reply_extent();
        self.scroll.clamp_to(content_height, viewport_height);
    }

    pub fn view_model(&mut self, button: &ButtonState) -> ViewModel {
        let scale = if button.pressed {
            constants::dialog::PRESSED_SCALE
        } else {
            1.0
        };
        let button_view = ButtonView {
            bounds: button.bounds.scaled(scale),
            scale,
            pressed: button.pressed,
        };
        let status = status_caption(self.request.state());
        let notices = self.notices.visible().map(|n| n.message.clone()).collect();
        let caret_visible = (self.ticks / constants::dialog::CARET_BLINK_TICKS) % 2 == 0;

        if !self.state.visible {
            return ViewModel {
                visible: false,
                input_mode: self.state.input_mode,
                button: button_view,
                geometry: self.geometry,
                font_size: self.layout.font_size,
                line_height: self.layout.line_height,
                question_lines: Vec::new(),
                reply_lines: Vec::new(),
                reply_line_count: 0,
                scrollbar: None,
                status,
                caret_visible,
                hint: constants::dialog::HINT_CLOSE,
                notices,
            };
        }

        let question_lines = self
            .question_layout
            .wrap(
                &self.state.question_text,
                self.geometry.question.width,
                self.layout.font_size,
                self.services.measure.as_ref(),
            )
            .iter()
            .take(constants::dialog::QUESTION_LINES)
            .cloned()
            .collect();

        let lines = self.reply_lines();
        let line_height = self.layout.line_height;
        let viewport = self.geometry.reply;
        let offset = self.scroll.offset();
        let content_height = lines.len() as f32 * line_height;

        let reply_lines = if line_height > 0.0 {
            let first = (offset / line_height).floor() as usize;
            let end = (((offset + viewport.height) / line_height).ceil() as usize).min(lines.len());
            (first..end)
                .map(|i| PositionedLine {
                    text: lines[i].clone(),
                    y: viewport.y + i as f32 * line_height - offset,
                })
                .collect()
        } else {
            Vec::new()
        };

        ViewModel {
            visible: true,
            input_mode: self.state.input_mode,
            button: button_view,
            geometry: self.geometry,
            font_size: self.layout.font_size,
            line_height,
            question_lines,
            reply_lines,
            reply_line_count: lines.len(),
            scrollbar: scroll::scrollbar_geometry(
                self.geometry.scroll_track,
                offset,
                content_height,
                self.layout.min_thumb,
            ),
            status,
            caret_visible,
            hint: constants::dialog::HINT_CLOSE,
            notices,
        }
    }

    // =========================================================================
    // Session Management
    // =========================================================================

    fn open_session(&mut self) {
        self.state.open();
        self.request.reset();
        self.scroll.reset();
        self.notices.clear();
        self.services.keyboard.open(&self.config.keyboard);
        info!(
            generation = self.request.generation(),
            "Dialog session opened"
        );
    }

    /// Hide the dialog. An in-flight request keeps running but its result
    /// will be dropped as stale.
    fn close(&mut self) {
        if self.request.is_pending() {
            debug!("Closing with a pending request; its result will be ignored");
        }
        self.state.close();
        self.request.reset();
        self.scroll.on_drag_end();
        self.services.keyboard.close();
        info!("Dialog closed");
    }

    fn reply_lines(&mut self) -> Arc<Vec<String>> {
        let text = reply_area_text(&self.state, self.request.state());
        self.reply_layout.wrap(
            text,
            self.geometry.reply.width,
            self.layout.font_size,
            self.services.measure.as_ref(),
        )
    }

    /// (content height, viewport height) of the reply area
    fn reply_extent(&mut self) -> (f32, f32) {
        let lines = self.reply_lines().len();
        (
            lines as f32 * self.layout.line_height,
            self.geometry.reply.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ErrorKind;
    use crate::testing::{KeyboardCall, RecordingKeyboard, RecordingTransport};
    use crate::text::FixedWidthMeasure;

    const SCREEN: Size = Size::new(375.0, 667.0);

    struct Harness {
        controller: DialogController,
        button: ButtonState,
        keyboard: RecordingKeyboard,
        transport: RecordingTransport,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_config(DialogConfig::default())
        }

        fn with_config(config: DialogConfig) -> Self {
            let keyboard = RecordingKeyboard::default();
            let transport = RecordingTransport::default();
            let controller = DialogController::new(
                config,
                LayoutConfig::default(),
                SCREEN,
                DialogServices {
                    keyboard: Box::new(keyboard.clone()),
                    transport: Box::new(transport.clone()),
                    // 7 units per char at the default font size
                    measure: Box::new(FixedWidthMeasure::new(0.5)),
                },
            );
            let button = ButtonState::new(controller.geometry().button);
            Self {
                controller,
                button,
                keyboard,
                transport,
            }
        }

        fn press_button(&mut self) {
            let center = Point::new(
                self.button.bounds.x + self.button.bounds.width / 2.0,
                self.button.bounds.y + self.button.bounds.height / 2.0,
            );
            let region = self.controller.on_pointer_down(center, &mut self.button);
            assert_eq!(region, Region::Button);
            self.controller.on_pointer_up(&mut self.button);
        }

        fn tap(&mut self, point: Point) -> Region {
            let region = self.controller.on_pointer_down(point, &mut self.button);
            self.controller.on_pointer_up(&mut self.button);
            region
        }

        fn ask(&mut self, question: &str) {
            self.press_button();
            self.controller.on_keyboard_confirm(question);
        }

        fn phase(&self) -> RequestPhase {
            self.controller.request_state().phase
        }
    }

    #[test]
    fn test_button_opens_session_and_keyboard() {
        let mut h = Harness::new();
        let region = h
            .controller
            .on_pointer_down(Point::new(300.0, 600.0), &mut h.button);
        assert_eq!(region, Region::Button);
        assert!(h.button.pressed);
        assert_eq!(h.controller.state().active_region, ActiveRegion::Button);

        h.controller.on_pointer_up(&mut h.button);
        assert!(!h.button.pressed);

        let state = h.controller.state();
        assert!(state.visible);
        assert_eq!(state.input_mode, InputMode::AwaitingKeyboard);
        assert_eq!(state.active_region, ActiveRegion::InputField);
        assert_eq!(h.keyboard.calls(), vec![KeyboardCall::Open]);
        assert_eq!(
            h.keyboard.last_options().unwrap().max_length,
            constants::dialog::MAX_INPUT_LENGTH
        );
    }

    #[test]
    fn test_whitespace_question_keeps_keyboard_open() {
        // Scenario A
        let mut h = Harness::new();
        h.ask("  ");

        assert_eq!(h.phase(), RequestPhase::Idle);
        assert_eq!(
            h.controller.state().input_mode,
            InputMode::AwaitingKeyboard
        );
        assert!(h.transport.sent().is_empty());
        assert_eq!(h.keyboard.calls(), vec![KeyboardCall::Open]);
        let notices: Vec<_> = h.controller.notices().visible().collect();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, constants::dialog::NOTICE_ENTER_CONTENT);
    }

    #[test]
    fn test_successful_reply() {
        // Scenario B
        let mut h = Harness::new();
        h.ask("hello");

        assert_eq!(h.phase(), RequestPhase::Pending);
        assert_eq!(h.controller.state().input_mode, InputMode::Submitted);
        assert_eq!(h.controller.state().question_text, "hello");
        assert_eq!(
            h.keyboard.calls(),
            vec![KeyboardCall::Open, KeyboardCall::Close]
        );

        let vm = h.controller.view_model(&h.button);
        assert_eq!(vm.status, StatusCaption::Thinking);
        assert_eq!(vm.reply_lines[0].text, constants::dialog::CAPTION_THINKING);

        let ticket = h.transport.last_ticket().unwrap();
        let disposition = h.controller.on_completion(Completion::text(ticket, "hi!"));
        assert_eq!(
            disposition,
            CompletionDisposition::Applied(RequestPhase::Success)
        );
        assert_eq!(h.controller.request_state().result_text, "hi!");
        assert_eq!(h.controller.state().reply_text, "hi!");

        let vm = h.controller.view_model(&h.button);
        assert_eq!(vm.status, StatusCaption::Reply);
        assert_eq!(vm.question_lines, vec!["hello".to_string()]);
        assert_eq!(vm.reply_lines.len(), 1);
        assert_eq!(vm.reply_lines[0].text, "hi!");
        assert_eq!(vm.reply_lines[0].y, vm.geometry.reply.y);
        assert!(vm.scrollbar.is_none());
    }

    #[test]
    fn test_timeout_failure() {
        // Scenario C
        let mut h = Harness::new();
        h.ask("hello");
        let ticket = h.transport.last_ticket().unwrap();
        h.controller
            .on_completion(Completion::failed(ticket, "request timeout after 60s"));

        assert_eq!(h.phase(), RequestPhase::Failed);
        assert_eq!(h.controller.request_state().error_kind, ErrorKind::Timeout);

        let vm = h.controller.view_model(&h.button);
        assert_eq!(vm.status, StatusCaption::Error(ErrorKind::Timeout));
        assert!(!vm.reply_lines.is_empty());
    }

    #[test]
    fn test_late_completion_from_closed_session_is_discarded() {
        // Scenario D
        let mut h = Harness::new();
        h.ask("hello");
        let first = h.transport.last_ticket().unwrap();

        assert_eq!(h.tap(Point::new(5.0, 5.0)), Region::DialogExterior);
        assert!(!h.controller.state().visible);

        h.ask("world");
        let second = h.transport.last_ticket().unwrap();
        assert_ne!(first, second);
        assert_eq!(h.phase(), RequestPhase::Pending);

        assert_eq!(
            h.controller
                .on_completion(Completion::text(first, "answer to hello")),
            CompletionDisposition::Stale
        );
        assert_eq!(h.phase(), RequestPhase::Pending);
        assert!(h.controller.state().reply_text.is_empty());

        h.controller
            .on_completion(Completion::text(second, "answer to world"));
        assert_eq!(h.controller.state().reply_text, "answer to world");

        // The stale one arriving even later still cannot overwrite
        h.controller
            .on_completion(Completion::text(first, "answer to hello"));
        assert_eq!(h.controller.state().reply_text, "answer to world");
    }

    #[test]
    fn test_reopen_resets_request_even_mid_flight() {
        let mut h = Harness::new();
        h.ask("hello");
        assert_eq!(h.phase(), RequestPhase::Pending);

        h.press_button();
        assert_eq!(h.phase(), RequestPhase::Idle);
        assert!(h.controller.request_state().result_text.is_empty());
        assert!(h.controller.state().question_text.is_empty());
        assert_eq!(
            h.controller.state().input_mode,
            InputMode::AwaitingKeyboard
        );
    }

    #[test]
    fn test_reopen_after_success_clears_previous_reply() {
        let mut h = Harness::new();
        h.ask("hello");
        let ticket = h.transport.last_ticket().unwrap();
        h.controller.on_completion(Completion::text(ticket, "hi!"));

        h.press_button();
        assert_eq!(h.phase(), RequestPhase::Idle);
        assert!(h.controller.state().reply_text.is_empty());
        let vm = h.controller.view_model(&h.button);
        assert_eq!(vm.status, StatusCaption::AwaitingInput);
        assert!(vm.question_lines.is_empty());
    }

    #[test]
    fn test_long_reply_scrolls_within_bounds() {
        // Scenario E
        let mut h = Harness::new();
        h.ask("tell me a story");
        let ticket = h.transport.last_ticket().unwrap();

        let reply_width = h.controller.geometry().reply.width;
        let chars_per_line = (reply_width / 7.0).floor() as usize;
        let reply: String = "abcdefghij".repeat(50);
        assert_eq!(reply.len(), 500);
        h.controller.on_completion(Completion::text(ticket, reply));

        let vm = h.controller.view_model(&h.button);
        let expected_lines = 500usize.div_ceil(chars_per_line);
        assert_eq!(vm.reply_line_count, expected_lines);
        assert!(vm.scrollbar.is_some());

        let layout = LayoutConfig::default();
        let content_height = expected_lines as f32 * layout.line_height;
        let max = scroll::max_offset(content_height, h.controller.geometry().reply.height);
        assert!(max > 0.0);

        // Drag from inside the reply area upwards, far past the end
        let start = Point::new(100.0, 300.0);
        assert_eq!(
            h.controller.on_pointer_down(start, &mut h.button),
            Region::DialogInterior
        );
        let offset = h
            .controller
            .on_pointer_move(Point::new(100.0, 300.0 - max))
            .unwrap();
        assert_eq!(offset, max);
        let offset = h
            .controller
            .on_pointer_move(Point::new(100.0, -2000.0))
            .unwrap();
        assert_eq!(offset, max);
        h.controller.on_pointer_up(&mut h.button);

        let vm = h.controller.view_model(&h.button);
        let last = vm.reply_lines.last().unwrap();
        assert!(last.y < vm.geometry.reply.bottom());
        let thumb = vm.scrollbar.unwrap().thumb;
        assert!((thumb.bottom() - vm.geometry.scroll_track.bottom()).abs() < 0.001);
    }

    #[test]
    fn test_drag_ignored_while_awaiting_keyboard() {
        let mut h = Harness::new();
        h.press_button();
        assert_eq!(
            h.controller
                .on_pointer_down(Point::new(100.0, 300.0), &mut h.button),
            Region::DialogInterior
        );
        assert_eq!(h.controller.on_pointer_move(Point::new(100.0, 0.0)), None);
        assert_eq!(h.controller.scroll_offset(), 0.0);
    }

    #[test]
    fn test_dismiss_closes_only_while_awaiting_keyboard() {
        let mut h = Harness::new();
        h.press_button();
        h.controller.on_keyboard_dismissed();
        assert!(!h.controller.state().visible);
        assert_eq!(h.controller.state().input_mode, InputMode::Closed);

        h.ask("hello");
        h.controller.on_keyboard_dismissed();
        assert!(h.controller.state().visible);
        assert_eq!(h.controller.state().input_mode, InputMode::Submitted);
    }

    #[test]
    fn test_dismiss_makes_pending_result_stale() {
        let mut h = Harness::new();
        h.ask("hello");
        let ticket = h.transport.last_ticket().unwrap();
        h.controller.dismiss();
        assert!(!h.controller.state().visible);
        assert_eq!(
            h.controller.on_completion(Completion::text(ticket, "late")),
            CompletionDisposition::Stale
        );
    }

    #[test]
    fn test_confirm_outside_keyboard_mode_is_ignored() {
        let mut h = Harness::new();
        h.controller.on_keyboard_confirm("hello");
        assert!(h.transport.sent().is_empty());
        assert_eq!(h.phase(), RequestPhase::Idle);
    }

    #[test]
    fn test_long_question_is_truncated_to_max_length() {
        let mut config = DialogConfig::default();
        config.keyboard.max_length = 5;
        let mut h = Harness::with_config(config);
        h.ask("héllo world");
        assert_eq!(h.transport.sent()[0].1.prompt, "héllo");
        assert_eq!(h.controller.state().question_text, "héllo");
    }

    #[test]
    fn test_leading_whitespace_does_not_count_toward_max_length() {
        let mut config = DialogConfig::default();
        config.keyboard.max_length = 5;
        let mut h = Harness::with_config(config);
        h.ask("     hello");

        assert_eq!(h.phase(), RequestPhase::Pending);
        assert_eq!(h.controller.state().question_text, "hello");
        assert_eq!(h.transport.sent().len(), 1);
        assert!(h.controller.notices().is_empty());
    }

    #[test]
    fn test_configured_error_rules_classify_failures() {
        let mut config = DialogConfig::default();
        config.error_rules.push(crate::request::ClassifierRule {
            needle: "quota".to_string(),
            kind: ErrorKind::ServerError,
        });
        let mut h = Harness::with_config(config);
        h.ask("hello");

        let ticket = h.transport.last_ticket().unwrap();
        h.controller
            .on_completion(Completion::failed(ticket, "quota exceeded for key"));
        assert_eq!(h.phase(), RequestPhase::Failed);
        assert_eq!(h.controller.request_state().error_kind, ErrorKind::ServerError);
    }

    #[test]
    fn test_system_prompt_comes_from_config() {
        let mut config = DialogConfig::default();
        config.system_prompt = "Be brief.".to_string();
        let mut h = Harness::with_config(config);
        h.ask("hello");
        assert_eq!(h.transport.sent()[0].1.system_prompt, "Be brief.");
    }

    #[test]
    fn test_hidden_dialog_taps_are_inert() {
        let mut h = Harness::new();
        assert_eq!(h.tap(Point::new(100.0, 200.0)), Region::None);
        assert!(!h.controller.state().visible);
        assert!(h.keyboard.calls().is_empty());

        let vm = h.controller.view_model(&h.button);
        assert!(!vm.visible);
        assert!(vm.reply_lines.is_empty());
        assert_eq!(vm.button.scale, 1.0);
    }

    #[test]
    fn test_pressed_button_renders_scaled() {
        let mut h = Harness::new();
        h.controller
            .on_pointer_down(Point::new(300.0, 600.0), &mut h.button);
        let vm = h.controller.view_model(&h.button);
        assert_eq!(vm.button.scale, constants::dialog::PRESSED_SCALE);
        assert!(vm.button.bounds.width < h.button.bounds.width);
    }

    #[test]
    fn test_wheel_scrolls_after_submit_only() {
        let mut h = Harness::new();
        h.ask("story please");
        let ticket = h.transport.last_ticket().unwrap();
        h.controller
            .on_completion(Completion::text(ticket, "x".repeat(2000)));

        let inside = Point::new(100.0, 300.0);
        assert_eq!(h.controller.on_wheel(inside, 40.0), Some(40.0));
        assert_eq!(h.controller.on_wheel(Point::new(5.0, 5.0), 40.0), None);

        h.press_button();
        assert_eq!(h.controller.on_wheel(inside, 40.0), None);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut h = Harness::new();
        h.ask("story please");
        let ticket = h.transport.last_ticket().unwrap();
        h.controller
            .on_completion(Completion::text(ticket, "x".repeat(2000)));
        h.controller.on_wheel(Point::new(100.0, 300.0), 10_000.0);
        let before = h.controller.scroll_offset();
        assert!(before > 0.0);

        // A wider screen fits more chars per line, so there is less to scroll
        h.controller.resize(Size::new(800.0, 667.0));
        assert!(h.controller.scroll_offset() < before);
    }

    #[test]
    fn test_caret_blinks_with_ticks() {
        let mut h = Harness::new();
        h.press_button();
        assert!(h.controller.view_model(&h.button).caret_visible);
        for _ in 0..constants::dialog::CARET_BLINK_TICKS {
            h.controller.tick();
        }
        assert!(!h.controller.view_model(&h.button).caret_visible);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("日本語テキスト", 2), "日本");
        assert_eq!(truncate_chars("", 0), "");
    }
}
