use std::{
    sync::{Arc, mpsc},
    time::{Duration, Instant},
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use versewise_client::{AnswerSource, QueryOutcome, QueryRequest, QueryWorker};
use versewise_engine::{Message, Reveal, Scripture, builtin_scriptures};

use crate::ui::theme::Theme;

/// Tick floor while a query is in flight, so the shimmer keeps pulsing.
const SHIMMER_TICK: Duration = Duration::from_millis(120);
/// Tick floor when nothing is animating.
const IDLE_TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Picker,
    Chat,
}

pub struct App {
    pub screen: Screen,
    pub theme: Theme,
    pub should_quit: bool,

    // Picker
    pub scriptures: &'static [Scripture],
    pub picker_state: ListState,

    // Chat
    pub scripture: Option<&'static Scripture>,
    pub messages: Vec<Message>,
    pub input: String,
    pub is_loading: bool,
    /// Reveal for the newest assistant message; older ones render in full.
    pub reveal: Reveal,
    /// Index into `messages` of the message the reveal belongs to.
    pub revealing_idx: Option<usize>,
    pub scroll: u16,
    pub stick_to_bottom: bool,
    /// Monotonic draw counter driving the loading shimmer.
    pub tick: usize,
    suggestion_idx: usize,

    worker: QueryWorker,
    outcomes: mpsc::Receiver<(u64, QueryOutcome)>,
}

impl App {
    pub fn new(source: Arc<dyn AnswerSource>, theme: Theme, reveal_interval: Duration) -> Self {
        let (worker, outcomes) = QueryWorker::new(source);
        let mut picker_state = ListState::default();
        picker_state.select(Some(0));

        Self {
            screen: Screen::Picker,
            theme,
            should_quit: false,
            scriptures: builtin_scriptures(),
            picker_state,
            scripture: None,
            messages: Vec::new(),
            input: String::new(),
            is_loading: false,
            reveal: Reveal::new(reveal_interval),
            revealing_idx: None,
            scroll: 0,
            stick_to_bottom: true,
            tick: 0,
            suggestion_idx: 0,
            worker,
            outcomes,
        }
    }

    /// How long the event loop may block before the next animation deadline.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let floor = if self.is_loading { SHIMMER_TICK } else { IDLE_TICK };
        match self.reveal.next_due() {
            Some(due) => due.saturating_duration_since(now).min(floor),
            None => floor,
        }
    }

    /// Applies everything that is due between draws: finished queries and
    /// the next reveal advance.
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);

        while let Ok((generation, outcome)) = self.outcomes.try_recv() {
            if !self.worker.accepts(generation) {
                log::debug!("dropping stale outcome for generation {generation}");
                continue;
            }
            self.is_loading = false;
            let answer = outcome.into_answer_text();
            self.messages.push(Message::assistant(&answer));
            self.revealing_idx = Some(self.messages.len() - 1);
            self.reveal.start(answer, now);
            self.stick_to_bottom = true;
        }

        if self.reveal.poll(now) {
            self.stick_to_bottom = true;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::Picker => self.handle_picker_key(key),
            Screen::Chat => self.handle_chat_key(key),
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.move_picker(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_picker(-1),
            KeyCode::Enter => {
                if let Some(i) = self.picker_state.selected()
                    && let Some(scripture) = self.scriptures.get(i)
                {
                    self.enter_chat(scripture);
                }
            }
            _ => {}
        }
    }

    fn move_picker(&mut self, delta: isize) {
        let len = self.scriptures.len() as isize;
        let current = self.picker_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.picker_state.select(Some(next as usize));
    }

    pub fn enter_chat(&mut self, scripture: &'static Scripture) {
        self.screen = Screen::Chat;
        self.scripture = Some(scripture);
        self.messages.clear();
        self.input.clear();
        self.is_loading = false;
        self.reveal.cancel();
        self.revealing_idx = None;
        self.scroll = 0;
        self.stick_to_bottom = true;
        self.suggestion_idx = 0;
        self.worker.abort();
    }

    fn leave_chat(&mut self) {
        self.worker.abort();
        self.reveal.cancel();
        self.is_loading = false;
        self.screen = Screen::Picker;
        self.scripture = None;
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.is_loading {
                    self.stop_generation();
                } else {
                    self.leave_chat();
                }
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab => self.cycle_suggestion(),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::End => self.stick_to_bottom = true,
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    /// Aborts the in-flight query; its eventual result will be dropped.
    fn stop_generation(&mut self) {
        self.worker.abort();
        self.is_loading = false;
    }

    fn scroll_by(&mut self, delta: i32) {
        self.stick_to_bottom = delta > 0 && self.stick_to_bottom;
        let scroll = i64::from(self.scroll) + i64::from(delta);
        self.scroll = scroll.clamp(0, u16::MAX as i64) as u16;
    }

    /// Cycles the welcome suggestions into the input while the transcript is
    /// still empty.
    fn cycle_suggestion(&mut self) {
        if !self.messages.is_empty() {
            return;
        }
        if let Some(scripture) = self.scripture {
            let suggestions = &scripture.suggested_questions;
            self.input = suggestions[self.suggestion_idx % suggestions.len()].to_string();
            self.suggestion_idx += 1;
        }
    }

    pub fn submit(&mut self) {
        if self.is_loading {
            return;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        let Some(scripture) = self.scripture else {
            return;
        };

        self.messages.push(Message::user(&text));
        self.input.clear();
        self.is_loading = true;
        self.stick_to_bottom = true;

        self.worker.submit(QueryRequest {
            user_query: text,
            religion: scripture.tradition.to_string(),
            scripture: scripture.name.to_string(),
        });
    }

    /// The content to render for the message at `idx`: the revealed prefix
    /// for the message currently revealing, the full text otherwise.
    pub fn visible_content<'a>(&'a self, idx: usize, message: &'a Message) -> &'a str {
        if self.revealing_idx == Some(idx) {
            self.reveal.revealed_text()
        } else {
            &message.content
        }
    }

    /// Whether the message at `idx` is still being revealed (drives the caret).
    pub fn is_revealing(&self, idx: usize) -> bool {
        self.revealing_idx == Some(idx) && !self.reveal.is_complete()
    }
}
