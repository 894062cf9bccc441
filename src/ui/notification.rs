//! Short-lived toasts shown after create/edit/delete.

use std::collections::VecDeque;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::bottom_right_rect;
use crate::ui::theme::{FAILURE, SUCCESS, TEXT};

/// Queue depth; older toasts are dropped first.
const MAX_QUEUED: usize = 4;
const TOAST_WIDTH: u16 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    ticks_left: u32,
}

pub struct Notifications {
    queue: VecDeque<Notification>,
    ttl_ticks: u32,
}

impl Notifications {
    pub fn new(ttl_ticks: u32) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl_ticks: ttl_ticks.max(1),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into());
    }

    fn push(&mut self, level: NotificationLevel, message: String) {
        if self.queue.len() >= MAX_QUEUED {
            self.queue.pop_front();
        }
        self.queue.push_back(Notification {
            level,
            message,
            ticks_left: self.ttl_ticks,
        });
    }

    /// Age the front toast; it is removed once its ticks run out.
    pub fn on_tick(&mut self) {
        let Some(front) = self.queue.front_mut() else {
            return;
        };
        front.ticks_left = front.ticks_left.saturating_sub(1);
        if front.ticks_left == 0 {
            self.queue.pop_front();
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Draw the front toast above the footer.
pub fn render_notification(frame: &mut Frame, notifications: &Notifications, area: Rect) {
    let Some(notification) = notifications.current() else {
        return;
    };

    let (icon, color) = match notification.level {
        NotificationLevel::Success => ("✔", SUCCESS),
        NotificationLevel::Error => ("✖", FAILURE),
    };

    let rect = bottom_right_rect(TOAST_WIDTH, 3, 3, area);
    frame.render_widget(Clear, rect);
    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color)),
        Span::styled(notification.message.clone(), Style::default().fg(TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        rect,
    );
}
