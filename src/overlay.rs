// src/overlay.rs
//! Overlay customization events.
//!
//! Data carried to listeners just before the host draws an overlay. The host
//! owns drawing; these types only hold the values listeners may inspect or
//! adjust.

/// Boss health bar about to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct BossBar {
    pub id: u64,
    pub name: String,
    /// Fill fraction in `0.0..=1.0`.
    pub progress: f32,
}

/// Fired before a boss bar is drawn. Cancelling hides this bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BossEventProgress {
    pub boss: BossBar,
    pub x: i32,
    pub y: i32,
    /// Vertical step applied before the next bar; listeners may change it.
    pub increment: i32,
}

/// Fired before the debug screen text is drawn. Lines may be added or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugText {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

/// Fired before the chat overlay is drawn. The position may be moved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chat {
    pub pos_x: i32,
    pub pos_y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OverlayKind {
    BossEventProgress,
    DebugText,
    Chat,
}

impl OverlayKind {
    /// Only boss bars can be suppressed.
    pub fn is_cancellable(self) -> bool {
        matches!(self, OverlayKind::BossEventProgress)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayEvent {
    BossEventProgress(BossEventProgress),
    DebugText(DebugText),
    Chat(Chat),
}

impl OverlayEvent {
    pub fn kind(&self) -> OverlayKind {
        match self {
            OverlayEvent::BossEventProgress(_) => OverlayKind::BossEventProgress,
            OverlayEvent::DebugText(_) => OverlayKind::DebugText,
            OverlayEvent::Chat(_) => OverlayKind::Chat,
        }
    }

    pub fn is_cancellable(&self) -> bool {
        self.kind().is_cancellable()
    }

    pub fn as_boss_mut(&mut self) -> Option<&mut BossEventProgress> {
        match self {
            OverlayEvent::BossEventProgress(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_debug_text_mut(&mut self) -> Option<&mut DebugText> {
        match self {
            OverlayEvent::DebugText(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_chat_mut(&mut self) -> Option<&mut Chat> {
        match self {
            OverlayEvent::Chat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BossEventProgress> for OverlayEvent {
    fn from(e: BossEventProgress) -> Self {
        OverlayEvent::BossEventProgress(e)
    }
}

impl From<DebugText> for OverlayEvent {
    fn from(e: DebugText) -> Self {
        OverlayEvent::DebugText(e)
    }
}

impl From<Chat> for OverlayEvent {
    fn from(e: Chat) -> Self {
        OverlayEvent::Chat(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_cancellation() {
        let chat: OverlayEvent = Chat { pos_x: 2, pos_y: 40 }.into();
        assert_eq!(chat.kind(), OverlayKind::Chat);
        assert!(!chat.is_cancellable());

        let boss: OverlayEvent = BossEventProgress {
            boss: BossBar { id: 7, name: "wither".into(), progress: 0.5 },
            x: 10,
            y: 12,
            increment: 19,
        }
        .into();
        assert!(boss.is_cancellable());
        assert!(!OverlayKind::DebugText.is_cancellable());
    }

    #[test]
    fn typed_accessors() {
        let mut ev: OverlayEvent = DebugText::default().into();
        ev.as_debug_text_mut().unwrap().left.push("fps: 60".into());
        assert!(ev.as_chat_mut().is_none());
        assert!(ev.as_boss_mut().is_none());
        match ev {
            OverlayEvent::DebugText(t) => assert_eq!(t.left, vec!["fps: 60".to_string()]),
            _ => panic!("expected debug text"),
        }
    }
}
