//! Transient notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: uuid::Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toasts {
    pub items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> uuid::Uuid {
        let id = uuid::Uuid::new_v4();
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> uuid::Uuid {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> uuid::Uuid {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&mut self, id: uuid::Uuid) {
        self.items.retain(|t| t.id != id);
    }
}
