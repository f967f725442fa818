//! Blocking notifications shown to the operator.

use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Notice {
    /// Actual-value update attempted with no history entry selected.
    SelectionRequired,
    /// Actual value stored by the service.
    ActualUpdated,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::SelectionRequired => "Выберите Request ID из истории",
            Notice::ActualUpdated => "Фактические данные обновлены",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Presents a notice and returns once the operator has acknowledged it.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}
