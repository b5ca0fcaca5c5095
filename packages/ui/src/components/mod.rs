//! Small building blocks shared by every form and page.

mod button;
pub use button::{Button, ButtonVariant};

mod field;
pub use field::{control_class, Field, FieldMessage, Input, Label, Textarea, CONTROL_CLASS};

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay};

mod toast;
pub use toast::{use_toast, Toast, ToastKind, ToastOptions, ToastProvider, Toasts};
