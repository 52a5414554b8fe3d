pub mod alert;
pub mod button;
pub mod card;
pub mod confirm_modal;
pub mod input;
pub mod label;
pub mod textarea;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use button::*;
pub use card::*;
pub use confirm_modal::*;
pub use input::*;
pub use label::*;
pub use textarea::*;
