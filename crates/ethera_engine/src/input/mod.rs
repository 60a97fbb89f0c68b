//! Input handling
//!
//! The host (window, terminal, test harness) turns its native callbacks into
//! [`InputEvent`]s and pushes them onto an [`EventQueue`]. Once per tick the
//! engine drains the queue into the active scene, which forwards each event
//! to the listeners registered for it.

pub mod events;
pub mod listener;
pub mod queue;

pub use events::{FocusEvent, InputEvent, KeyEvent, MouseEvent, MouseWheelEvent};
pub use listener::{FocusListener, KeyListener, MouseListener, MouseMotionListener, MouseWheelListener};
pub use queue::EventQueue;

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during an input event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key
        const SHIFT = 0b0001;
        /// Control key
        const CONTROL = 0b0010;
        /// Alt / option key
        const ALT = 0b0100;
        /// Meta / command / windows key
        const META = 0b1000;
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Digit key 0-9
    Digit(u8),
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Shift key
    Shift,
    /// Control key
    Control,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}
