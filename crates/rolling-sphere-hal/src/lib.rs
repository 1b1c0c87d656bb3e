#![no_std]

/// Abstracts user input across platforms.
pub trait InputSource {
    /// Initialize the input subsystem.
    fn init(&mut self);

    /// Poll for input events. Non-blocking.
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Source of uniformly distributed random bytes.
///
/// The firework seeds every burst from this; hosts decide where the
/// entropy comes from (OS RNG, seeded PRNG, fixed sequence in tests).
pub trait EntropySource {
    fn next_byte(&mut self) -> u8;
}

/// Mouse buttons the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Pop-up menus exposed by the host window.
///
/// Entries are addressed by the same 0/1-based ids the menus were built with,
/// so this crate stays independent of the scene command types in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    /// Top-level entries: 1 = default view point, 2 = quit, 3 = wireframe toggle.
    Main,
    Shadow,
    ShadowBlending,
    GroundTexture,
    SphereTexture,
    Firework,
    Lighting,
    Shading,
    LightSource,
    Fog,
}

/// Platform-agnostic input events.
///
/// Events are edge-triggered: one event per key press, button press or menu
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable key press (case-sensitive).
    Key(char),
    /// A mouse button went down.
    MouseDown(MouseButton),
    /// An entry was picked from one of the pop-up menus.
    Menu { menu: MenuKind, entry: u8 },
    /// The window was resized to the given pixel dimensions.
    Resize { width: u32, height: u32 },
}
