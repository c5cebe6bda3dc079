#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Key {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,

    KeyA,
    KeyD,
    KeyS,
    KeyW,

    Escape,

    #[default]
    Unknown,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyPress { key: Key, repeat: bool },
    KeyRelease { key: Key },
    Unknown,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct InputState {
    pub accelerate: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

impl InputState {
    pub fn process(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPress { key, .. } => self.apply(key, true),
            InputEvent::KeyRelease { key } => self.apply(key, false),
            _ => {}
        }
    }

    fn apply(&mut self, key: Key, pressed: bool) {
        match key {
            Key::ArrowUp | Key::KeyW => self.accelerate = pressed,
            Key::ArrowDown | Key::KeyS => self.brake = pressed,
            Key::ArrowLeft | Key::KeyA => self.steer_left = pressed,
            Key::ArrowRight | Key::KeyD => self.steer_right = pressed,
            _ => {}
        }
    }
}
