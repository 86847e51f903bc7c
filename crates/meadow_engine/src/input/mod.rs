//! Keyboard input for butterfly steering
//!
//! Key events travel over a `crossbeam` channel from any thread. The frame
//! loop drains the channel once per frame with [`InputState::drain`] and reads
//! a single movement snapshot; events never touch the world directly.

use std::collections::HashSet;

use crossbeam::channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::Vec3;

/// Errors raised by the input event source
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The input state was torn down; the event was dropped
    #[error("Input channel disconnected")]
    Disconnected,
}

/// Keys that steer the butterfly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Up arrow (+y)
    ArrowUp,
    /// Down arrow (-y)
    ArrowDown,
    /// Left arrow (-x)
    ArrowLeft,
    /// Right arrow (+x)
    ArrowRight,
    /// W key (+z)
    W,
    /// S key (-z)
    S,
}

impl KeyCode {
    /// Parse a browser-style key name; unknown keys yield `None`
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "w" => Some(Self::W),
            "s" => Some(Self::S),
            _ => {
                log::trace!("Ignoring unmapped key '{name}'");
                None
            }
        }
    }

    /// Unit direction this key pushes the butterfly in
    pub fn direction(self) -> Vec3 {
        match self {
            Self::ArrowUp => Vec3::new(0.0, 1.0, 0.0),
            Self::ArrowDown => Vec3::new(0.0, -1.0, 0.0),
            Self::ArrowLeft => Vec3::new(-1.0, 0.0, 0.0),
            Self::ArrowRight => Vec3::new(1.0, 0.0, 0.0),
            Self::W => Vec3::new(0.0, 0.0, 1.0),
            Self::S => Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

/// A key going down or up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key
    pub key: KeyCode,
    /// `true` for key-down, `false` for key-up
    pub pressed: bool,
}

/// How key events turn into per-frame movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SteeringMode {
    /// Each key-down adds `step` to a persistent velocity that is never reset
    #[default]
    Accumulate,
    /// Movement is `step` along every currently held key
    Held,
}

/// Per-frame movement vector with named axes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementIntent {
    x: f32,
    y: f32,
    z: f32,
}

impl MovementIntent {
    /// Horizontal component
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical component
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Depth component
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Set the horizontal component
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Set the vertical component
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Set the depth component
    pub fn set_z(&mut self, z: f32) {
        self.z = z;
    }

    /// Add `amount` along `direction`
    pub fn push(&mut self, direction: Vec3, amount: f32) {
        self.set_x(direction.x.mul_add(amount, self.x));
        self.set_y(direction.y.mul_add(amount, self.y));
        self.set_z(direction.z.mul_add(amount, self.z));
    }

    /// Zero every axis
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// As a vector
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Cloneable handle for feeding key events from any thread
#[derive(Debug, Clone)]
pub struct KeySender {
    sender: Sender<KeyEvent>,
}

impl KeySender {
    /// Send a key-down
    pub fn press(&self, key: KeyCode) -> Result<(), InputError> {
        self.send(KeyEvent { key, pressed: true })
    }

    /// Send a key-up
    pub fn release(&self, key: KeyCode) -> Result<(), InputError> {
        self.send(KeyEvent { key, pressed: false })
    }

    /// Send a raw event
    pub fn send(&self, event: KeyEvent) -> Result<(), InputError> {
        self.sender.send(event).map_err(|_| InputError::Disconnected)
    }

    /// Parse and send a key-down by browser key name; unknown names are ignored
    pub fn press_named(&self, name: &str) -> Result<(), InputError> {
        match KeyCode::from_key_name(name) {
            Some(key) => self.press(key),
            None => Ok(()),
        }
    }
}

/// Movement state fed by the key event channel
pub struct InputState {
    sender: Sender<KeyEvent>,
    receiver: Option<Receiver<KeyEvent>>,
    mode: SteeringMode,
    step: f32,
    movement: MovementIntent,
    held: HashSet<KeyCode>,
}

impl InputState {
    /// Create an input state; `step` is the movement added per key
    pub fn new(mode: SteeringMode, step: f32) -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver: Some(receiver),
            mode,
            step,
            movement: MovementIntent::default(),
            held: HashSet::new(),
        }
    }

    /// A new handle for producers
    pub fn sender(&self) -> KeySender {
        KeySender {
            sender: self.sender.clone(),
        }
    }

    /// Apply every pending event without blocking; returns how many were read
    pub fn drain(&mut self) -> usize {
        // Cloned so `apply` can borrow `self`
        let Some(receiver) = self.receiver.clone() else {
            return 0;
        };

        let mut applied = 0;
        while let Ok(event) = receiver.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Apply one event immediately
    pub fn apply(&mut self, event: KeyEvent) {
        match self.mode {
            SteeringMode::Accumulate => {
                if event.pressed {
                    self.movement.push(event.key.direction(), self.step);
                }
            }
            SteeringMode::Held => {
                if event.pressed {
                    self.held.insert(event.key);
                } else {
                    self.held.remove(&event.key);
                }
                self.movement.clear();
                for key in &self.held {
                    self.movement.push(key.direction(), self.step);
                }
            }
        }
    }

    /// Movement snapshot for the current frame
    pub fn movement(&self) -> MovementIntent {
        self.movement
    }

    /// Steering mode
    pub fn mode(&self) -> SteeringMode {
        self.mode
    }

    /// Stop accepting events; later sends report [`InputError::Disconnected`]
    pub fn close(&mut self) {
        if self.receiver.take().is_some() {
            log::debug!("Input channel closed");
        }
    }

    /// Whether [`InputState::close`] has run
    pub fn is_closed(&self) -> bool {
        self.receiver.is_none()
    }
}
